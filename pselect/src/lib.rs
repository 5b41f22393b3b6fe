//! A searchable, virtualized dropdown selector for terminal UIs.
//!
//! [`VirtualizedSelect`] is a controlled widget: the host owns the selection
//! and passes it in through [`SelectProps`] each time it forwards an event or
//! renders a frame. When the user activates a row the widget calls the host's
//! `on_change` callback with the complete next value.
//!
//! The popover list only renders the rows in view (see [`window`]), so option
//! lists with tens of thousands of entries stay responsive.

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod option;
pub mod overlay;
pub mod rect;
pub mod render;
pub mod row;
pub mod search;
pub mod select;
pub mod selection;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod window;

pub use buffer::{Buffer, Cell, Pen};
pub use config::SelectConfig;
pub use error::{Error, Result};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use filter::{FilteredList, filter_options};
pub use option::{OptionValue, SelectOption};
pub use rect::Rect;
pub use row::RowView;
pub use select::{SelectProps, VirtualizedSelect};
pub use selection::{SelectValue, SelectedValues, toggle};
pub use terminal::Terminal;
pub use theme::{Rgb, TextStyle, Theme};
pub use window::FixedSizeList;

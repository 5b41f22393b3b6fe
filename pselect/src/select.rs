//! The searchable, virtualized dropdown control.

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::config::SelectConfig;
use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::filter::FilteredList;
use crate::option::SelectOption;
use crate::overlay::{self, Anchor, OverlayPosition};
use crate::rect::Rect;
use crate::render::{
    PopoverLayout, PopoverView, TRIGGER_HEIGHT, TriggerView, popover_layout, popover_size,
    render_popover, render_trigger,
};
use crate::row::{RowData, RowView, render_row};
use crate::search::{SearchEdit, SearchInput};
use crate::selection::{self, SelectValue, SelectedValues};
use crate::theme::Theme;
use crate::window::FixedSizeList;

/// Inputs the host passes on every event and frame.
///
/// The control is controlled: `value` is the host's selection, and the
/// control only ever requests a new one through the `on_change` callback
/// given to [`VirtualizedSelect::handle_event`].
#[derive(Debug, Clone, Copy)]
pub struct SelectProps<'a> {
    pub options: &'a Arc<[SelectOption]>,
    pub value: Option<&'a SelectValue>,
    pub multiple: bool,
}

impl<'a> SelectProps<'a> {
    pub fn new(options: &'a Arc<[SelectOption]>) -> Self {
        Self {
            options,
            value: None,
            multiple: false,
        }
    }

    pub fn value(mut self, value: Option<&'a SelectValue>) -> Self {
        self.value = value;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }
}

/// A compact field that opens a popover with a search box and a windowed
/// list of options.
///
/// Owns only transient UI state: the search text, the popover anchor, the
/// list scroll position and the active row. The filtered list and the
/// selected-value set are derived from [`SelectProps`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use pselect::{Event, Key, SelectConfig, SelectOption, SelectProps, SelectValue, VirtualizedSelect};
///
/// let options: Arc<[SelectOption]> = vec![
///     SelectOption::new(1, "Alice"),
///     SelectOption::new(2, "Bob"),
/// ]
/// .into();
/// let mut select = VirtualizedSelect::new(SelectConfig::default());
/// select.set_focused(true);
///
/// let props = SelectProps::new(&options);
/// let mut picked = None;
/// select.handle_event(&props, &Event::key(Key::Enter), &mut |v| picked = Some(v));
/// select.handle_event(&props, &Event::key(Key::Down), &mut |v| picked = Some(v));
/// select.handle_event(&props, &Event::key(Key::Enter), &mut |v| picked = Some(v));
///
/// assert_eq!(picked, Some(SelectValue::Single(SelectOption::new(1, "Alice"))));
/// assert!(!select.is_open());
/// ```
#[derive(Debug)]
pub struct VirtualizedSelect {
    config: SelectConfig,
    theme: Theme,
    search: SearchInput,
    anchor: Anchor,
    filtered: FilteredList,
    selected: SelectedValues,
    /// `multiple` from the last synced props.
    multiple: bool,
    list: FixedSizeList,
    /// Row under the keyboard cursor or the mouse, as a filtered index.
    active: Option<usize>,
    focused: bool,
    /// Trigger rectangle from the last render.
    trigger: Rect,
    /// Popover regions from the last render, while open.
    popover: Option<PopoverLayout>,
}

impl VirtualizedSelect {
    pub fn new(config: SelectConfig) -> Self {
        let list = FixedSizeList::new(config.row_height as usize, config.list_height as usize)
            .with_overscan(config.overscan as usize);
        Self {
            config,
            theme: Theme::default(),
            search: SearchInput::new(),
            anchor: Anchor::new(),
            filtered: FilteredList::new(),
            selected: SelectedValues::default(),
            multiple: false,
            list,
            active: None,
            focused: false,
            trigger: Rect::default(),
            popover: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // -------------------------------------------------------------------------
    // Read state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.anchor.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close();
        }
    }

    pub fn search(&self) -> &str {
        self.search.text()
    }

    /// Replace the search text, as if typed.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search.set(text);
        self.active = None;
    }

    pub fn filtered(&self) -> &FilteredList {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn list(&self) -> &FixedSizeList {
        &self.list
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Text shown in the closed field for the host's current value.
    pub fn summary(&self, props: &SelectProps<'_>) -> String {
        selection::summary(props.value)
    }

    /// Bring derived state up to date with `props`: the filtered list, the
    /// list item count and the selected-value set.
    pub fn sync(&mut self, props: &SelectProps<'_>) {
        if self.filtered.update(props.options, self.search.text()) {
            self.list.set_item_count(self.filtered.len());
            self.active = None;
        }
        self.selected = SelectedValues::from_value(props.value);
        self.multiple = props.multiple;
    }

    /// Display state of the rows the list renders this frame, keyed by
    /// option value. Call [`sync`](Self::sync) first.
    pub fn row_views(&self) -> Vec<RowView<'_>> {
        let data = self.row_data();
        self.list
            .visible_range()
            .filter_map(|index| render_row(index, &data))
            .collect()
    }

    fn row_data(&self) -> RowData<'_> {
        RowData {
            filtered: &self.filtered,
            selected: &self.selected,
            multiple: self.multiple,
            active: self.active,
        }
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    fn open(&mut self) {
        self.anchor.open(self.trigger);
        self.focused = true;
        self.active = None;
        log::debug!(
            "VirtualizedSelect::open options={} query={:?}",
            self.filtered.len(),
            self.search.text()
        );
    }

    /// Close the popover. Does nothing when it is already closed.
    pub fn close(&mut self) {
        if !self.anchor.close() {
            return;
        }
        self.popover = None;
        self.active = None;
        if self.config.reset_search_on_close {
            self.search.clear();
        }
        log::debug!("VirtualizedSelect::close");
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle one input event.
    ///
    /// `on_change` is called at most once, synchronously, with the complete
    /// next selection whenever a row is activated.
    pub fn handle_event(
        &mut self,
        props: &SelectProps<'_>,
        event: &Event,
        on_change: &mut dyn FnMut(SelectValue),
    ) -> EventResult {
        self.sync(props);

        match *event {
            Event::Click { x, y, button } => self.handle_click(props, x, y, button, on_change),
            Event::Key { key, modifiers } => self.handle_key(props, key, modifiers, on_change),
            Event::Scroll { x, y, delta } => self.handle_scroll(x, y, delta),
            Event::MouseMove { x, y } => self.handle_hover(x, y),
            Event::Resize { .. } => EventResult::Ignored,
        }
    }

    fn handle_click(
        &mut self,
        props: &SelectProps<'_>,
        x: u16,
        y: u16,
        button: MouseButton,
        on_change: &mut dyn FnMut(SelectValue),
    ) -> EventResult {
        if self.is_open() {
            let Some(layout) = self.popover.filter(|l| l.frame.contains(x, y)) else {
                // Any click outside the popover dismisses it
                self.close();
                return EventResult::Consumed;
            };
            if button != MouseButton::Left {
                return EventResult::Consumed;
            }
            if layout.clear.is_some_and(|clear| clear.contains(x, y)) {
                self.clear_search(props);
            } else if layout.list.contains(x, y)
                && let Some(row) = self.list.row_at((y - layout.list.y) as usize)
            {
                self.activate(props, row, on_change);
            }
            return EventResult::Consumed;
        }

        if button == MouseButton::Left && self.trigger.contains(x, y) {
            self.open();
            EventResult::Consumed
        } else {
            self.focused = false;
            EventResult::Ignored
        }
    }

    fn handle_key(
        &mut self,
        props: &SelectProps<'_>,
        key: Key,
        modifiers: Modifiers,
        on_change: &mut dyn FnMut(SelectValue),
    ) -> EventResult {
        if !self.is_open() {
            if !self.focused || modifiers.ctrl || modifiers.alt {
                return EventResult::Ignored;
            }
            return match key {
                Key::Enter | Key::Char(' ') | Key::Down => {
                    self.open();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }

        match key {
            Key::Escape => self.close(),
            Key::Tab | Key::BackTab => {
                self.set_focused(false);
                return EventResult::Ignored;
            }
            Key::Up => self.move_active(-1),
            Key::Down => self.move_active(1),
            Key::PageUp => self.move_active(-(self.list.page_rows() as isize)),
            Key::PageDown => self.move_active(self.list.page_rows() as isize),
            Key::Enter => {
                if let Some(row) = self.active {
                    self.activate(props, row, on_change);
                }
            }
            _ => match self.search.handle_key(key, modifiers) {
                SearchEdit::Changed => self.sync(props),
                SearchEdit::Handled => {}
                SearchEdit::Ignored => return EventResult::Ignored,
            },
        }
        EventResult::Consumed
    }

    fn handle_scroll(&mut self, x: u16, y: u16, delta: i16) -> EventResult {
        let Some(layout) = self.popover.filter(|_| self.is_open()) else {
            return EventResult::Ignored;
        };
        if layout.list.contains(x, y) {
            let rows = delta as isize * self.list.row_height() as isize;
            self.list.scroll_by(rows);
            // Rows slide under a still pointer
            self.active = self.list.row_at((y - layout.list.y) as usize);
        }
        if layout.frame.contains(x, y) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn handle_hover(&mut self, x: u16, y: u16) -> EventResult {
        let Some(layout) = self.popover.filter(|l| l.frame.contains(x, y)) else {
            if self.is_open() {
                self.active = None;
            }
            return EventResult::Ignored;
        };
        self.active = if layout.list.contains(x, y) {
            self.list.row_at((y - layout.list.y) as usize)
        } else {
            None
        };
        EventResult::Consumed
    }

    fn clear_search(&mut self, props: &SelectProps<'_>) {
        if self.search.clear() {
            log::debug!("VirtualizedSelect search cleared");
            self.sync(props);
        }
    }

    fn move_active(&mut self, delta: isize) {
        let count = self.filtered.len();
        if count == 0 {
            self.active = None;
            return;
        }
        let next = match self.active {
            None => self.list.rows_in_view().start,
            Some(current) if delta < 0 => current.saturating_sub(delta.unsigned_abs()),
            Some(current) => current.saturating_add(delta as usize),
        };
        let next = next.min(count - 1);
        self.active = Some(next);
        self.list.scroll_to_item(next);
    }

    /// Apply the toggle rule to filtered row `row`, report it, and close.
    fn activate(
        &mut self,
        props: &SelectProps<'_>,
        row: usize,
        on_change: &mut dyn FnMut(SelectValue),
    ) {
        let Some(item) = self.filtered.get(row).cloned() else {
            return;
        };
        let next = selection::toggle(props.value, &item, props.multiple);
        log::debug!(
            "VirtualizedSelect::activate value={} multiple={} -> {}",
            item.value(),
            props.multiple,
            next.summary()
        );
        on_change(next);
        self.close();
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Paint the field at the top-left of `area` and, while open, the popover
    /// anchored below it anywhere on `buf`.
    pub fn render(&mut self, props: &SelectProps<'_>, buf: &mut Buffer, area: Rect) {
        self.sync(props);

        self.trigger = Rect::new(
            area.x,
            area.y,
            self.config.trigger_width.min(area.width),
            TRIGGER_HEIGHT.min(area.height),
        );
        let summary = selection::summary(props.value);
        render_trigger(
            buf,
            self.trigger,
            &TriggerView {
                label: &self.config.label,
                summary: &summary,
                has_value: props.value.is_some(),
                open: self.is_open(),
                focused: self.focused,
            },
            &self.theme,
        );

        if !self.is_open() {
            self.popover = None;
            return;
        }

        // Follow the trigger if the host moved it
        self.anchor.open(self.trigger);
        let size = popover_size(&self.config, self.trigger);
        let frame = overlay::place(buf.area(), self.trigger, size, OverlayPosition::Below);
        let layout = popover_layout(frame, !self.search.is_empty());
        self.list.set_viewport_height(layout.list.height as usize);

        let rows = self.row_views();
        render_popover(
            buf,
            &PopoverView {
                layout: &layout,
                search: &self.search,
                placeholder: &self.config.placeholder,
                rows: &rows,
                list: &self.list,
            },
            &self.theme,
        );
        self.popover = Some(layout);
    }
}

impl Drop for VirtualizedSelect {
    fn drop(&mut self) {
        log::trace!("VirtualizedSelect dropped");
    }
}

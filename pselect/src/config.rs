//! Select configuration

/// Sizes and texts for a [`VirtualizedSelect`](crate::VirtualizedSelect).
///
/// # Example
///
/// ```
/// use pselect::SelectConfig;
///
/// let config = SelectConfig::default()
///     .with_label("Assignee")
///     .with_list_height(10);
/// assert_eq!(config.list_height, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Field label; drawn inside the empty field, shrunk onto its border
    /// when open or holding a value.
    ///
    /// Default: "Select"
    pub label: String,

    /// Placeholder of the search box.
    ///
    /// Default: "Search"
    pub placeholder: String,

    /// Width of the trigger field in columns, borders included.
    ///
    /// Default: 24
    pub trigger_width: u16,

    /// Minimum popover width in columns. The popover is never narrower
    /// than the trigger.
    ///
    /// Default: 40
    pub popover_min_width: u16,

    /// Height of one list row.
    ///
    /// Default: 1
    pub row_height: u16,

    /// Height of the list viewport.
    ///
    /// Default: 6
    pub list_height: u16,

    /// Rows rendered beyond each edge of the viewport.
    ///
    /// Default: 2
    pub overscan: u16,

    /// Clear the search text whenever the popover closes.
    ///
    /// Default: false (the search survives close and reopen)
    pub reset_search_on_close: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            label: "Select".to_string(),
            placeholder: "Search".to_string(),
            trigger_width: 24,
            popover_min_width: 40,
            row_height: 1,
            list_height: 6,
            overscan: 2,
            reset_search_on_close: false,
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_trigger_width(mut self, width: u16) -> Self {
        self.trigger_width = width;
        self
    }

    pub fn with_popover_min_width(mut self, width: u16) -> Self {
        self.popover_min_width = width;
        self
    }

    /// Sets the row height. Zero is treated as one.
    pub fn with_row_height(mut self, height: u16) -> Self {
        self.row_height = height.max(1);
        self
    }

    pub fn with_list_height(mut self, height: u16) -> Self {
        self.list_height = height;
        self
    }

    pub fn with_overscan(mut self, rows: u16) -> Self {
        self.overscan = rows;
        self
    }

    pub fn with_reset_search_on_close(mut self, reset: bool) -> Self {
        self.reset_search_on_close = reset;
        self
    }
}

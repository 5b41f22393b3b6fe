//! What each list row shows, independent of how it is painted.

use crate::filter::FilteredList;
use crate::option::OptionValue;
use crate::selection::SelectedValues;

/// Everything a row needs, shared by all rows of one frame.
#[derive(Debug, Clone, Copy)]
pub struct RowData<'a> {
    pub filtered: &'a FilteredList,
    pub selected: &'a SelectedValues,
    pub multiple: bool,
    /// Row under the keyboard cursor or the mouse.
    pub active: Option<usize>,
}

/// Display state of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub index: usize,
    pub key: &'a OptionValue,
    pub label: &'a str,
    /// Checkbox state; only multi-select rows have one.
    pub checked: Option<bool>,
    pub selected: bool,
    pub active: bool,
}

impl RowView<'_> {
    /// Selected and active rows are painted with the highlight fill.
    pub fn highlighted(&self) -> bool {
        self.selected || self.active
    }
}

/// Stable key for row `index`: the option's value, never its position.
pub fn item_key<'a>(index: usize, data: &RowData<'a>) -> Option<&'a OptionValue> {
    data.filtered.get(index).map(|option| option.value())
}

pub fn render_row<'a>(index: usize, data: &RowData<'a>) -> Option<RowView<'a>> {
    let key = item_key(index, data)?;
    let option = data.filtered.get(index)?;
    let selected = data.selected.contains(key);
    Some(RowView {
        index,
        key,
        label: option.label(),
        checked: data.multiple.then_some(selected),
        selected,
        active: data.active == Some(index),
    })
}

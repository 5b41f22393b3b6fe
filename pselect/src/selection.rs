//! Host-owned selection values and the toggle rule applied on activation.

use std::collections::HashSet;

use crate::option::{OptionValue, SelectOption};

/// The selection the host hands to the control.
///
/// `Single` is used by single-select controls, `Multiple` by multi-select
/// ones, in the order the options were picked. An absent selection is
/// `Option::<SelectValue>::None` on the host side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    Single(SelectOption),
    Multiple(Vec<SelectOption>),
}

impl SelectValue {
    /// The selected options as a slice, whatever the shape.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            SelectValue::Single(option) => std::slice::from_ref(option),
            SelectValue::Multiple(options) => options,
        }
    }

    pub fn contains(&self, value: &OptionValue) -> bool {
        self.options().iter().any(|o| o.value() == value)
    }

    /// Text for the closed field: `"<n> selected"` for a sequence, the
    /// label for a single option.
    pub fn summary(&self) -> String {
        match self {
            SelectValue::Single(option) => option.label().to_string(),
            SelectValue::Multiple(options) => format!("{} selected", options.len()),
        }
    }
}

/// Summary text for a possibly absent selection. Absent shows nothing.
pub fn summary(value: Option<&SelectValue>) -> String {
    value.map(SelectValue::summary).unwrap_or_default()
}

/// Compute the next selection after the user activates `item`.
///
/// Multi-select removes the first option with the same value, or appends
/// `item` when none matches. A current value that is not a sequence counts
/// as empty. Single-select always yields `item`.
pub fn toggle(current: Option<&SelectValue>, item: &SelectOption, multiple: bool) -> SelectValue {
    if !multiple {
        return SelectValue::Single(item.clone());
    }

    let mut next = match current {
        Some(SelectValue::Multiple(options)) => options.clone(),
        _ => Vec::new(),
    };
    match next.iter().position(|o| o.value() == item.value()) {
        Some(index) => {
            next.remove(index);
        }
        None => next.push(item.clone()),
    }
    SelectValue::Multiple(next)
}

/// Set of currently selected values, for row membership tests.
///
/// Selected options that are filtered out of view stay in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedValues(HashSet<OptionValue>);

impl SelectedValues {
    pub fn from_value(value: Option<&SelectValue>) -> Self {
        Self(
            value
                .map(|v| v.options().iter().map(|o| o.value().clone()).collect())
                .unwrap_or_default(),
        )
    }

    pub fn contains(&self, value: &OptionValue) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

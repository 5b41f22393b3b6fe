//! Selectable options.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The primitive value carried by an option.
///
/// Serialized untagged, so JSON `42` and `"abc"` both round into the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

/// One selectable item: a value and the label shown for it.
///
/// Two options are equal when their values are equal; labels are ignored.
///
/// # Example
///
/// ```
/// use pselect::SelectOption;
///
/// let a = SelectOption::new(1, "Alice");
/// let renamed = SelectOption::new(1, "Alicia");
/// assert_eq!(a, renamed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    value: OptionValue,
    label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SelectOption {}

impl Hash for SelectOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

//! Case-insensitive substring filtering over option labels.

use std::sync::Arc;
use std::time::Instant;

use crate::option::SelectOption;

/// True when `label` contains `needle_lower` ignoring case.
///
/// `needle_lower` must already be lower-cased.
fn label_matches(label: &str, needle_lower: &str) -> bool {
    label.to_lowercase().contains(needle_lower)
}

/// Indices of the options whose label contains `query`, ignoring case.
///
/// An empty query keeps every option, in order.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| label_matches(option.label(), &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Memoized filtered view over a shared option list.
///
/// Recomputes only when the query text or the option list changes. List
/// changes are detected by pointer identity, so hosts should keep handing
/// in the same `Arc` until the options really change.
#[derive(Debug, Clone, Default)]
pub struct FilteredList {
    source: Option<Arc<[SelectOption]>>,
    query: String,
    indices: Vec<usize>,
}

impl FilteredList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the view up to date. Returns true if it was recomputed.
    pub fn update(&mut self, options: &Arc<[SelectOption]>, query: &str) -> bool {
        let same_source = self
            .source
            .as_ref()
            .is_some_and(|source| Arc::ptr_eq(source, options));
        if same_source && self.query == query {
            return false;
        }

        let started = Instant::now();
        self.indices = filter_options(options, query);
        self.source = Some(Arc::clone(options));
        self.query = query.to_string();

        log::debug!(
            "FilteredList::update query={:?} matched={}/{} in {:?}",
            query,
            self.indices.len(),
            options.len(),
            started.elapsed()
        );
        true
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The option shown at filtered row `row`.
    pub fn get(&self, row: usize) -> Option<&SelectOption> {
        let source = self.source.as_ref()?;
        self.indices.get(row).and_then(|&i| source.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> + '_ {
        (0..self.len()).filter_map(move |row| self.get(row))
    }
}

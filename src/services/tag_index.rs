//! Tag Index
//!
//! Sorted, duplicate-free set of every tag in the full record set, plus the
//! suggestion lookup used by tag-input UIs.

use std::collections::BTreeSet;

use prompt_feed_core::Prompt;

pub use crate::models::settings::DEFAULT_SUGGESTION_LIMIT;

/// Derived tag set. Rebuilt whenever the full record set is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    /// Build the index from the full record set.
    pub fn derive(records: &[Prompt]) -> Self {
        Self {
            tags: derive_tags(records),
        }
    }

    /// All distinct tags in ascending order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags containing `fragment` (case-insensitive) that are not already
    /// selected, in index order, at most `limit` of them. A blank fragment
    /// yields nothing.
    pub fn suggest(
        &self,
        fragment: &str,
        selected: &BTreeSet<String>,
        limit: usize,
    ) -> Vec<String> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.tags
            .iter()
            .filter(|tag| !selected.contains(*tag))
            .filter(|tag| tag.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Collect, dedupe and sort every tag across `records`.
pub fn derive_tags(records: &[Prompt]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

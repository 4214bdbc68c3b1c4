//! Facet Filter Pipeline
//!
//! Pure function from (full record set, facet selection) to the visible
//! subset. Each stage is a boolean predicate; a record stays visible only if
//! it passes all of them. The output keeps the input order.

use prompt_feed_core::{FacetSelection, Prompt};

/// One stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    Category,
    Platform,
    TrendRefinement,
    Tags,
    Text,
}

impl FilterStage {
    /// Stages in evaluation order.
    pub const ORDER: [FilterStage; 5] = [
        FilterStage::Category,
        FilterStage::Platform,
        FilterStage::TrendRefinement,
        FilterStage::Tags,
        FilterStage::Text,
    ];

    /// Whether `record` passes this stage under `selection`.
    pub fn admits(&self, record: &Prompt, selection: &FacetSelection) -> bool {
        match self {
            FilterStage::Category => selection.category.admits(Some(record.category.as_str())),
            FilterStage::Platform => {
                // Non-trend records are never constrained by platform
                !selection.is_trend_category()
                    || !record.is_trend()
                    || selection.platform.admits(record.platform.as_deref())
            }
            FilterStage::TrendRefinement => {
                if !record.is_trend() {
                    return true;
                }
                let country_ok = selection.country.admits(record.country.as_deref());
                let date_ok = match selection.date_range {
                    None => true,
                    Some(range) => record
                        .trending_date()
                        .is_some_and(|date| range.contains(date)),
                };
                country_ok && date_ok
            }
            FilterStage::Tags => selection
                .selected_tags
                .iter()
                .all(|tag| record.has_tag(tag)),
            FilterStage::Text => match selection.search_needle() {
                None => true,
                Some(needle) => text_matches(record, &needle.to_lowercase()),
            },
        }
    }
}

fn text_matches(record: &Prompt, needle: &str) -> bool {
    record.prompt_text.to_lowercase().contains(needle)
        || record.target_model.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Whether `record` passes every stage.
pub fn matches(record: &Prompt, selection: &FacetSelection) -> bool {
    FilterStage::ORDER
        .iter()
        .all(|stage| stage.admits(record, selection))
}

/// Visible subset of `records` under `selection`, in original order.
pub fn filter_records(records: &[Prompt], selection: &FacetSelection) -> Vec<Prompt> {
    records
        .iter()
        .filter(|record| matches(record, selection))
        .cloned()
        .collect()
}

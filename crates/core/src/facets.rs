//! Facet Selection
//!
//! The user's current query over the feed and the partial update type used to
//! change it. Applying an update reports whether the full record set has to be
//! re-acquired.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::prompt::{parse_calendar_date, Category, Country, Facet, Platform};

/// Inclusive calendar date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::validation(format!(
                "date range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two ISO date strings.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        let start = parse_calendar_date(start)
            .ok_or_else(|| CoreError::parse(format!("invalid start date: {}", start)))?;
        let end = parse_calendar_date(end)
            .ok_or_else(|| CoreError::parse(format!("invalid end date: {}", end)))?;
        Self::new(start, end)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Country/date refinement forwarded to the remote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refinement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl Refinement {
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.date_range.is_none()
    }
}

/// Current facet selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    pub category: Facet<Category>,
    /// Only consulted when the category is the trend category
    pub platform: Facet<Platform>,
    pub country: Country,
    pub date_range: Option<DateRange>,
    pub selected_tags: BTreeSet<String>,
    pub search_term: String,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            category: Facet::All,
            platform: Facet::All,
            country: Country::Global,
            date_range: None,
            selected_tags: BTreeSet::new(),
            search_term: String::new(),
        }
    }
}

impl FacetSelection {
    /// Selection with every facet at its default except the category.
    pub fn for_category(category: Facet<Category>) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// True when no facet constrains the feed.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the trend category is selected.
    pub fn is_trend_category(&self) -> bool {
        self.category == Facet::Only(Category::ViralTrends)
    }

    /// Trimmed search term, `None` when blank.
    pub fn search_needle(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Refinement for the remote query, `None` when country is `Global` and
    /// no date range is active.
    pub fn refinement(&self) -> Option<Refinement> {
        let refinement = Refinement {
            country: (!self.country.is_global()).then_some(self.country),
            date_range: self.date_range,
        };
        (!refinement.is_empty()).then_some(refinement)
    }
}

/// Partial facet change. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionUpdate {
    pub category: Option<Facet<Category>>,
    pub platform: Option<Facet<Platform>>,
    pub country: Option<Country>,
    /// `Some(None)` clears the active range
    pub date_range: Option<Option<DateRange>>,
    pub selected_tags: Option<Vec<String>>,
    pub search_term: Option<String>,
}

/// What an applied update changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub category_changed: bool,
    /// Category, country or date range changed
    pub requires_acquisition: bool,
}

impl SelectionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<Facet<Category>>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<Facet<Platform>>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    pub fn date_range(mut self, range: Option<DateRange>) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Apply this update to `selection`.
    ///
    /// A category change first resets platform, tags and date range; the
    /// remaining fields of the update are applied afterwards, so one update
    /// can switch category and pick a platform at once.
    pub fn apply(self, selection: &mut FacetSelection) -> SelectionChange {
        let mut change = SelectionChange::default();

        if let Some(category) = self.category {
            if selection.category != category {
                selection.category = category;
                selection.platform = Facet::All;
                selection.selected_tags.clear();
                selection.date_range = None;
                change.category_changed = true;
                change.requires_acquisition = true;
            }
        }

        if let Some(platform) = self.platform {
            selection.platform = platform;
        }

        if let Some(country) = self.country {
            if selection.country != country {
                selection.country = country;
                change.requires_acquisition = true;
            }
        }

        if let Some(range) = self.date_range {
            if selection.date_range != range {
                selection.date_range = range;
                change.requires_acquisition = true;
            }
        }

        if let Some(tags) = self.selected_tags {
            selection.selected_tags = tags.into_iter().collect();
        }

        if let Some(term) = self.search_term {
            selection.search_term = term;
        }

        change
    }
}

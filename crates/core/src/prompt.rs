//! Prompt Records
//!
//! The unit of content shown in the feed, plus the fixed enumerations used to
//! classify it (category, platform, country) and the `Facet` wrapper that adds
//! the "All" sentinel on top of an enumeration.
//!
//! Records keep their category/platform/country as plain strings. Provider
//! output is only loosely trusted, so an unknown label must survive
//! deserialization and simply fail to match a specific facet later on.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// Label of the "All" sentinel for category and platform facets.
pub const ALL_LABEL: &str = "All";

/// An enumerated facet value with a stable display label.
pub trait FacetValue: Copy + Eq {
    /// The label used on records and in the UI.
    fn as_str(&self) -> &'static str;
}

/// Prompt category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    Writing,
    Code,
    #[serde(rename = "Viral Trends")]
    ViralTrends,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::ImageGeneration,
        Category::Writing,
        Category::Code,
        Category::ViralTrends,
    ];

    /// Categories served by the remote provider (everything except trends,
    /// which come from the static dataset).
    pub fn remote_categories() -> Vec<Category> {
        Self::ALL
            .iter()
            .copied()
            .filter(|c| !c.is_trend())
            .collect()
    }

    /// Whether this is the dedicated trend category.
    pub fn is_trend(&self) -> bool {
        matches!(self, Category::ViralTrends)
    }

    /// Resolve a record label to a known category, ignoring case and
    /// surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }
}

impl FacetValue for Category {
    fn as_str(&self) -> &'static str {
        match self {
            Category::ImageGeneration => "Image Generation",
            Category::Writing => "Writing",
            Category::Code => "Code",
            Category::ViralTrends => "Viral Trends",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Category::from_label(s).ok_or_else(|| CoreError::parse(format!("unknown category: {}", s)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social platform a trend was observed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    TikTok,
    Instagram,
    X,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::TikTok,
        Platform::Instagram,
        Platform::X,
        Platform::YouTube,
    ];
}

impl FacetValue for Platform {
    fn as_str(&self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::X => "X",
            Platform::YouTube => "YouTube",
        }
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::parse(format!("unknown platform: {}", s)))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country a trend was observed in. `Global` is the no-constraint sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Global,
    #[serde(rename = "USA")]
    UnitedStates,
    India,
    #[serde(rename = "UK")]
    UnitedKingdom,
    Brazil,
    Japan,
    Indonesia,
    Nigeria,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Global,
        Country::UnitedStates,
        Country::India,
        Country::UnitedKingdom,
        Country::Brazil,
        Country::Japan,
        Country::Indonesia,
        Country::Nigeria,
    ];

    pub fn is_global(&self) -> bool {
        matches!(self, Country::Global)
    }

    /// Country facet check: `Global` admits every record, anything else
    /// requires the record to carry exactly this country.
    pub fn admits(&self, label: Option<&str>) -> bool {
        self.is_global() || label == Some(self.as_str())
    }
}

impl FacetValue for Country {
    fn as_str(&self) -> &'static str {
        match self {
            Country::Global => "Global",
            Country::UnitedStates => "USA",
            Country::India => "India",
            Country::UnitedKingdom => "UK",
            Country::Brazil => "Brazil",
            Country::Japan => "Japan",
            Country::Indonesia => "Indonesia",
            Country::Nigeria => "Nigeria",
        }
    }
}

impl FromStr for Country {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::parse(format!("unknown country: {}", s)))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-valued facet with an "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: FacetValue> Facet<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    pub fn value(&self) -> Option<T> {
        match self {
            Facet::All => None,
            Facet::Only(v) => Some(*v),
        }
    }

    /// `All` admits any label (including a missing one); `Only(v)` requires
    /// the exact label of `v`.
    pub fn admits(&self, label: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(v) => label == Some(v.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::All => ALL_LABEL,
            Facet::Only(v) => v.as_str(),
        }
    }
}

impl<T> From<T> for Facet<T> {
    fn from(value: T) -> Self {
        Facet::Only(value)
    }
}

impl<T: FacetValue> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<T> FromStr for Facet<T>
where
    T: FromStr<Err = CoreError>,
{
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_LABEL) {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}

impl<T: FacetValue> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de, T> Deserialize<'de> for Facet<T>
where
    T: FromStr<Err = CoreError>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A prompt record as held in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub prompt_text: String,
    pub category: String,
    pub target_model: String,
    /// Only present on trend records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Only present on trend records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO calendar date, only present on trend records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_date: Option<String>,
    /// Short labels; duplicates are kept as-is
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl Prompt {
    pub fn new(
        id: impl Into<String>,
        prompt_text: impl Into<String>,
        category: impl Into<String>,
        target_model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt_text: prompt_text.into(),
            category: category.into(),
            target_model: target_model.into(),
            platform: None,
            country: None,
            trending_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the trend-only fields.
    pub fn with_trend(
        mut self,
        platform: impl Into<String>,
        country: impl Into<String>,
        trending_date: impl Into<String>,
    ) -> Self {
        self.platform = Some(platform.into());
        self.country = Some(country.into());
        self.trending_date = Some(trending_date.into());
        self
    }

    /// Whether this record belongs to the trend category.
    pub fn is_trend(&self) -> bool {
        self.category == Category::ViralTrends.as_str()
    }

    /// The trending date as a calendar date, `None` if absent or unparseable.
    pub fn trending_date(&self) -> Option<NaiveDate> {
        self.trending_date.as_deref().and_then(parse_calendar_date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse an ISO calendar date. Accepts `YYYY-MM-DD` and full RFC 3339
/// timestamps (the date part is kept, the time is ignored).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

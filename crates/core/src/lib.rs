//! Prompt Feed Core
//!
//! Domain types shared by every crate in the Prompt Feed workspace. This crate
//! has no knowledge of providers, HTTP, or the async runtime.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `prompt` - Prompt records and the category/platform/country enumerations
//! - `facets` - Facet selection state and partial updates

pub mod error;
pub mod facets;
pub mod prompt;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Records ────────────────────────────────────────────────────────────
pub use prompt::{
    parse_calendar_date, Category, Country, Facet, FacetValue, Platform, Prompt, ALL_LABEL,
};

// ── Facets ─────────────────────────────────────────────────────────────
pub use facets::{DateRange, FacetSelection, Refinement, SelectionChange, SelectionUpdate};

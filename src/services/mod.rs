//! Services
//!
//! Acquisition, filtering and tag indexing over the prompt feed.

pub mod acquisition;
pub mod feed;
pub mod filter;
pub mod tag_index;
pub mod trends;

pub use acquisition::{AcquisitionOrchestrator, AcquisitionOutcome, AcquisitionStatus};
pub use feed::{FeedSnapshot, PromptFeed};
pub use filter::{filter_records, FilterStage};
pub use tag_index::{derive_tags, TagIndex};
pub use trends::trend_dataset;

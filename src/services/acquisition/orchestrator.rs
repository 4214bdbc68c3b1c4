//! Acquisition Orchestrator
//!
//! Decides per category which source to read (static trend dataset, remote
//! provider, or both) and drives the acquisition state machine. Provider
//! failures stop here and become an `Error` status with a user-facing
//! message.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use prompt_feed_core::{Category, Facet, FacetValue, Prompt, Refinement};
use prompt_feed_llm::{FailureKind, FetchCriteria, PromptProvider, ProviderError, ProviderResult};

use super::state::{AcquisitionState, AcquisitionStatus, Resolution, Ticket};
use crate::services::tag_index::TagIndex;
use crate::services::trends::trend_dataset;

/// Message shown for failures without a known cause.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "An unknown error occurred.";

/// What happened to one acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// The record set was replaced
    Loaded { count: usize },
    /// The record set was cleared and the status set to `Error`
    Failed { message: String },
    /// A newer acquisition started first; nothing was applied
    Superseded,
}

/// Owns the full record set and the status.
#[derive(Clone)]
pub struct AcquisitionOrchestrator {
    provider: Arc<dyn PromptProvider>,
    trends: Arc<[Prompt]>,
    state: Arc<RwLock<AcquisitionState>>,
}

impl AcquisitionOrchestrator {
    /// Orchestrator over `provider` and the built-in trend dataset.
    pub fn new(provider: Arc<dyn PromptProvider>) -> Self {
        Self::with_trends(provider, trend_dataset())
    }

    /// Orchestrator with a custom static dataset.
    pub fn with_trends(provider: Arc<dyn PromptProvider>, trends: Arc<[Prompt]>) -> Self {
        Self {
            provider,
            trends,
            state: Arc::new(RwLock::new(AcquisitionState::new())),
        }
    }

    /// Move to `Loading` and hand out the ticket for the new acquisition.
    pub async fn begin(&self) -> Ticket {
        let ticket = self.state.write().await.begin();
        tracing::debug!("[Acquisition] Started generation {}", ticket.generation());
        ticket
    }

    /// Acquire the full record set for `category`.
    pub async fn acquire(
        &self,
        category: Facet<Category>,
        refinement: Option<Refinement>,
    ) -> AcquisitionOutcome {
        let ticket = self.begin().await;
        self.execute(ticket, category, refinement).await
    }

    /// Run the fetch for an already started acquisition and apply the
    /// result if `ticket` is still the latest.
    pub async fn execute(
        &self,
        ticket: Ticket,
        category: Facet<Category>,
        refinement: Option<Refinement>,
    ) -> AcquisitionOutcome {
        tracing::info!(
            "[Acquisition] Acquiring '{}' (generation {})",
            category,
            ticket.generation()
        );

        let result = self.fetch(category, refinement).await;

        let mut state = self.state.write().await;
        match result {
            Ok(records) => {
                let count = records.len();
                match state.resolve_success(ticket, records) {
                    Resolution::Applied => {
                        tracing::info!("[Acquisition] Loaded {} records for '{}'", count, category);
                        AcquisitionOutcome::Loaded { count }
                    }
                    Resolution::Discarded => {
                        tracing::debug!(
                            "[Acquisition] Discarded stale result of generation {}",
                            ticket.generation()
                        );
                        AcquisitionOutcome::Superseded
                    }
                }
            }
            Err(err) => {
                let message = failure_message(&err);
                match state.resolve_error(ticket, message.clone()) {
                    Resolution::Applied => {
                        tracing::warn!("[Acquisition] '{}' failed: {}", category, err);
                        AcquisitionOutcome::Failed { message }
                    }
                    Resolution::Discarded => {
                        tracing::debug!(
                            "[Acquisition] Discarded stale failure of generation {}: {}",
                            ticket.generation(),
                            err
                        );
                        AcquisitionOutcome::Superseded
                    }
                }
            }
        }
    }

    async fn fetch(
        &self,
        category: Facet<Category>,
        refinement: Option<Refinement>,
    ) -> ProviderResult<Vec<Prompt>> {
        match category {
            Facet::Only(c) if c.is_trend() => Ok(self.trends.to_vec()),
            Facet::All => {
                let criteria = FetchCriteria::new(Facet::All, refinement);
                let remote = self.provider.fetch_prompts(&criteria).await?;

                let mut records = self.trends.to_vec();
                let mut taken: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();
                records.extend(normalize_remote(remote, Facet::All, &mut taken));
                Ok(records)
            }
            Facet::Only(c) => {
                let criteria = FetchCriteria::new(Facet::Only(c), refinement);
                let remote = self.provider.fetch_prompts(&criteria).await?;
                Ok(normalize_remote(remote, Facet::Only(c), &mut HashSet::new()))
            }
        }
    }

    pub async fn status(&self) -> AcquisitionStatus {
        self.state.read().await.status().clone()
    }

    pub async fn records(&self) -> Arc<Vec<Prompt>> {
        self.state.read().await.records()
    }

    pub async fn tag_index(&self) -> Arc<TagIndex> {
        self.state.read().await.tag_index()
    }

    pub fn provider(&self) -> &Arc<dyn PromptProvider> {
        &self.provider
    }
}

/// Clean up provider output before it enters the full record set.
///
/// A single-category request coerces every record's category to that
/// category; an "All" request only canonicalises labels it recognises.
/// Records with blank text are dropped. Blank or already taken ids get a
/// fresh `prompt-<uuid>` id.
pub fn normalize_remote(
    records: Vec<Prompt>,
    requested: Facet<Category>,
    taken: &mut HashSet<String>,
) -> Vec<Prompt> {
    records
        .into_iter()
        .filter_map(|mut record| {
            if record.prompt_text.trim().is_empty() {
                tracing::warn!("[Acquisition] Dropping record '{}' with empty text", record.id);
                return None;
            }

            match requested {
                Facet::Only(c) => record.category = c.as_str().to_string(),
                Facet::All => {
                    if let Some(c) = Category::from_label(&record.category) {
                        record.category = c.as_str().to_string();
                    }
                }
            }

            if record.id.trim().is_empty() || taken.contains(&record.id) {
                let fresh = format!("prompt-{}", Uuid::new_v4());
                tracing::debug!("[Acquisition] Re-keyed record '{}' to '{}'", record.id, fresh);
                record.id = fresh;
            }
            taken.insert(record.id.clone());

            Some(record)
        })
        .collect()
}

/// User-facing message for a provider failure. Names the cause category
/// only, never the provider payload.
pub fn failure_message(err: &ProviderError) -> String {
    let cause = match err.kind() {
        FailureKind::Credential => "the API key is missing or was rejected",
        FailureKind::Network => "the prompt service could not be reached",
        FailureKind::Parse => "the prompt service returned data in an unexpected format",
        FailureKind::Provider => "the prompt service reported an error",
        FailureKind::Unknown => return UNKNOWN_FAILURE_MESSAGE.to_string(),
    };
    format!(
        "Failed to generate prompts: {}. Please check your API key and try again.",
        cause
    )
}

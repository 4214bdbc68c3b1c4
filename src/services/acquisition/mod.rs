//! Data Acquisition
//!
//! Produces the full record set from the static trend dataset and the remote
//! prompt provider.

pub mod orchestrator;
pub mod state;


pub use orchestrator::{
    failure_message, normalize_remote, AcquisitionOrchestrator, AcquisitionOutcome,
    UNKNOWN_FAILURE_MESSAGE,
};
pub use state::{AcquisitionState, AcquisitionStatus, Resolution, Ticket};

use log::info;
use serde_json::Value;

use super::validate::{FieldViolation, validate_inquiry};
use crate::{
    data_connector::{InquiryStorageError, SharedInquiryStorage},
    notify::{SharedNotifier, notify_all},
};

/// Why one pipeline invocation ended in the failure state.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Storage error: {0}")]
    Storage(#[from] InquiryStorageError),
}

/// Result of one pipeline invocation that reached the success state.
/// `notified` carries the names of the sinks that delivered; it feeds the
/// logs only and is never returned to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub success: bool,
    pub persisted: bool,
    pub notified: Vec<&'static str>,
}

/// Lead ingestion orchestrator: validate, persist, then fan out to the
/// configured notification sinks. Persistence must succeed before any sink
/// is attempted; sink failures never alter the outcome.
pub struct InquiryPipeline {
    storage: SharedInquiryStorage,
    notifiers: Vec<SharedNotifier>,
}

impl InquiryPipeline {
    pub fn new(storage: SharedInquiryStorage, notifiers: Vec<SharedNotifier>) -> Self {
        Self { storage, notifiers }
    }

    /// Run one submission through the pipeline. Exactly one insert happens
    /// per invocation; a validation or storage failure produces zero side
    /// effects beyond what already completed.
    pub async fn process(&self, payload: &Value) -> Result<PipelineOutcome, PipelineError> {
        let input = validate_inquiry(payload).map_err(PipelineError::Validation)?;
        let inquiry = self.storage.insert(input).await?;
        info!(
            "Inquiry {} persisted ({} / {})",
            inquiry.id, inquiry.name, inquiry.service
        );

        let notified = notify_all(&self.notifiers, &inquiry).await;
        Ok(PipelineOutcome {
            success: true,
            persisted: true,
            notified,
        })
    }
}

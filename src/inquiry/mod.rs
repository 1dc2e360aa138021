// Lead inquiry ingestion: payload validation and the persist-then-notify
// pipeline behind POST /api/inquiries.
pub mod pipeline;
pub mod validate;

pub use pipeline::{InquiryPipeline, PipelineError, PipelineOutcome};
pub use validate::{FieldViolation, validate_inquiry};

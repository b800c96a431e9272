use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload for the save-test endpoint. Field names match the backend wire
/// format. `quiz` mirrors `original` until a dedicated quiz generator
/// exists server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveTestRequest {
    pub subject_name: String,
    pub original: String,
    pub quiz: String,
    pub answers: Vec<String>,
}

/// Failure surfaced by a persistence collaborator. Every variant is
/// retryable; the session keeps its answers and grades either way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("backend rejected the attempt: {0}")]
    Rejected(String),
    #[error("backend unreachable: {0}")]
    Unavailable(String),
}

/// Persistence seam for completed attempts. The production implementation
/// posts to the backend; tests plug in recording doubles.
pub trait AttemptSink {
    fn submit_attempt(&mut self, request: &SaveTestRequest) -> Result<(), SubmitError>;
}

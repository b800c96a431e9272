pub mod profile;
pub mod question;
pub mod quiz;
pub mod scoring;

pub use quiz::Quiz;
pub use scoring::{Answer, DiagnosisResult};

pub mod grade;
pub mod material;
pub mod result;
pub mod round;
pub mod study;

pub use study::StudySession;

//! Core learning mechanics for a fill-in-the-blank study app: keyword
//! tokenization of extracted text, the three-round scaffolding session, and
//! the learner-type diagnosis. Rendering, navigation, and transport live in
//! the app shells that consume this crate.

pub mod config;
pub mod diagnosis;
pub mod hint;
pub mod session;
pub mod submit;
pub mod tokenizer;

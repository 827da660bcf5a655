//! Core data types for the Dossier LLM dispatch library.
//!
//! This crate provides the request model shared by the call dispatcher
//! and the generation backends that serve it.

mod input;
mod media;
mod request;
mod sampling;

pub use input::Input;
pub use media::MediaSource;
pub use request::GenerateRequest;
pub use sampling::SamplingOptions;

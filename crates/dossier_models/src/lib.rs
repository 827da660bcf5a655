//! LLM provider integrations for Dossier.
//!
//! Currently ships the Gemini REST backend consumed by the call dispatcher.

mod gemini;

pub use gemini::GeminiClient;

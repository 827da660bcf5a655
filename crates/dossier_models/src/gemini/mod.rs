//! Gemini REST API integration.

mod client;
mod conversions;
mod dto;

pub use client::GeminiClient;

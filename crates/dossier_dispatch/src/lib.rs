//! Serialized, throttled dispatch of generation calls.
//!
//! This crate guarantees that calls to a rate-sensitive generation backend
//! never execute more frequently than one per configured interval, while
//! preserving submission order and isolating each request's failure from
//! the others.

mod backend;
mod dispatcher;

pub use backend::GenerationBackend;
pub use dispatcher::{CallDispatcher, DispatcherConfig};

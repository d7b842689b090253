//! Crate-level error type.
//!
//! Every page subsystem fails in isolation: callers log these and skip the
//! subsystem rather than propagating them out of the wasm start function.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    /// A capability the subsystem needs (the WebGPU renderer) is not present.
    #[error("missing dependency: {0}")]
    MissingDependency(String),
    /// An expected DOM anchor is absent.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// Configuration that would make a subsystem misbehave (e.g. a zero-length cycle).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

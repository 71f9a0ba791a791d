//! Adapter error types.
//!
//! All adapter implementations surface errors through [`AdapterError`].
//! Each variant carries enough context for the dispatch layer to build a
//! user-facing message without inspecting opaque strings. Permission and
//! access denials are not errors here; the capability traits report them
//! as plain booleans.

/// Unified error type for Valet adapters.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// Scheduling a one-shot alert failed.
    #[error("failed to schedule notification: {reason}")]
    ScheduleFailed { reason: String },

    /// Saving an item to a reminder or calendar store failed.
    #[error("failed to save {entity}: {reason}")]
    SaveFailed { entity: String, reason: String },

    /// Catch-all for unexpected internal errors. Prefer a typed variant
    /// whenever possible.
    #[error("internal adapter error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the adapters crate.
pub type Result<T> = std::result::Result<T, AdapterError>;

//! Kernel error types.
//!
//! All kernel subsystems surface errors through [`KernelError`], the single
//! error type returned by every fallible public API in this crate. The
//! classifier and the time parser are total once constructed; only
//! construction itself can fail.

/// Unified error type for the Valet kernel.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Building the keyword automaton for the classifier failed.
    #[error("classifier build error: {reason}")]
    ClassifierBuild { reason: String },
}

/// Convenience alias used throughout the kernel crate.
pub type Result<T> = std::result::Result<T, KernelError>;

//! Valet kernel.
//!
//! This crate provides the deterministic core of the Valet command
//! assistant:
//!
//! - **[`classify`]** -- Keyword-set intent classifier built on an
//!   [`aho_corasick`] automaton with a fixed priority ladder.
//! - **[`timeparse`]** -- Flexible wall-clock time parsing that tries a
//!   fixed, ordered list of [`chrono`] formats.
//! - **[`error`]** -- Unified kernel error types via [`thiserror`].
//!
//! Everything here is pure: no I/O, no side effects, no platform
//! collaborators. The dispatch layer (`valet-intent`) composes these
//! pieces with the adapter capabilities.

pub mod classify;
pub mod error;
pub mod timeparse;

// Re-export the most commonly used types at the crate root for convenience.
pub use classify::{Intent, IntentClassifier};
pub use error::{KernelError, Result};
pub use timeparse::{ParsedTime, parse_time};

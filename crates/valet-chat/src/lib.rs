//! Valet conversation layer.
//!
//! - **[`transcript`]** -- the append-only conversation log: ordered
//!   `(sender, text)` entries, never mutated or deleted.
//! - **[`controller`]** -- the [`ChatController`] driving the
//!   user-entry-then-reply-entry discipline over the command executor.

pub mod controller;
pub mod transcript;

// Re-export the most commonly used types at the crate root for convenience.
pub use controller::{ChatController, DEFAULT_WELCOME};
pub use transcript::{ConversationEntry, ConversationLog, Sender};

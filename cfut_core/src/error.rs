//! Error types for the stack tag updater core
//!
//! Errors fall into three categories: provider failures while listing
//! stacks (fatal for the run), update failures scoped to a single stack,
//! and the benign "nothing to update" validation result that the
//! pipeline suppresses.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stack tag updater core
#[derive(Error, Debug)]
pub enum Error {
    /// Listing/describe call against the provider failed
    #[error("failed to list stacks: {message}")]
    Provider { message: String },

    /// The provider reported that the update would change nothing
    #[error("no updates are to be performed on stack {stack}")]
    NoUpdates { stack: String },

    /// Update call for a single stack failed
    #[error("failed to update stack {stack}: {message}")]
    Update { stack: String, message: String },

    /// A classifier pattern failed to compile
    #[error("invalid pattern: {message}")]
    InvalidPattern { message: String },
}

impl Error {
    /// Create a provider listing error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// Create the benign no-updates error for a stack
    pub fn no_updates(stack: impl Into<String>) -> Self {
        Self::NoUpdates {
            stack: stack.into(),
        }
    }

    /// Create an update error for a stack
    pub fn update(stack: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Update {
            stack: stack.into(),
            message: message.into(),
        }
    }

    /// Create a pattern compilation error
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            message: message.into(),
        }
    }

    /// Check if this error is the benign "nothing changed" case
    pub fn is_no_updates(&self) -> bool {
        matches!(self, Self::NoUpdates { .. })
    }

    /// Check if this error is scoped to a single stack update
    pub fn is_stack_scoped(&self) -> bool {
        matches!(self, Self::NoUpdates { .. } | Self::Update { .. })
    }
}

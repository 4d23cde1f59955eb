// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the chronomux merge engine.
//!
//! A single root [`ChronomuxError`] covers every failure mode the engine can
//! surface. The engine itself never retries and never suppresses: a failure
//! raised while advancing an underlying feed propagates unmodified out of the
//! pull operation.

/// Root error type for all chronomux operations.
#[derive(Debug, thiserror::Error)]
pub enum ChronomuxError {
    /// An underlying feed failed while advancing.
    ///
    /// The synchronizer that observed this error is left in an undefined
    /// state and must be disposed, not reused.
    #[error("feed failure: {context}")]
    FeedFailure {
        /// Description of what went wrong inside the feed
        context: String,
    },

    /// A feed-produced error from user code, propagated unmodified.
    #[error("feed error: {0}")]
    SourceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A feed that does not support rewinding was asked to reset.
    #[error("reset unsupported: {context}")]
    ResetUnsupported {
        /// Which feed (or kind of feed) refused the reset
        context: String,
    },

    /// The synchronizer was pulled or reset after being disposed.
    #[error("synchronizer already disposed")]
    Disposed,
}

impl ChronomuxError {
    /// Create a feed failure with the given context.
    pub fn feed_failure(context: impl Into<String>) -> Self {
        Self::FeedFailure {
            context: context.into(),
        }
    }

    /// Wrap an error raised by user feed code.
    pub fn source_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SourceError(Box::new(error))
    }

    /// Create a reset-unsupported error with the given context.
    pub fn reset_unsupported(context: impl Into<String>) -> Self {
        Self::ResetUnsupported {
            context: context.into(),
        }
    }

    /// Check if this error indicates misuse of a disposed synchronizer.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }
}

/// Specialized Result type for chronomux operations.
pub type Result<T> = std::result::Result<T, ChronomuxError>;

impl Clone for ChronomuxError {
    fn clone(&self) -> Self {
        match self {
            Self::FeedFailure { context } => Self::FeedFailure {
                context: context.clone(),
            },
            // The boxed source cannot be cloned; keep its rendering
            Self::SourceError(e) => Self::FeedFailure {
                context: format!("feed error: {e}"),
            },
            Self::ResetUnsupported { context } => Self::ResetUnsupported {
                context: context.clone(),
            },
            Self::Disposed => Self::Disposed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("boom: {msg}")]
    struct Boom {
        msg: String,
    }

    #[test]
    fn source_error_keeps_the_underlying_message() {
        let err = ChronomuxError::source_error(Boom { msg: "io".into() });
        assert_eq!(err.to_string(), "feed error: boom: io");
    }

    #[test]
    fn cloning_a_source_error_degrades_to_a_feed_failure() {
        let err = ChronomuxError::source_error(Boom { msg: "io".into() });
        let cloned = err.clone();
        assert!(matches!(cloned, ChronomuxError::FeedFailure { .. }));
        assert!(cloned.to_string().contains("boom: io"));
    }

    #[test]
    fn disposed_is_recognizable() {
        assert!(ChronomuxError::Disposed.is_disposed());
        assert!(!ChronomuxError::feed_failure("x").is_disposed());
    }
}

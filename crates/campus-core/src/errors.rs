//! Unified error system for Campus
//!
//! A single error enum shared across the workspace. Variants map onto the
//! client-visible taxonomy: `Unauthenticated` (missing/invalid/expired
//! credential, cause deliberately undisclosed), `Forbidden` (insufficient
//! capability or failed ownership check), `Conflict` (storage uniqueness
//! violation), `NotFound`, `Invalid` (bad request input), and the
//! server-side `Storage`/`Internal` pair that surfaces as a generic failure.

use serde::{Deserialize, Serialize};

/// Unified error type for all Campus operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CampusError {
    /// Missing, invalid, or expired credential
    ///
    /// Carries no message: the contract does not distinguish a bad
    /// signature from an expired token to an external caller.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Valid credential, insufficient capability or ownership
    #[error("Forbidden: {message}")]
    Forbidden {
        /// What was refused
        message: String,
    },

    /// Storage uniqueness constraint violated
    #[error("Conflict: {message}")]
    Conflict {
        /// What collided
        message: String,
    },

    /// Target row does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// What was missing
        message: String,
    },

    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// What was malformed
        message: String,
    },

    /// Storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// Underlying storage failure, never containing credential material
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// What went wrong
        message: String,
    },
}

impl CampusError {
    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for Campus operations
pub type Result<T> = std::result::Result<T, CampusError>;

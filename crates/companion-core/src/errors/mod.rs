// ABOUTME: Unified error types for body-state classification
// ABOUTME: ErrorCode families plus the ClassifierError returned by every fallible operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Provides structured error types for the classifier:
//! - `ErrorCode` - stable numeric codes grouped by family
//! - `ClassifierError` - errors produced while classifying a measurement
//! - `ConfigError` - errors produced while loading or validating configuration

mod config;

pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller supplied an unusable value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Caller supplied a value outside of its domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration could not be read or parsed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration was read but is inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Invariant violated inside the classifier
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal classifier error occurred",
        }
    }
}

/// Errors returned by body-state classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// An input could not be interpreted (unknown sex code, non-finite number)
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Every body state ended with zero activation.
    ///
    /// A complete rule base makes this unreachable; seeing it means the
    /// membership tables or the rules are broken.
    #[error("No rule fired for the measurement; the rule base is incomplete")]
    NoActivation,

    /// Classifier configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClassifierError {
    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Map this error onto its stable code
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::NoActivation => ErrorCode::InternalError,
            Self::Config(ConfigError::Parse(_) | ConfigError::Json(_)) => ErrorCode::ConfigError,
            Self::Config(ConfigError::ValueOutOfRange(_)) => ErrorCode::ValueOutOfRange,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }
}

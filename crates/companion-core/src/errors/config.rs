// ABOUTME: Configuration error types for classifier table validation
// ABOUTME: Defines error variants for malformed shapes, gaps, unknown terms and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Breakpoints out of order or otherwise inconsistent
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A membership table is empty or a term name is blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failed to decode a JSON configuration document
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Two adjacent membership functions leave part of the domain uncovered
    #[error("Membership table '{table}' has a gap between '{left}' and '{right}'")]
    CoverageGap {
        /// Table being validated (e.g. `male height`)
        table: String,
        /// Lower of the two adjacent terms
        left: String,
        /// Upper of the two adjacent terms
        right: String,
    },

    /// The same term name appears twice in one table
    #[error("Membership table '{table}' defines '{term}' more than once")]
    DuplicateTerm {
        /// Table being validated
        table: String,
        /// Repeated term name
        term: String,
    },

    /// A rule names a term no membership table defines
    #[error("Rule references unknown {variable} term '{term}'")]
    UnknownTerm {
        /// `height` or `weight`
        variable: &'static str,
        /// The unknown term
        term: String,
    },

    /// Two rules share the same antecedent pair
    #[error("Duplicate rule for ({height}, {weight})")]
    DuplicateRule {
        /// Height term of the antecedent
        height: String,
        /// Weight term of the antecedent
        weight: String,
    },

    /// A height × weight combination has no rule
    #[error("Rule base has no rule for ({height}, {weight})")]
    IncompleteRuleBase {
        /// Height term of the missing antecedent
        height: String,
        /// Weight term of the missing antecedent
        weight: String,
    },
}

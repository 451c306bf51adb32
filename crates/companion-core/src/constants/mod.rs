// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Input form ranges and defaults for the body parameter form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! The classifier itself accepts any finite value. These ranges are the ones
//! the input form enforces and are exposed for callers that validate first.

/// Height input (centimeters)
pub mod height {
    /// Lowest height the form accepts
    pub const MIN_CM: f64 = 130.0;
    /// Highest height the form accepts
    pub const MAX_CM: f64 = 220.0;
    /// Value pre-filled in the form
    pub const DEFAULT_CM: f64 = 175.0;
}

/// Weight input (kilograms)
pub mod weight {
    /// Lowest weight the form accepts
    pub const MIN_KG: f64 = 30.0;
    /// Highest weight the form accepts
    pub const MAX_KG: f64 = 150.0;
    /// Value pre-filled in the form
    pub const DEFAULT_KG: f64 = 80.0;
}

/// Numeric precision of form inputs
pub mod precision {
    /// Decimal places kept before classification
    pub const INPUT_DECIMALS: u32 = 2;
    /// Largest precision accepted from configuration
    pub const MAX_INPUT_DECIMALS: u32 = 6;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the operator binary
    pub const COMPANION: &str = "dietexercise-companion";
}

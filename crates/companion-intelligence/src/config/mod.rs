// ABOUTME: Classifier configuration: membership tables, rule base, tie-break policy, input precision
// ABOUTME: Loaded from clinical defaults with JSON and environment variable overrides, then validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Classifier Configuration
//!
//! Loading order:
//! 1. clinical defaults ([`defaults`])
//! 2. `BODY_STATE_CONFIG_JSON`, a complete or partial JSON document
//! 3. `BODY_STATE_TIE_BREAK` and `BODY_STATE_INPUT_DECIMALS`
//!
//! The result is validated before use. A configuration that fails
//! validation is never handed to the classifier.

/// Clinical default tables and rule base
pub mod defaults;

use crate::fuzzy::defuzzify::TieBreak;
use crate::fuzzy::membership::MembershipTables;
use crate::fuzzy::rules::RuleBase;
use companion_core::constants::precision;
pub use companion_core::ConfigError;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use tracing::debug;

/// Environment variable holding a JSON configuration document
pub const CONFIG_JSON_ENV: &str = "BODY_STATE_CONFIG_JSON";
/// Environment variable selecting the tie-break policy
pub const TIE_BREAK_ENV: &str = "BODY_STATE_TIE_BREAK";
/// Environment variable selecting the rounding precision of inputs
pub const INPUT_DECIMALS_ENV: &str = "BODY_STATE_INPUT_DECIMALS";

/// Everything the classifier needs besides the measurement itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Height and weight tables per sex
    pub tables: MembershipTables,
    /// Rule table in declaration order
    pub rules: RuleBase,
    /// Policy for states sharing the highest activation
    pub tie_break: TieBreak,
    /// Decimal places inputs are rounded to before fuzzification
    pub input_decimals: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            tables: defaults::membership_tables(),
            rules: defaults::rule_base(),
            tie_break: TieBreak::default(),
            input_decimals: precision::INPUT_DECIMALS,
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not valid UTF-8, cannot be parsed,
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_JSON_ENV) {
            Ok(json) => Self::from_json(&json)?,
            Err(VarError::NotPresent) => Self::default(),
            Err(e) => return Err(e.into()),
        };

        config = config.apply_env_overrides()?;
        config.validate()?;

        debug!(
            tie_break = %config.tie_break,
            input_decimals = config.input_decimals,
            rules = config.rules.rules().len(),
            "Loaded classifier configuration"
        );
        Ok(config)
    }

    /// Parse a JSON document; omitted fields keep their defaults
    ///
    /// The document is not validated here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is malformed
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON, the format accepted by [`Self::from_json`]
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if serialization fails
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate tables, rule base and precision
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tables.validate()?;
        self.rules.validate(&self.tables)?;

        if self.input_decimals > precision::MAX_INPUT_DECIMALS {
            return Err(ConfigError::ValueOutOfRange(
                "input_decimals must be between 0 and 6",
            ));
        }

        Ok(())
    }

    /// Override `target` with the parsed value of `env_var_name`, if set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(TIE_BREAK_ENV, &mut self.tie_break)?;
        Self::apply_env_var(INPUT_DECIMALS_ENV, &mut self.input_decimals)?;
        Ok(self)
    }
}

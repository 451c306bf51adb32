// ABOUTME: Max-membership defuzzification of aggregated activations into one body state
// ABOUTME: Deterministic tie-break policies and the zero-activation failure path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rules::Activations;
use companion_core::{BodyState, ClassifierError, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// Activations closer than this are treated as equal
pub const TIE_TOLERANCE: f64 = 1e-12;

/// Which state wins when several share the highest activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the lowest ordinal, i.e. the healthier category
    #[default]
    LowerOrdinal,
    /// Prefer the consequent of the first rule, in rule-base order, whose
    /// firing strength reaches the highest activation
    DeclarationOrder,
}

impl TieBreak {
    /// Name used in configuration and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowerOrdinal => "lower_ordinal",
            Self::DeclarationOrder => "declaration_order",
        }
    }

    /// Sort key among tied states; smaller wins
    fn rank(self, activations: &Activations, state: BodyState) -> usize {
        match self {
            Self::LowerOrdinal => usize::from(state.ordinal()),
            Self::DeclarationOrder => activations.reached_at(state).unwrap_or(usize::MAX),
        }
    }
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower_ordinal" => Ok(Self::LowerOrdinal),
            "declaration_order" => Ok(Self::DeclarationOrder),
            other => Err(ConfigError::Parse(format!(
                "Unknown tie-break policy: '{other}'. Valid options: lower_ordinal, declaration_order"
            ))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the state with the highest activation, breaking ties by `tie_break`
///
/// # Errors
///
/// Returns `ClassifierError::NoActivation` when every activation is zero,
/// which only happens with a broken rule base
pub fn defuzzify_with(
    activations: &Activations,
    tie_break: TieBreak,
) -> Result<BodyState, ClassifierError> {
    let peak = activations.peak();
    if peak <= 0.0 {
        error!(
            activations = ?activations,
            "Every body state has zero activation; rule base or membership tables are incomplete"
        );
        return Err(ClassifierError::NoActivation);
    }

    activations
        .iter()
        .filter(|(_, strength)| peak - strength <= TIE_TOLERANCE)
        .map(|(state, _)| state)
        .min_by_key(|state| (tie_break.rank(activations, *state), state.ordinal()))
        .ok_or(ClassifierError::NoActivation)
}

/// Defuzzify with the default policy (prefer the lower ordinal)
///
/// # Errors
///
/// Returns `ClassifierError::NoActivation` when every activation is zero
pub fn defuzzify(activations: &Activations) -> Result<BodyState, ClassifierError> {
    defuzzify_with(activations, TieBreak::default())
}

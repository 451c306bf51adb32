// ABOUTME: Body-state categories produced by the fuzzy classifier
// ABOUTME: Frozen ordinal contract used as the join key for diet and workout plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ClassifierError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Body-state category of a user
///
/// The ordinal of each variant is the value stored in the `Body` column of
/// the plan tables. It must never change between releases.
///
/// | Variant      | Ordinal |
/// |--------------|---------|
/// | `Thin`       | 0       |
/// | `Normal`     | 1       |
/// | `Overweight` | 2       |
/// | `PreObese`   | 3       |
/// | `Obese`      | 4       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum BodyState {
    /// Underweight for the given height
    Thin,
    /// Healthy weight for the given height
    Normal,
    /// Mildly above a healthy weight
    Overweight,
    /// Clearly above a healthy weight
    PreObese,
    /// Obese
    Obese,
}

impl BodyState {
    /// Every state in ordinal order
    pub const ALL: [Self; 5] = [
        Self::Thin,
        Self::Normal,
        Self::Overweight,
        Self::PreObese,
        Self::Obese,
    ];

    /// Returns the frozen ordinal: Thin=0 .. Obese=4
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Thin => 0,
            Self::Normal => 1,
            Self::Overweight => 2,
            Self::PreObese => 3,
            Self::Obese => 4,
        }
    }

    /// Short lowercase label as shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::PreObese => "pre-obese",
            Self::Obese => "obese",
        }
    }

    /// True for every state that gets a weight-loss plan
    #[inline]
    #[must_use]
    pub const fn needs_weight_loss(self) -> bool {
        matches!(self, Self::Overweight | Self::PreObese | Self::Obese)
    }

    /// Headline shown above the recommendation
    #[must_use]
    pub fn advice(self) -> String {
        match self {
            Self::Thin => {
                "You are thin! You should gain weight instead of losing weight!".to_owned()
            }
            Self::Normal => "You are in shape! Keep going!".to_owned(),
            Self::Overweight | Self::PreObese | Self::Obese => format!(
                "You are {}! To lose weight, you can follow this guide:",
                self.label()
            ),
        }
    }
}

impl PartialOrd for BodyState {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BodyState {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl From<BodyState> for u8 {
    #[inline]
    fn from(state: BodyState) -> Self {
        state.ordinal()
    }
}

impl TryFrom<u8> for BodyState {
    type Error = ClassifierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|state| state.ordinal() == value)
            .ok_or_else(|| {
                ClassifierError::invalid_input(
                    "body state",
                    format!("unknown ordinal {value} (expected 0-4)"),
                )
            })
    }
}

impl FromStr for BodyState {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "thin" => Ok(Self::Thin),
            "normal" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "pre-obese" => Ok(Self::PreObese),
            "obese" => Ok(Self::Obese),
            other => Err(ClassifierError::invalid_input(
                "body state",
                format!(
                    "unknown label '{other}'. Valid options: thin, normal, overweight, pre-obese, obese"
                ),
            )),
        }
    }
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_frozen() {
        let ordinals: Vec<u8> = BodyState::ALL.iter().map(|s| s.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_try_from_rejects_unknown_ordinal() {
        assert_eq!(BodyState::try_from(3).unwrap(), BodyState::PreObese);
        assert!(BodyState::try_from(5).is_err());
    }

    #[test]
    fn test_ordering_follows_ordinal() {
        assert!(BodyState::Thin < BodyState::Normal);
        assert!(BodyState::PreObese < BodyState::Obese);
        assert_eq!(BodyState::ALL.iter().max(), Some(&BodyState::Obese));
    }

    #[test]
    fn test_advice_matches_category() {
        assert!(BodyState::Thin.advice().contains("gain weight"));
        assert_eq!(BodyState::Normal.advice(), "You are in shape! Keep going!");
        assert_eq!(
            BodyState::PreObese.advice(),
            "You are pre-obese! To lose weight, you can follow this guide:"
        );
        assert!(!BodyState::Normal.needs_weight_loss());
        assert!(BodyState::Overweight.needs_weight_loss());
    }

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!("pre_obese".parse::<BodyState>().unwrap(), BodyState::PreObese);
        assert_eq!(" Pre-Obese ".parse::<BodyState>().unwrap(), BodyState::PreObese);
        assert!("chubby".parse::<BodyState>().is_err());
    }
}

// ABOUTME: Plan lookup key shared with the diet and workout plan storage
// ABOUTME: ExperienceStage plus the (body, sex, stage) integer join columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BodyState, Sex};
use crate::errors::ClassifierError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How experienced the user is with weight loss
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStage {
    /// New to weight loss (code 0)
    #[default]
    Beginner,
    /// Has followed a plan before (code 1)
    Intermediate,
}

impl ExperienceStage {
    /// Code stored in the `Stage` column of the plan tables
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
        }
    }
}

impl TryFrom<u8> for ExperienceStage {
    type Error = ClassifierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Beginner),
            1 => Ok(Self::Intermediate),
            n => Err(ClassifierError::invalid_input(
                "stage",
                format!("unknown code {n} (expected 0 or 1)"),
            )),
        }
    }
}

impl FromStr for ExperienceStage {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "0" => Ok(Self::Beginner),
            "intermediate" | "1" => Ok(Self::Intermediate),
            other => Err(ClassifierError::invalid_input(
                "stage",
                format!("unknown value '{other}'. Valid options: beginner (0), intermediate (1)"),
            )),
        }
    }
}

/// Key used to look up standard calories, diets and workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanKey {
    /// Classified body state
    pub body: BodyState,
    /// Sex of the user
    pub sex: Sex,
    /// Weight-loss experience
    pub stage: ExperienceStage,
}

impl PlanKey {
    /// Build a key from its parts
    #[must_use]
    pub const fn new(body: BodyState, sex: Sex, stage: ExperienceStage) -> Self {
        Self { body, sex, stage }
    }

    /// Value of the `Body` column
    #[must_use]
    pub const fn body_code(&self) -> u8 {
        self.body.ordinal()
    }

    /// Value of the `Sex` column
    #[must_use]
    pub const fn sex_code(&self) -> u8 {
        self.sex.code()
    }

    /// Value of the `Stage` column
    #[must_use]
    pub const fn stage_code(&self) -> u8 {
        self.stage.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_key_columns() {
        let key = PlanKey::new(BodyState::PreObese, Sex::Female, ExperienceStage::Intermediate);
        assert_eq!(
            (key.body_code(), key.sex_code(), key.stage_code()),
            (3, 1, 1)
        );
    }

    #[test]
    fn test_stage_codes() {
        assert_eq!(ExperienceStage::default(), ExperienceStage::Beginner);
        assert_eq!(ExperienceStage::try_from(1).unwrap(), ExperienceStage::Intermediate);
        assert!(ExperienceStage::try_from(9).is_err());
        assert!("expert".parse::<ExperienceStage>().is_err());
    }
}

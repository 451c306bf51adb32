// ABOUTME: Caller-supplied body measurement and the sex selector for membership tables
// ABOUTME: Sex codes follow the plan tables (0 = male, 1 = female)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{height, weight};
use crate::errors::ClassifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, selects the membership tables used for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (code 0)
    Male,
    /// Female (code 1)
    Female,
}

impl Sex {
    /// Both sexes, in code order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Code stored in the `Sex` column of the plan tables
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }

    /// Lowercase name for logging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl TryFrom<u8> for Sex {
    type Error = ClassifierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Male),
            1 => Ok(Self::Female),
            n => Err(ClassifierError::invalid_input(
                "sex",
                format!("unknown code {n} (expected 0 for male or 1 for female)"),
            )),
        }
    }
}

impl FromStr for Sex {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "0" => Ok(Self::Male),
            "female" | "f" | "1" => Ok(Self::Female),
            other => Err(ClassifierError::invalid_input(
                "sex",
                format!("unknown value '{other}'. Valid options: male (0), female (1)"),
            )),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One height/weight reading for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Sex of the person measured
    pub sex: Sex,
}

impl Measurement {
    /// Create a measurement
    #[must_use]
    pub const fn new(height_cm: f64, weight_kg: f64, sex: Sex) -> Self {
        Self {
            height_cm,
            weight_kg,
            sex,
        }
    }

    /// Reject values that have no position on the numeric domain.
    ///
    /// Finite values outside the usual range are accepted; the membership
    /// tables saturate them.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::InvalidInput` if height or weight is NaN or infinite
    pub fn ensure_finite(&self) -> Result<(), ClassifierError> {
        if !self.height_cm.is_finite() {
            return Err(ClassifierError::invalid_input(
                "height",
                format!("must be a finite number of centimeters, got {}", self.height_cm),
            ));
        }
        if !self.weight_kg.is_finite() {
            return Err(ClassifierError::invalid_input(
                "weight",
                format!("must be a finite number of kilograms, got {}", self.weight_kg),
            ));
        }
        Ok(())
    }

    /// Whether both readings lie inside the ranges the input form accepts
    ///
    /// Classification does not require this; out-of-range values saturate.
    #[must_use]
    pub fn within_form_range(&self) -> bool {
        (height::MIN_CM..=height::MAX_CM).contains(&self.height_cm)
            && (weight::MIN_KG..=weight::MAX_KG).contains(&self.weight_kg)
    }

    /// Round both readings to `decimals` places, as the input form does
    #[must_use]
    pub fn rounded(self, decimals: u32) -> Self {
        let exponent = i32::try_from(decimals.min(15)).unwrap_or(15);
        let factor = 10_f64.powi(exponent);
        let round = |value: f64| {
            let scaled = value * factor;
            if scaled.is_finite() {
                scaled.round() / factor
            } else {
                value
            }
        };
        Self {
            height_cm: round(self.height_cm),
            weight_kg: round(self.weight_kg),
            sex: self.sex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_range_bounds() {
        assert!(Measurement::new(height::MIN_CM, weight::MAX_KG, Sex::Male).within_form_range());
        assert!(Measurement::new(height::MAX_CM, weight::MIN_KG, Sex::Female).within_form_range());
        assert!(Measurement::new(175.0, 80.0, Sex::Male).within_form_range());
        assert!(!Measurement::new(129.9, 80.0, Sex::Male).within_form_range());
        assert!(!Measurement::new(175.0, 150.5, Sex::Female).within_form_range());
        assert!(!Measurement::new(f64::NAN, 80.0, Sex::Male).within_form_range());
    }

    #[test]
    fn test_sex_codes_match_plan_tables() {
        assert_eq!(Sex::Male.code(), 0);
        assert_eq!(Sex::Female.code(), 1);
        assert_eq!(Sex::try_from(1).unwrap(), Sex::Female);
    }

    #[test]
    fn test_unknown_sex_fails_fast() {
        let err = Sex::try_from(2).unwrap_err();
        assert!(err.to_string().contains("unknown code 2"));
        assert!("other".parse::<Sex>().is_err());
        assert_eq!("  FEMALE ".parse::<Sex>().unwrap(), Sex::Female);
    }

    #[test]
    fn test_non_finite_measurement_rejected() {
        assert!(Measurement::new(f64::NAN, 70.0, Sex::Male)
            .ensure_finite()
            .is_err());
        assert!(Measurement::new(170.0, f64::INFINITY, Sex::Male)
            .ensure_finite()
            .is_err());
        assert!(Measurement::new(50.0, 400.0, Sex::Male)
            .ensure_finite()
            .is_ok());
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let m = Measurement::new(175.004_9, 80.125_1, Sex::Male).rounded(2);
        assert!((m.height_cm - 175.0).abs() < 1e-9);
        assert!((m.weight_kg - 80.13).abs() < 1e-9);
    }
}

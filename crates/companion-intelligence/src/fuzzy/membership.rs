// ABOUTME: Piecewise-linear membership functions and the per-sex tables that hold them
// ABOUTME: Evaluation, support bounds and gap-free validation of height and weight tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::fuzzy_set::FuzzySet;
use companion_core::{ConfigError, Sex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shape of a membership function over a numeric domain
///
/// Shoulders are used for the outermost terms of a table so that values
/// beyond every other support saturate at 1.0 instead of falling to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipShape {
    /// 1.0 up to `plateau_end`, falling linearly to 0.0 at `zero_at`
    LeftShoulder {
        /// Last value with full membership
        plateau_end: f64,
        /// First value with no membership
        zero_at: f64,
    },
    /// 0.0 at `left`, rising to 1.0 at `peak`, back to 0.0 at `right`
    Triangle {
        /// Lower end of the support
        left: f64,
        /// Single point of full membership
        peak: f64,
        /// Upper end of the support
        right: f64,
    },
    /// 0.0 at `left`, 1.0 across `[left_top, right_top]`, 0.0 at `right`
    Trapezoid {
        /// Lower end of the support
        left: f64,
        /// Start of the plateau
        left_top: f64,
        /// End of the plateau
        right_top: f64,
        /// Upper end of the support
        right: f64,
    },
    /// 0.0 up to `zero_at`, rising linearly to 1.0 from `plateau_start` on
    RightShoulder {
        /// Last value with no membership
        zero_at: f64,
        /// First value with full membership
        plateau_start: f64,
    },
}

impl MembershipShape {
    /// Degree of membership of `x`, always within `[0.0, 1.0]`.
    ///
    /// NaN has no position on the domain and evaluates to 0.0.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let degree = match *self {
            Self::LeftShoulder {
                plateau_end,
                zero_at,
            } => {
                if x <= plateau_end {
                    1.0
                } else if x >= zero_at {
                    0.0
                } else {
                    (zero_at - x) / (zero_at - plateau_end)
                }
            }
            Self::Triangle { left, peak, right } => {
                if x <= left || x >= right {
                    // a vertical edge still owns its peak
                    if (x - peak).abs() < f64::EPSILON {
                        1.0
                    } else {
                        0.0
                    }
                } else if x <= peak {
                    (x - left) / (peak - left)
                } else {
                    (right - x) / (right - peak)
                }
            }
            Self::Trapezoid {
                left,
                left_top,
                right_top,
                right,
            } => {
                if x >= left_top && x <= right_top {
                    1.0
                } else if x <= left || x >= right {
                    0.0
                } else if x < left_top {
                    (x - left) / (left_top - left)
                } else {
                    (right - x) / (right - right_top)
                }
            }
            Self::RightShoulder {
                zero_at,
                plateau_start,
            } => {
                if x >= plateau_start {
                    1.0
                } else if x <= zero_at {
                    0.0
                } else {
                    (x - zero_at) / (plateau_start - zero_at)
                }
            }
        };

        degree.clamp(0.0, 1.0)
    }

    /// Open interval outside of which the degree is zero
    ///
    /// Shoulders extend to infinity on their saturated side.
    #[must_use]
    pub const fn support(&self) -> (f64, f64) {
        match *self {
            Self::LeftShoulder { zero_at, .. } => (f64::NEG_INFINITY, zero_at),
            Self::Triangle { left, right, .. } | Self::Trapezoid { left, right, .. } => {
                (left, right)
            }
            Self::RightShoulder { zero_at, .. } => (zero_at, f64::INFINITY),
        }
    }

    /// Check breakpoints are finite and in non-decreasing order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the shape is malformed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let points: Vec<f64> = match self {
            Self::LeftShoulder {
                plateau_end,
                zero_at,
            } => vec![*plateau_end, *zero_at],
            Self::Triangle { left, peak, right } => vec![*left, *peak, *right],
            Self::Trapezoid {
                left,
                left_top,
                right_top,
                right,
            } => vec![*left, *left_top, *right_top, *right],
            Self::RightShoulder {
                zero_at,
                plateau_start,
            } => vec![*zero_at, *plateau_start],
        };

        if points.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "membership breakpoints must be finite",
            ));
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::InvalidRange(
                "membership breakpoints must be in ascending order",
            ));
        }
        let (lower, upper) = self.support();
        if lower >= upper {
            return Err(ConfigError::InvalidRange(
                "membership support must not be empty",
            ));
        }
        Ok(())
    }

    const fn is_left_shoulder(&self) -> bool {
        matches!(self, Self::LeftShoulder { .. })
    }

    const fn is_right_shoulder(&self) -> bool {
        matches!(self, Self::RightShoulder { .. })
    }
}

/// A named fuzzy term such as `short` or `heavy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipFunction {
    /// Term name referenced by the rule base
    pub name: String,
    /// Shape over the measurement domain
    #[serde(flatten)]
    pub shape: MembershipShape,
}

impl MembershipFunction {
    /// Create a named membership function
    #[must_use]
    pub fn new(name: impl Into<String>, shape: MembershipShape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Degree of membership of `x`
    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        self.shape.evaluate(x)
    }
}

/// Ordered list of membership functions covering one measurement domain
///
/// Functions are listed from the lowest to the highest part of the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipTable {
    functions: Vec<MembershipFunction>,
}

impl MembershipTable {
    /// Build a table from functions listed in ascending order
    #[must_use]
    pub const fn new(functions: Vec<MembershipFunction>) -> Self {
        Self { functions }
    }

    /// Functions in domain order
    #[must_use]
    pub fn functions(&self) -> &[MembershipFunction] {
        &self.functions
    }

    /// Term names in domain order
    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|f| f.name.as_str())
    }

    /// Evaluate every function at `x`
    #[must_use]
    pub fn fuzzify(&self, x: f64) -> FuzzySet {
        self.functions
            .iter()
            .map(|f| (f.name.clone(), f.degree(x)))
            .collect()
    }

    /// Check the table is usable for classification.
    ///
    /// Requires at least two terms, unique non-blank names, well-formed
    /// shapes, shoulders at both ends and nowhere else, and overlapping
    /// supports between neighbours so that every finite value has a
    /// non-zero degree in at least one term.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found
    pub fn validate(&self, table: &str) -> Result<(), ConfigError> {
        if self.functions.len() < 2 {
            return Err(ConfigError::MissingField(
                "membership table needs at least two terms",
            ));
        }

        let mut seen = HashSet::new();
        for function in &self.functions {
            if function.name.trim().is_empty() {
                return Err(ConfigError::MissingField("membership term name"));
            }
            if !seen.insert(function.name.as_str()) {
                return Err(ConfigError::DuplicateTerm {
                    table: table.to_owned(),
                    term: function.name.clone(),
                });
            }
            function.shape.validate()?;
        }

        let last = self.functions.len() - 1;
        for (index, function) in self.functions.iter().enumerate() {
            let expect_left = index == 0;
            let expect_right = index == last;
            if function.shape.is_left_shoulder() != expect_left
                || function.shape.is_right_shoulder() != expect_right
            {
                return Err(ConfigError::InvalidRange(
                    "tables must start with a left shoulder, end with a right shoulder, and use no other shoulders",
                ));
            }
        }

        for pair in self.functions.windows(2) {
            let (lower_start, lower_end) = pair[0].shape.support();
            let (upper_start, upper_end) = pair[1].shape.support();
            let ordered = lower_start < upper_start && lower_end < upper_end;
            if !ordered || upper_start >= lower_end {
                return Err(ConfigError::CoverageGap {
                    table: table.to_owned(),
                    left: pair[0].name.clone(),
                    right: pair[1].name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Height and weight tables for one sex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexTables {
    /// Height terms (centimeters)
    pub height: MembershipTable,
    /// Weight terms (kilograms)
    pub weight: MembershipTable,
}

/// Membership tables for both sexes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipTables {
    /// Tables used for male measurements
    pub male: SexTables,
    /// Tables used for female measurements
    pub female: SexTables,
}

impl MembershipTables {
    /// Select the tables for `sex`
    #[must_use]
    pub const fn for_sex(&self, sex: Sex) -> &SexTables {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Validate all four tables and check both sexes share one vocabulary
    ///
    /// The rule base is sex-independent, so male and female tables must
    /// define the same height terms and the same weight terms.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.male.height.validate("male height")?;
        self.male.weight.validate("male weight")?;
        self.female.height.validate("female height")?;
        self.female.weight.validate("female weight")?;

        let same_height = self.male.height.term_names().eq(self.female.height.term_names());
        let same_weight = self.male.weight.term_names().eq(self.female.weight.term_names());
        if !same_height || !same_weight {
            return Err(ConfigError::InvalidRange(
                "male and female tables must define the same terms in the same order",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_terms() -> MembershipTable {
        MembershipTable::new(vec![
            MembershipFunction::new(
                "low",
                MembershipShape::LeftShoulder {
                    plateau_end: 10.0,
                    zero_at: 20.0,
                },
            ),
            MembershipFunction::new(
                "mid",
                MembershipShape::Triangle {
                    left: 10.0,
                    peak: 20.0,
                    right: 30.0,
                },
            ),
            MembershipFunction::new(
                "high",
                MembershipShape::RightShoulder {
                    zero_at: 20.0,
                    plateau_start: 30.0,
                },
            ),
        ])
    }

    #[test]
    fn test_shoulders_saturate_beyond_plateau() {
        let table = three_terms();
        let below = table.fuzzify(-1_000.0);
        assert!((below.degree("low") - 1.0).abs() < f64::EPSILON);
        assert!(below.degree("mid").abs() < f64::EPSILON);
        assert!(below.degree("high").abs() < f64::EPSILON);

        let above = table.fuzzify(1_000.0);
        assert!((above.degree("high") - 1.0).abs() < f64::EPSILON);
        assert!(above.degree("low").abs() < f64::EPSILON);
    }

    #[test]
    fn test_trapezoid_ramps_and_plateau() {
        let shape = MembershipShape::Trapezoid {
            left: 0.0,
            left_top: 10.0,
            right_top: 20.0,
            right: 40.0,
        };
        assert!(shape.evaluate(0.0).abs() < f64::EPSILON);
        assert!((shape.evaluate(5.0) - 0.5).abs() < 1e-12);
        assert!((shape.evaluate(15.0) - 1.0).abs() < f64::EPSILON);
        assert!((shape.evaluate(30.0) - 0.5).abs() < 1e-12);
        assert!(shape.evaluate(40.0).abs() < f64::EPSILON);
        assert!(shape.evaluate(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_triangle_peak() {
        let shape = MembershipShape::Triangle {
            left: 10.0,
            peak: 20.0,
            right: 30.0,
        };
        assert!((shape.evaluate(20.0) - 1.0).abs() < f64::EPSILON);
        assert!((shape.evaluate(25.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_valid_table_passes() {
        three_terms().validate("test").unwrap();
    }

    #[test]
    fn test_gap_between_terms_rejected() {
        let table = MembershipTable::new(vec![
            MembershipFunction::new(
                "low",
                MembershipShape::LeftShoulder {
                    plateau_end: 10.0,
                    zero_at: 15.0,
                },
            ),
            MembershipFunction::new(
                "high",
                MembershipShape::RightShoulder {
                    zero_at: 15.0,
                    plateau_start: 30.0,
                },
            ),
        ]);
        let err = table.validate("gappy").unwrap_err();
        assert!(matches!(err, ConfigError::CoverageGap { .. }));
    }

    #[test]
    fn test_missing_shoulder_rejected() {
        let table = MembershipTable::new(vec![
            MembershipFunction::new(
                "low",
                MembershipShape::Triangle {
                    left: 0.0,
                    peak: 10.0,
                    right: 20.0,
                },
            ),
            MembershipFunction::new(
                "high",
                MembershipShape::RightShoulder {
                    zero_at: 10.0,
                    plateau_start: 20.0,
                },
            ),
        ]);
        assert!(matches!(
            table.validate("no left shoulder"),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_duplicate_and_malformed_terms_rejected() {
        let mut table = three_terms();
        table.functions[1].name = "low".into();
        assert!(matches!(
            table.validate("dup"),
            Err(ConfigError::DuplicateTerm { .. })
        ));

        let mut table = three_terms();
        table.functions[1].shape = MembershipShape::Triangle {
            left: 30.0,
            peak: 20.0,
            right: 10.0,
        };
        assert!(matches!(
            table.validate("backwards"),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_shape_serializes_with_tag() {
        let function = MembershipFunction::new(
            "tall",
            MembershipShape::RightShoulder {
                zero_at: 178.0,
                plateau_start: 186.0,
            },
        );
        let json = serde_json::to_value(&function).unwrap();
        assert_eq!(json["name"], "tall");
        assert_eq!(json["shape"], "right_shoulder");
        assert_eq!(json["plateau_start"], 186.0);
    }
}

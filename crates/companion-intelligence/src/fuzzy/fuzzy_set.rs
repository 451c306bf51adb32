// ABOUTME: Result of fuzzifying one crisp measurement against a membership table
// ABOUTME: Term name to degree mapping that preserves table order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Degree of one term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDegree {
    /// Term name
    pub term: String,
    /// Membership degree in `[0.0, 1.0]`
    pub degree: f64,
}

/// Membership degrees of a crisp value across every term of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuzzySet {
    degrees: Vec<TermDegree>,
}

impl FuzzySet {
    /// Build a set from `(term, degree)` pairs, clamping degrees into `[0, 1]`
    pub fn from_degrees<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        pairs.into_iter().map(|(t, d)| (t.into(), d)).collect()
    }

    /// Degree of `term`, 0.0 for terms not in the set
    #[must_use]
    pub fn degree(&self, term: &str) -> f64 {
        self.degrees
            .iter()
            .find(|d| d.term == term)
            .map_or(0.0, |d| d.degree)
    }

    /// Iterate degrees in table order
    pub fn iter(&self) -> impl Iterator<Item = &TermDegree> {
        self.degrees.iter()
    }

    /// Number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True when the set holds no terms at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// True when at least one term has a non-zero degree
    #[must_use]
    pub fn has_support(&self) -> bool {
        self.degrees.iter().any(|d| d.degree > 0.0)
    }

    /// Term with the highest degree, the earliest one on ties
    #[must_use]
    pub fn strongest(&self) -> Option<&TermDegree> {
        self.degrees
            .iter()
            .fold(None, |best: Option<&TermDegree>, d| match best {
                Some(b) if b.degree >= d.degree => Some(b),
                _ => Some(d),
            })
    }
}

impl FromIterator<(String, f64)> for FuzzySet {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            degrees: iter
                .into_iter()
                .map(|(term, degree)| TermDegree {
                    term,
                    degree: if degree.is_nan() {
                        0.0
                    } else {
                        degree.clamp(0.0, 1.0)
                    },
                })
                .collect(),
        }
    }
}

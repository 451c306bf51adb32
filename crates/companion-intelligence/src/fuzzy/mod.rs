// ABOUTME: Fuzzy inference engine for body-state classification
// ABOUTME: Membership tables, fuzzy sets, rule base, defuzzification and the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fuzzy Inference
//!
//! The free functions below run against [`FuzzyClassifier::global`]. Build a
//! [`FuzzyClassifier`] directly to classify against a custom configuration.

/// Body-state classifier over a validated configuration
pub mod classifier;
/// Max-membership defuzzification and tie-break policies
pub mod defuzzify;
/// Term degrees produced by fuzzification
pub mod fuzzy_set;
/// Membership shapes and per-sex tables
pub mod membership;
/// Rule table and Mamdani inference
pub mod rules;

pub use classifier::{Classification, FuzzyClassifier, StateActivation};
pub use defuzzify::{defuzzify, defuzzify_with, TieBreak, TIE_TOLERANCE};
pub use fuzzy_set::{FuzzySet, TermDegree};
pub use membership::{
    MembershipFunction, MembershipShape, MembershipTable, MembershipTables, SexTables,
};
pub use rules::{Activations, Rule, RuleBase, RuleFiring};

use companion_core::{BodyState, ClassifierError, Sex};

/// Degrees of `height_cm` in each height term for `sex`
#[must_use]
pub fn fuzzify_height(height_cm: f64, sex: Sex) -> FuzzySet {
    FuzzyClassifier::global().fuzzify_height(height_cm, sex)
}

/// Degrees of `weight_kg` in each weight term for `sex`
#[must_use]
pub fn fuzzify_weight(weight_kg: f64, sex: Sex) -> FuzzySet {
    FuzzyClassifier::global().fuzzify_weight(weight_kg, sex)
}

/// Aggregated activation of every state for the given fuzzy inputs
#[must_use]
pub fn infer(height: &FuzzySet, weight: &FuzzySet) -> Activations {
    FuzzyClassifier::global().infer(height, weight)
}

/// Classify one measurement with the shared classifier
///
/// # Errors
///
/// Returns `ClassifierError::InvalidInput` for NaN or infinite readings
pub fn classify(height_cm: f64, weight_kg: f64, sex: Sex) -> Result<BodyState, ClassifierError> {
    FuzzyClassifier::global().classify(height_cm, weight_kg, sex)
}

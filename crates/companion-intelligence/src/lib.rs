// ABOUTME: Body-state classification engine for the DietExercise Companion
// ABOUTME: Fuzzy membership tables, Mamdani rule inference, defuzzification and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Companion Intelligence
//!
//! Maps a `(height, weight, sex)` measurement to one of five body states:
//! thin, normal, overweight, pre-obese or obese.
//!
//! ```rust,no_run
//! use companion_intelligence::fuzzy::FuzzyClassifier;
//! use companion_core::{BodyState, Sex};
//!
//! let state = FuzzyClassifier::default().classify(175.0, 80.0, Sex::Male);
//! assert_eq!(state.ok(), Some(BodyState::Overweight));
//! ```
//!
//! ## Modules
//!
//! - **fuzzy**: membership tables, inference and the classifier itself
//! - **config**: tables, rule base and policies with environment overrides
//! - **physiological_constants**: breakpoints the default tables are built from

/// Classifier configuration and clinical defaults
pub mod config;

/// Fuzzy inference engine
pub mod fuzzy;

/// Anthropometric breakpoints behind the default tables
pub mod physiological_constants;

pub use config::ClassifierConfig;
pub use fuzzy::{
    classify, Classification, FuzzyClassifier, FuzzySet, MembershipTables, RuleBase, TieBreak,
};

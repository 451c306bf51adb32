// ABOUTME: Main library entry point for the DietExercise Companion body-state classifier
// ABOUTME: Re-exports the core types and fuzzy engine and provides logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `DietExercise` Companion
//!
//! Classifies a person's height, weight and sex into one of five body
//! states (thin, normal, overweight, pre-obese, obese) with a Mamdani fuzzy
//! inference system. The state, together with sex and weight-loss
//! experience, keys the companion's standard calorie, diet and workout plans.
//!
//! ## Architecture
//!
//! - **`companion-core`**: body states, measurements, plan keys, errors
//! - **`companion-intelligence`**: membership tables, rule base, classifier
//! - **logging**: `tracing-subscriber` setup for the operator binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dietexercise_companion::{ExperienceStage, FuzzyClassifier, Measurement, Sex};
//!
//! fn main() -> anyhow::Result<()> {
//!     let classifier = FuzzyClassifier::from_env()?;
//!     let measurement = Measurement::new(175.0, 80.0, Sex::Male);
//!     let key = classifier.plan_key(&measurement, ExperienceStage::Beginner)?;
//!     println!("{}: {}", key.body.label(), key.body.advice());
//!     Ok(())
//! }
//! ```

/// Production-ready logging configuration
pub mod logging;

pub use companion_core::{
    constants, errors, models, BodyState, ClassifierError, ConfigError, ErrorCode,
    ExperienceStage, Measurement, PlanKey, Sex,
};
pub use companion_intelligence::{
    config, fuzzy, physiological_constants, ClassifierConfig, Classification, FuzzyClassifier,
    TieBreak,
};

// ABOUTME: Body-state classifier wiring fuzzification, rule inference and defuzzification together
// ABOUTME: Single, batch and explained classification plus the process-wide default instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fuzzy Body-State Classifier
//!
//! `(height, weight, sex)` → fuzzify against the tables for `sex` → fire
//! every rule (min) → aggregate per state (max) → pick the strongest state.
//!
//! The classifier is immutable once built and holds no per-call state, so
//! one instance can serve any number of threads.

use super::defuzzify::{defuzzify_with, TieBreak};
use super::fuzzy_set::FuzzySet;
use super::rules::{Activations, RuleFiring};
use crate::config::ClassifierConfig;
use companion_core::{
    BodyState, ClassifierError, ConfigError, ExperienceStage, Measurement, PlanKey, Sex,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Process-wide classifier built from the environment on first use
static GLOBAL_CLASSIFIER: OnceLock<FuzzyClassifier> = OnceLock::new();

/// Activation of one body state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateActivation {
    /// Body state
    pub state: BodyState,
    /// Aggregated activation in `[0.0, 1.0]`
    pub activation: f64,
}

/// Full trace of one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Measurement after rounding, as actually classified
    pub measurement: Measurement,
    /// Height degrees per term
    pub height: FuzzySet,
    /// Weight degrees per term
    pub weight: FuzzySet,
    /// Every rule with its firing strength, in declaration order
    pub firings: Vec<RuleFiring>,
    /// Aggregated activation of every state, in ordinal order
    pub activations: Vec<StateActivation>,
    /// Tie-break policy applied
    pub tie_break: TieBreak,
    /// Winning state
    pub body_state: BodyState,
}

impl Classification {
    /// Activation of the winning state
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.activations
            .iter()
            .find(|a| a.state == self.body_state)
            .map_or(0.0, |a| a.activation)
    }
}

/// Mamdani fuzzy classifier over a validated configuration
#[derive(Debug, Clone)]
pub struct FuzzyClassifier {
    config: ClassifierConfig,
}

impl Default for FuzzyClassifier {
    /// Classifier over the clinical defaults
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }
}

impl FuzzyClassifier {
    /// Build a classifier, validating `config` first
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the tables or rule base are invalid
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            tie_break = %config.tie_break,
            rules = config.rules.rules().len(),
            "Body-state classifier ready"
        );
        Ok(Self { config })
    }

    /// Build a classifier from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if an override is malformed or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            config: ClassifierConfig::load()?,
        })
    }

    /// Shared classifier, falling back to the defaults when the
    /// environment holds an invalid configuration
    pub fn global() -> &'static Self {
        GLOBAL_CLASSIFIER.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load classifier config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Degrees of `height_cm` in each height term for `sex`
    #[must_use]
    pub fn fuzzify_height(&self, height_cm: f64, sex: Sex) -> FuzzySet {
        self.config.tables.for_sex(sex).height.fuzzify(height_cm)
    }

    /// Degrees of `weight_kg` in each weight term for `sex`
    #[must_use]
    pub fn fuzzify_weight(&self, weight_kg: f64, sex: Sex) -> FuzzySet {
        self.config.tables.for_sex(sex).weight.fuzzify(weight_kg)
    }

    /// Aggregated activation of every state for the given fuzzy inputs
    #[must_use]
    pub fn infer(&self, height: &FuzzySet, weight: &FuzzySet) -> Activations {
        self.config.rules.infer(height, weight)
    }

    /// Winning state under the configured tie-break policy
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::NoActivation` when every activation is zero
    pub fn defuzzify(&self, activations: &Activations) -> Result<BodyState, ClassifierError> {
        defuzzify_with(activations, self.config.tie_break)
    }

    /// Classify one measurement
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::InvalidInput` for NaN or infinite readings
    /// and `ClassifierError::NoActivation` if no rule fires
    pub fn classify(
        &self,
        height_cm: f64,
        weight_kg: f64,
        sex: Sex,
    ) -> Result<BodyState, ClassifierError> {
        self.classify_measurement(&Measurement::new(height_cm, weight_kg, sex))
    }

    /// Classify using the numeric sex code of the input form (0 male, 1 female)
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::InvalidInput` for an unknown sex code or
    /// non-finite readings
    pub fn classify_code(
        &self,
        height_cm: f64,
        weight_kg: f64,
        sex_code: u8,
    ) -> Result<BodyState, ClassifierError> {
        let sex = Sex::try_from(sex_code)?;
        self.classify(height_cm, weight_kg, sex)
    }

    /// Classify a [`Measurement`]
    ///
    /// # Errors
    ///
    /// See [`Self::classify`]
    pub fn classify_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<BodyState, ClassifierError> {
        let measurement = self.prepare(measurement)?;
        let height = self.fuzzify_height(measurement.height_cm, measurement.sex);
        let weight = self.fuzzify_weight(measurement.weight_kg, measurement.sex);
        let activations = self.infer(&height, &weight);
        let state = self.defuzzify(&activations)?;

        debug!(
            sex = %measurement.sex,
            height_cm = measurement.height_cm,
            weight_kg = measurement.weight_kg,
            body_state = %state,
            activation = activations.strength(state),
            "Classified body state"
        );
        Ok(state)
    }

    /// Classify and report every intermediate degree and firing
    ///
    /// # Errors
    ///
    /// See [`Self::classify`]
    pub fn explain(&self, measurement: &Measurement) -> Result<Classification, ClassifierError> {
        let measurement = self.prepare(measurement)?;
        let height = self.fuzzify_height(measurement.height_cm, measurement.sex);
        let weight = self.fuzzify_weight(measurement.weight_kg, measurement.sex);
        let firings = self.config.rules.fire(&height, &weight);
        let activations = self.infer(&height, &weight);
        let body_state = self.defuzzify(&activations)?;

        Ok(Classification {
            measurement,
            height,
            weight,
            firings,
            activations: activations
                .iter()
                .map(|(state, activation)| StateActivation { state, activation })
                .collect(),
            tie_break: self.config.tie_break,
            body_state,
        })
    }

    /// Classify many measurements in parallel, preserving input order
    ///
    /// Each measurement succeeds or fails on its own.
    #[must_use]
    pub fn classify_batch(
        &self,
        measurements: &[Measurement],
    ) -> Vec<Result<BodyState, ClassifierError>> {
        measurements
            .par_iter()
            .map(|m| self.classify_measurement(m))
            .collect()
    }

    /// Classify and build the key for the plan tables
    ///
    /// # Errors
    ///
    /// See [`Self::classify`]
    pub fn plan_key(
        &self,
        measurement: &Measurement,
        stage: ExperienceStage,
    ) -> Result<PlanKey, ClassifierError> {
        let body = self.classify_measurement(measurement)?;
        Ok(PlanKey::new(body, measurement.sex, stage))
    }

    fn prepare(&self, measurement: &Measurement) -> Result<Measurement, ClassifierError> {
        measurement.ensure_finite()?;
        Ok(measurement.rounded(self.config.input_decimals))
    }
}

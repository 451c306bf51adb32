// ABOUTME: Rule base and Mamdani inference for body-state classification
// ABOUTME: Min for rule firing, max for aggregation per consequent, completeness validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rule Base and Inference
//!
//! A rule reads "IF height IS <term> AND weight IS <term> THEN body IS <state>".
//! The rule base is a flat table rather than nested branching, so it can be
//! checked for completeness and iterated uniformly:
//!
//! - firing strength = `min(height degree, weight degree)`
//! - activation of a state = `max` of the firing strengths of its rules
//!
//! Two rules concluding the same state never add up.

use super::defuzzify::TIE_TOLERANCE;
use super::fuzzy_set::FuzzySet;
use super::membership::MembershipTables;
use companion_core::{BodyState, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Height term of the antecedent
    pub height: String,
    /// Weight term of the antecedent
    pub weight: String,
    /// Concluded body state
    pub consequent: BodyState,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub fn new(height: impl Into<String>, weight: impl Into<String>, consequent: BodyState) -> Self {
        Self {
            height: height.into(),
            weight: weight.into(),
            consequent,
        }
    }

    /// Firing strength for the given fuzzified inputs (fuzzy AND)
    #[must_use]
    pub fn firing_strength(&self, height: &FuzzySet, weight: &FuzzySet) -> f64 {
        height.degree(&self.height).min(weight.degree(&self.weight))
    }
}

/// How strongly one rule fired for one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleFiring {
    /// Height term of the antecedent
    pub height: String,
    /// Weight term of the antecedent
    pub weight: String,
    /// Concluded body state
    pub consequent: BodyState,
    /// `min` of the two antecedent degrees
    pub strength: f64,
}

/// Aggregated activation of every body state
///
/// Also remembers, for each state, the index of the first rule whose
/// firing reached that state's activation, which the declaration-order
/// tie-break relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Activations {
    strengths: [f64; 5],
    reached_at: [Option<usize>; 5],
}

impl Activations {
    /// Build activations directly, in the order given
    ///
    /// States listed earlier count as declared earlier. Repeated states are
    /// aggregated with `max`.
    #[must_use]
    pub fn from_strengths<I>(strengths: I) -> Self
    where
        I: IntoIterator<Item = (BodyState, f64)>,
    {
        let mut activations = Self::default();
        for (index, (state, strength)) in strengths.into_iter().enumerate() {
            activations.raise(state, strength, index);
        }
        activations
    }

    /// Aggregate one firing into the activation of `state` (fuzzy OR)
    pub fn raise(&mut self, state: BodyState, strength: f64, rule_index: usize) {
        let slot = usize::from(state.ordinal());
        let strength = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        let current = self.strengths[slot];
        if self.reached_at[slot].is_none() || strength > current + TIE_TOLERANCE {
            self.reached_at[slot] = Some(rule_index);
        }
        self.strengths[slot] = current.max(strength);
    }

    /// Activation of `state`, 0.0 when no rule concluded it
    #[must_use]
    pub fn strength(&self, state: BodyState) -> f64 {
        self.strengths[usize::from(state.ordinal())]
    }

    /// Index of the first rule whose firing reached the activation of
    /// `state`, `None` when no rule concluded it
    #[must_use]
    pub fn reached_at(&self, state: BodyState) -> Option<usize> {
        self.reached_at[usize::from(state.ordinal())]
    }

    /// Highest activation across all states
    #[must_use]
    pub fn peak(&self) -> f64 {
        self.strengths.iter().copied().fold(0.0, f64::max)
    }

    /// `(state, activation)` pairs in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = (BodyState, f64)> + '_ {
        BodyState::ALL.into_iter().map(|state| (state, self.strength(state)))
    }
}

/// The full rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Build a rule base from rows in declaration order
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in declaration order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Firing strength of every rule, in declaration order
    #[must_use]
    pub fn fire(&self, height: &FuzzySet, weight: &FuzzySet) -> Vec<RuleFiring> {
        self.rules
            .iter()
            .map(|rule| RuleFiring {
                height: rule.height.clone(),
                weight: rule.weight.clone(),
                consequent: rule.consequent,
                strength: rule.firing_strength(height, weight),
            })
            .collect()
    }

    /// Mamdani inference: min within a rule, max across rules per state
    #[must_use]
    pub fn infer(&self, height: &FuzzySet, weight: &FuzzySet) -> Activations {
        let mut activations = Activations::default();
        for (index, rule) in self.rules.iter().enumerate() {
            activations.raise(rule.consequent, rule.firing_strength(height, weight), index);
        }
        activations
    }

    /// Check every rule names known terms, no antecedent is repeated and
    /// every height × weight combination has exactly one rule.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found
    pub fn validate(&self, tables: &MembershipTables) -> Result<(), ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::MissingField("rule base"));
        }

        let heights: Vec<&str> = tables.male.height.term_names().collect();
        let weights: Vec<&str> = tables.male.weight.term_names().collect();

        let mut antecedents = HashSet::new();
        for rule in &self.rules {
            if !heights.contains(&rule.height.as_str()) {
                return Err(ConfigError::UnknownTerm {
                    variable: "height",
                    term: rule.height.clone(),
                });
            }
            if !weights.contains(&rule.weight.as_str()) {
                return Err(ConfigError::UnknownTerm {
                    variable: "weight",
                    term: rule.weight.clone(),
                });
            }
            if !antecedents.insert((rule.height.as_str(), rule.weight.as_str())) {
                return Err(ConfigError::DuplicateRule {
                    height: rule.height.clone(),
                    weight: rule.weight.clone(),
                });
            }
        }

        for height in &heights {
            for weight in &weights {
                if !antecedents.contains(&(*height, *weight)) {
                    return Err(ConfigError::IncompleteRuleBase {
                        height: (*height).to_owned(),
                        weight: (*weight).to_owned(),
                    });
                }
            }
        }

        Ok(())
    }
}

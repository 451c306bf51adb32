// ABOUTME: Tests for classifier configuration loading from BODY_STATE_* environment variables
// ABOUTME: Serialized because every test mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use dietexercise_companion::config::{CONFIG_JSON_ENV, INPUT_DECIMALS_ENV, TIE_BREAK_ENV};
use dietexercise_companion::fuzzy::{
    MembershipFunction, MembershipShape, MembershipTable, RuleBase,
};
use dietexercise_companion::{
    BodyState, ClassifierConfig, ClassifierError, ConfigError, ErrorCode, FuzzyClassifier,
    Measurement, Sex, TieBreak,
};
use serial_test::serial;
use std::env;

fn clear_env() {
    init_test_logging();
    env::remove_var(CONFIG_JSON_ENV);
    env::remove_var(TIE_BREAK_ENV);
    env::remove_var(INPUT_DECIMALS_ENV);
}

#[test]
#[serial]
fn test_load_without_overrides_uses_defaults() {
    clear_env();
    let config = ClassifierConfig::load().unwrap();
    assert_eq!(config, ClassifierConfig::default());
}

#[test]
#[serial]
fn test_tie_break_override() {
    clear_env();
    env::set_var(TIE_BREAK_ENV, "declaration_order");

    let classifier = FuzzyClassifier::from_env().unwrap();
    assert_eq!(classifier.config().tie_break, TieBreak::DeclarationOrder);
    assert_eq!(
        classifier.classify(164.0, 62.0, Sex::Male).unwrap(),
        BodyState::Overweight
    );

    clear_env();
}

#[test]
#[serial]
fn test_invalid_tie_break_is_a_parse_error() {
    clear_env();
    env::set_var(TIE_BREAK_ENV, "coin_flip");

    let err = ClassifierConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains(TIE_BREAK_ENV)));
    assert_eq!(ClassifierError::from(err).code(), ErrorCode::ConfigError);

    clear_env();
}

#[test]
#[serial]
fn test_input_decimals_override() {
    clear_env();
    env::set_var(INPUT_DECIMALS_ENV, "0");

    let classifier = FuzzyClassifier::from_env().unwrap();
    let report = classifier
        .explain(&Measurement::new(175.4, 79.6, Sex::Male))
        .unwrap();
    assert!((report.measurement.height_cm - 175.0).abs() < f64::EPSILON);
    assert!((report.measurement.weight_kg - 80.0).abs() < f64::EPSILON);

    env::set_var(INPUT_DECIMALS_ENV, "9");
    let err = ClassifierConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    assert_eq!(ClassifierError::from(err).code(), ErrorCode::ValueOutOfRange);

    env::set_var(INPUT_DECIMALS_ENV, "two");
    assert!(matches!(ClassifierConfig::load(), Err(ConfigError::Parse(_))));

    clear_env();
}

#[test]
#[serial]
fn test_scalar_overrides_apply_after_json() {
    clear_env();
    env::set_var(
        CONFIG_JSON_ENV,
        r#"{"tie_break": "declaration_order", "input_decimals": 1}"#,
    );
    env::set_var(TIE_BREAK_ENV, "lower_ordinal");

    let config = ClassifierConfig::load().unwrap();
    assert_eq!(config.tie_break, TieBreak::LowerOrdinal);
    assert_eq!(config.input_decimals, 1);

    clear_env();
}

#[test]
#[serial]
fn test_json_with_coverage_gap_is_rejected() {
    clear_env();
    let mut config = ClassifierConfig::default();
    config.tables.male.height = MembershipTable::new(vec![
        MembershipFunction::new(
            "short",
            MembershipShape::LeftShoulder {
                plateau_end: 150.0,
                zero_at: 155.0,
            },
        ),
        MembershipFunction::new(
            "average",
            MembershipShape::Trapezoid {
                left: 160.0,
                left_top: 165.0,
                right_top: 178.0,
                right: 186.0,
            },
        ),
        MembershipFunction::new(
            "tall",
            MembershipShape::RightShoulder {
                zero_at: 178.0,
                plateau_start: 186.0,
            },
        ),
    ]);
    env::set_var(CONFIG_JSON_ENV, config.to_json().unwrap());

    let err = ClassifierConfig::load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::CoverageGap { ref left, ref right, .. } if left == "short" && right == "average"
    ));

    clear_env();
}

#[test]
#[serial]
fn test_malformed_json_is_rejected() {
    clear_env();
    env::set_var(CONFIG_JSON_ENV, "{\"tie_break\": ");

    let err = FuzzyClassifier::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));

    clear_env();
}

#[test]
#[serial]
fn test_custom_rules_from_json_change_outcome() {
    clear_env();
    let mut config = ClassifierConfig::default();
    let mut rules = config.rules.rules().to_vec();
    for rule in &mut rules {
        if rule.height == "average" && rule.weight == "heavy" {
            rule.consequent = BodyState::Normal;
        }
    }
    config.rules = RuleBase::new(rules);
    env::set_var(CONFIG_JSON_ENV, config.to_json().unwrap());

    let classifier = FuzzyClassifier::from_env().unwrap();
    assert_eq!(
        classifier.classify(175.0, 75.0, Sex::Male).unwrap(),
        BodyState::Normal
    );

    clear_env();
}

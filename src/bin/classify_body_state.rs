// ABOUTME: Operator CLI that classifies one measurement into a body state
// ABOUTME: Prints the state, advice and plan key as text or JSON, optionally with the full trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify with the form defaults (175 cm, 80 kg)
//! classify-body-state --sex male
//!
//! # JSON output with every degree and rule firing
//! classify-body-state --sex female --height 160 --weight 68 --explain --format json
//!
//! # Numeric codes as stored in the plan tables
//! classify-body-state --sex 1 --stage 1 --height 158.5 --weight 49.2
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dietexercise_companion::constants::{height, weight};
use dietexercise_companion::logging::LoggingConfig;
use dietexercise_companion::{
    BodyState, Classification, ExperienceStage, FuzzyClassifier, Measurement, PlanKey, Sex,
};
use serde_json::json;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "classify-body-state",
    about = "Classify a height/weight measurement into a body state",
    long_about = "Fuzzy body-state classifier for the DietExercise Companion. Reads the classifier configuration from BODY_STATE_* environment variables."
)]
struct Cli {
    /// Sex: male/female or 0/1
    #[arg(long)]
    sex: Sex,

    /// Height in centimeters
    #[arg(long, default_value_t = height::DEFAULT_CM)]
    height: f64,

    /// Weight in kilograms
    #[arg(long, default_value_t = weight::DEFAULT_KG)]
    weight: f64,

    /// Weight-loss experience: beginner/intermediate or 0/1
    #[arg(long, default_value = "beginner")]
    stage: ExperienceStage,

    /// Include fuzzy degrees, rule firings and activations
    #[arg(long)]
    explain: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let classifier = FuzzyClassifier::from_env()?;
    let measurement = Measurement::new(cli.height, cli.weight, cli.sex);
    if !measurement.within_form_range() {
        warn!(
            height_cm = cli.height,
            weight_kg = cli.weight,
            "Measurement outside the form range ({}-{} cm, {}-{} kg); classifying with saturated memberships",
            height::MIN_CM,
            height::MAX_CM,
            weight::MIN_KG,
            weight::MAX_KG
        );
    }
    let report = classifier.explain(&measurement)?;
    let key = PlanKey::new(report.body_state, cli.sex, cli.stage);

    info!(
        body_state = %report.body_state,
        confidence = report.confidence(),
        "Classification complete"
    );

    match cli.format {
        OutputFormat::Json => print_json(&report, &key, cli.explain)?,
        OutputFormat::Text => print_text(&report, &key, cli.explain),
    }
    Ok(())
}

fn print_json(report: &Classification, key: &PlanKey, explain: bool) -> Result<()> {
    let mut output = json!({
        "body_state": report.body_state,
        "ordinal": report.body_state.ordinal(),
        "label": report.body_state.label(),
        "advice": report.body_state.advice(),
        "confidence": report.confidence(),
        "plan_key": key,
        "plan_columns": {
            "body": key.body_code(),
            "sex": key.sex_code(),
            "stage": key.stage_code(),
        },
    });
    if explain {
        output["explanation"] = serde_json::to_value(report)?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text(report: &Classification, key: &PlanKey, explain: bool) {
    let state: BodyState = report.body_state;
    println!(
        "Body state: {} ({}), confidence {:.3}",
        state.label(),
        state.ordinal(),
        report.confidence()
    );
    println!("{}", state.advice());
    println!(
        "Plan key: body={} sex={} stage={}",
        key.body_code(),
        key.sex_code(),
        key.stage_code()
    );

    if !explain {
        return;
    }

    println!();
    println!(
        "Measurement: {} cm, {} kg, {}",
        report.measurement.height_cm, report.measurement.weight_kg, report.measurement.sex
    );
    println!("Height degrees:");
    for d in report.height.iter() {
        println!("  {:<12} {:.3}", d.term, d.degree);
    }
    println!("Weight degrees:");
    for d in report.weight.iter() {
        println!("  {:<12} {:.3}", d.term, d.degree);
    }
    println!("Rules fired:");
    for firing in report.firings.iter().filter(|f| f.strength > 0.0) {
        println!(
            "  {} x {} -> {:<10} {:.3}",
            firing.height,
            firing.weight,
            firing.consequent.label(),
            firing.strength
        );
    }
    println!("Activations ({}):", report.tie_break);
    for a in &report.activations {
        println!("  {:<10} {:.3}", a.state.label(), a.activation);
    }
}

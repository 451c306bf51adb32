// ABOUTME: Core types and constants for the DietExercise Companion
// ABOUTME: Foundation crate with body states, measurements, plan keys and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Companion Core
//!
//! Foundation crate providing the shared vocabulary of the `DietExercise`
//! Companion: the body-state categories produced by the classifier, the
//! measurements it consumes, and the plan key downstream storage joins on.
//! This crate is designed to change infrequently; in particular the
//! [`BodyState`] ordinals are a frozen contract with the plan tables.
//!
//! ## Modules
//!
//! - **errors**: `ClassifierError`, `ConfigError` and the numeric `ErrorCode` families
//! - **models**: `BodyState`, `Sex`, `Measurement`, `ExperienceStage`, `PlanKey`
//! - **constants**: supported input ranges and form defaults

/// Unified error handling with standard error codes
pub mod errors;

/// Domain models (body state, measurement, plan key)
pub mod models;

/// Input ranges and defaults organized by domain
pub mod constants;

pub use errors::{ClassifierError, ConfigError, ErrorCode};
pub use models::{BodyState, ExperienceStage, Measurement, PlanKey, Sex};

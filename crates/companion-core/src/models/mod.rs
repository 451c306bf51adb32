// ABOUTME: Domain models for body-state classification
// ABOUTME: Re-exports BodyState, Sex, Measurement, ExperienceStage and PlanKey
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body-state categories and their frozen ordinals
pub mod body_state;
/// Measurement and sex selector
pub mod measurement;
/// Plan lookup key and experience stage
pub mod plan;

pub use body_state::BodyState;
pub use measurement::{Measurement, Sex};
pub use plan::{ExperienceStage, PlanKey};

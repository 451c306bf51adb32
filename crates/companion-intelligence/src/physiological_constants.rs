// ABOUTME: Anthropometric breakpoints behind the default height and weight membership tables
// ABOUTME: Derived from WHO Asia-Pacific BMI cut-offs at representative heights per sex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants for body-state classification
//!
//! Each table is described by its *ramps*: the `(start, end)` interval over
//! which one term fades out and the next fades in. Neighbouring terms share
//! a ramp, so degrees across a table always sum to 1.0 and there are no gaps.
//!
//! Weight ramps were placed so that, at the representative height of each
//! height term, the plateaus fall inside one BMI band.
//!
//! References:
//! - WHO Expert Consultation (2004). Appropriate body-mass index for Asian
//!   populations and its implications for policy and intervention strategies.
//!   *The Lancet*, 363(9403), 157-163. <https://doi.org/10.1016/S0140-6736(03)15268-3>
//! - WHO Western Pacific Region (2000). *The Asia-Pacific perspective:
//!   redefining obesity and its treatment.*

/// BMI band limits (kg/m²) the tables were derived from
pub mod bmi {
    /// Upper limit of the thin band
    pub const THIN_UPPER: f64 = 18.5;
    /// Upper limit of the normal band
    pub const NORMAL_UPPER: f64 = 23.0;
    /// Upper limit of the overweight band
    pub const OVERWEIGHT_UPPER: f64 = 25.0;
    /// Upper limit of the pre-obese band; above is obese
    pub const PRE_OBESE_UPPER: f64 = 30.0;
}

/// Term names shared by the rule base and both sexes' tables
pub mod terms {
    /// Height terms, lowest first
    pub mod height {
        /// Below the typical height range
        pub const SHORT: &str = "short";
        /// Typical height
        pub const AVERAGE: &str = "average";
        /// Above the typical height range
        pub const TALL: &str = "tall";
        /// All height terms in table order
        pub const ALL: [&str; 3] = [SHORT, AVERAGE, TALL];
    }

    /// Weight terms, lowest first
    pub mod weight {
        /// Light
        pub const THIN: &str = "thin";
        /// Typical weight
        pub const NORMAL: &str = "normal";
        /// Above typical
        pub const HEAVY: &str = "heavy";
        /// Well above typical
        pub const VERY_HEAVY: &str = "very_heavy";
        /// Far above typical
        pub const EXTREME: &str = "extreme";
        /// All weight terms in table order
        pub const ALL: [&str; 5] = [THIN, NORMAL, HEAVY, VERY_HEAVY, EXTREME];
    }
}

/// Male tables (representative heights 160 / 173 / 188 cm)
pub mod male {
    /// Height ramps in centimeters
    pub mod height {
        /// short → average
        pub const SHORT_TO_AVERAGE: (f64, f64) = (160.0, 168.0);
        /// average → tall
        pub const AVERAGE_TO_TALL: (f64, f64) = (178.0, 186.0);
    }

    /// Weight ramps in kilograms
    pub mod weight {
        /// thin → normal
        pub const THIN_TO_NORMAL: (f64, f64) = (52.0, 58.0);
        /// normal → heavy
        pub const NORMAL_TO_HEAVY: (f64, f64) = (66.0, 72.0);
        /// heavy → very heavy
        pub const HEAVY_TO_VERY_HEAVY: (f64, f64) = (78.0, 84.0);
        /// very heavy → extreme
        pub const VERY_HEAVY_TO_EXTREME: (f64, f64) = (92.0, 100.0);
    }
}

/// Female tables (representative heights 150 / 161 / 174 cm)
pub mod female {
    /// Height ramps in centimeters
    pub mod height {
        /// short → average
        pub const SHORT_TO_AVERAGE: (f64, f64) = (150.0, 157.0);
        /// average → tall
        pub const AVERAGE_TO_TALL: (f64, f64) = (165.0, 172.0);
    }

    /// Weight ramps in kilograms
    pub mod weight {
        /// thin → normal
        pub const THIN_TO_NORMAL: (f64, f64) = (43.0, 48.0);
        /// normal → heavy
        pub const NORMAL_TO_HEAVY: (f64, f64) = (55.0, 60.0);
        /// heavy → very heavy
        pub const HEAVY_TO_VERY_HEAVY: (f64, f64) = (65.0, 70.0);
        /// very heavy → extreme
        pub const VERY_HEAVY_TO_EXTREME: (f64, f64) = (77.0, 84.0);
    }
}

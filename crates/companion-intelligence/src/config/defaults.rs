// ABOUTME: Clinical default membership tables and rule base for body-state classification
// ABOUTME: Built from the ramps in physiological_constants and a height x weight rule table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::fuzzy::membership::{
    MembershipFunction, MembershipShape, MembershipTable, MembershipTables, SexTables,
};
use crate::fuzzy::rules::{Rule, RuleBase};
use crate::physiological_constants::{female, male, terms};
use companion_core::BodyState;

type Ramp = (f64, f64);

/// Rule table, height-major. Rows: short, average, tall.
/// Columns: thin, normal, heavy, very heavy, extreme.
const RULE_TABLE: [[BodyState; 5]; 3] = {
    use BodyState::{Normal, Obese, Overweight, PreObese, Thin};
    [
        [Thin, Overweight, PreObese, Obese, Obese],
        [Thin, Normal, Overweight, PreObese, Obese],
        [Thin, Thin, Normal, Overweight, PreObese],
    ]
};

fn left_shoulder(name: &str, (plateau_end, zero_at): Ramp) -> MembershipFunction {
    MembershipFunction::new(
        name,
        MembershipShape::LeftShoulder {
            plateau_end,
            zero_at,
        },
    )
}

fn trapezoid(name: &str, (left, left_top): Ramp, (right_top, right): Ramp) -> MembershipFunction {
    MembershipFunction::new(
        name,
        MembershipShape::Trapezoid {
            left,
            left_top,
            right_top,
            right,
        },
    )
}

fn right_shoulder(name: &str, (zero_at, plateau_start): Ramp) -> MembershipFunction {
    MembershipFunction::new(
        name,
        MembershipShape::RightShoulder {
            zero_at,
            plateau_start,
        },
    )
}

fn height_table(short_to_average: Ramp, average_to_tall: Ramp) -> MembershipTable {
    MembershipTable::new(vec![
        left_shoulder(terms::height::SHORT, short_to_average),
        trapezoid(terms::height::AVERAGE, short_to_average, average_to_tall),
        right_shoulder(terms::height::TALL, average_to_tall),
    ])
}

fn weight_table(ramps: [Ramp; 4]) -> MembershipTable {
    let [thin_normal, normal_heavy, heavy_very, very_extreme] = ramps;
    MembershipTable::new(vec![
        left_shoulder(terms::weight::THIN, thin_normal),
        trapezoid(terms::weight::NORMAL, thin_normal, normal_heavy),
        trapezoid(terms::weight::HEAVY, normal_heavy, heavy_very),
        trapezoid(terms::weight::VERY_HEAVY, heavy_very, very_extreme),
        right_shoulder(terms::weight::EXTREME, very_extreme),
    ])
}

/// Default tables for both sexes
#[must_use]
pub fn membership_tables() -> MembershipTables {
    MembershipTables {
        male: SexTables {
            height: height_table(male::height::SHORT_TO_AVERAGE, male::height::AVERAGE_TO_TALL),
            weight: weight_table([
                male::weight::THIN_TO_NORMAL,
                male::weight::NORMAL_TO_HEAVY,
                male::weight::HEAVY_TO_VERY_HEAVY,
                male::weight::VERY_HEAVY_TO_EXTREME,
            ]),
        },
        female: SexTables {
            height: height_table(
                female::height::SHORT_TO_AVERAGE,
                female::height::AVERAGE_TO_TALL,
            ),
            weight: weight_table([
                female::weight::THIN_TO_NORMAL,
                female::weight::NORMAL_TO_HEAVY,
                female::weight::HEAVY_TO_VERY_HEAVY,
                female::weight::VERY_HEAVY_TO_EXTREME,
            ]),
        },
    }
}

/// Default rule base: one rule per height × weight term, height-major
#[must_use]
pub fn rule_base() -> RuleBase {
    let rules = terms::height::ALL
        .iter()
        .zip(RULE_TABLE)
        .flat_map(|(height, row)| {
            terms::weight::ALL
                .iter()
                .zip(row)
                .map(move |(weight, state)| Rule::new(*height, *weight, state))
        })
        .collect();
    RuleBase::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_core::Sex;

    #[test]
    fn test_default_tables_validate() {
        membership_tables().validate().unwrap();
    }

    #[test]
    fn test_default_rule_base_is_complete() {
        let rules = rule_base();
        assert_eq!(rules.rules().len(), 15);
        rules.validate(&membership_tables()).unwrap();
    }

    #[test]
    fn test_default_rule_order_is_height_major() {
        let rules = rule_base();
        let first = &rules.rules()[0];
        assert_eq!(first.height, "short");
        assert_eq!(first.weight, "thin");
        let sixth = &rules.rules()[6];
        assert_eq!(sixth.height, "average");
        assert_eq!(sixth.weight, "normal");
        assert_eq!(sixth.consequent, BodyState::Normal);
    }

    #[test]
    fn test_degrees_partition_unity() {
        let tables = membership_tables();
        for sex in Sex::ALL {
            let sex_tables = tables.for_sex(sex);
            for step in 0..=300 {
                let x = f64::from(step);
                let height: f64 = sex_tables.height.fuzzify(x).iter().map(|d| d.degree).sum();
                let weight: f64 = sex_tables.weight.fuzzify(x).iter().map(|d| d.degree).sum();
                assert!((height - 1.0).abs() < 1e-9, "height {x} sums to {height}");
                assert!((weight - 1.0).abs() < 1e-9, "weight {x} sums to {weight}");
            }
        }
    }
}

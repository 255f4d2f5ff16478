//! Property tests for the categorization engine against the shipped rule set.

use std::sync::OnceLock;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use category_engine::calculation::{categorize, categorize_with_audit, resolve_weight_division};
use category_engine::config::{ConfigLoader, RuleSet};
use category_engine::models::{AthleteInput, Gender};

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| {
        ConfigLoader::load("./config/ibjjf-nogi-2026")
            .expect("Failed to load config")
            .into_rules()
    })
}

fn gender() -> impl Strategy<Value = Gender> {
    prop::sample::select(Gender::ALL.to_vec())
}

/// Weights from 0.01 kg to 300.00 kg, in hundredths.
fn weight() -> impl Strategy<Value = Decimal> {
    (1i64..=30_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn birth_date(year: i32, ordinal: u32) -> NaiveDate {
    NaiveDate::from_yo_opt(year, ordinal).unwrap()
}

proptest! {
    #[test]
    fn every_valid_athlete_is_categorized(
        year in 1900i32..=2026,
        ordinal in 1u32..=365,
        gender in gender(),
        weight in weight(),
    ) {
        let athlete = AthleteInput { birth_date: birth_date(year, ordinal), gender, weight };
        let result = categorize(&athlete, 2026, rules());
        prop_assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn competitive_age_ignores_month_and_day(
        year in 1940i32..=2026,
        first in 1u32..=365,
        second in 1u32..=365,
        gender in gender(),
        weight in weight(),
    ) {
        let a = AthleteInput { birth_date: birth_date(year, first), gender, weight };
        let b = AthleteInput { birth_date: birth_date(year, second), gender, weight };

        let ra = categorize(&a, 2026, rules()).unwrap();
        let rb = categorize(&b, 2026, rules()).unwrap();
        prop_assert_eq!(ra.competitive_age, (2026 - year) as u32);
        prop_assert_eq!(ra, rb);
    }

    #[test]
    fn categorization_is_deterministic(
        year in 1940i32..=2026,
        gender in gender(),
        weight in weight(),
    ) {
        let athlete = AthleteInput { birth_date: birth_date(year, 100), gender, weight };
        let first = categorize_with_audit(&athlete, 2026, rules()).unwrap();
        let second = categorize_with_audit(&athlete, 2026, rules()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn heavier_never_ranks_lighter(
        division_index in 0usize..13,
        gender in gender(),
        w1 in weight(),
        w2 in weight(),
    ) {
        let divisions = rules().age_divisions();
        let division = &divisions[division_index % divisions.len()].name;
        let (light, heavy) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };

        let tables = rules().weight_tables();
        let light_rank = resolve_weight_division(light, gender, division, tables, 1).unwrap().rank;
        let heavy_rank = resolve_weight_division(heavy, gender, division, tables, 1).unwrap().rank;
        prop_assert!(light_rank <= heavy_rank);
    }

    #[test]
    fn limit_minus_epsilon_matches_limit(
        gender in gender(),
        division_index in 0usize..13,
        thousandths in 1i64..=500,
    ) {
        let divisions = rules().age_divisions();
        let division = &divisions[division_index % divisions.len()].name;
        let table = rules().weight_table_for(gender, division).unwrap();
        let epsilon = Decimal::new(thousandths, 3);
        let tables = rules().weight_tables();

        for (rank, class) in table.classes.iter().enumerate() {
            if let Some(max) = class.max_weight {
                let at = resolve_weight_division(max, gender, division, tables, 1).unwrap();
                let over = resolve_weight_division(max + epsilon, gender, division, tables, 1).unwrap();
                prop_assert_eq!(at.rank, rank);
                prop_assert_eq!(over.rank, rank + 1);
                if rank == 0 || max - epsilon > table.classes[rank - 1].max_weight.unwrap() {
                    let under = resolve_weight_division(max - epsilon, gender, division, tables, 1).unwrap();
                    prop_assert_eq!(under.rank, rank);
                }
            }
        }
    }
}

//! Competitive age calculation.
//!
//! Competitive age is the reference year minus the birth year. Month and
//! day of birth are ignored, so every athlete born in the same year moves
//! to the next age on January 1st.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Earliest accepted reference year.
pub const MIN_REFERENCE_YEAR: i32 = 1000;

/// Latest accepted reference year.
pub const MAX_REFERENCE_YEAR: i32 = 9999;

/// The result of a competitive age calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CompetitiveAgeResult {
    /// Reference year minus birth year.
    pub competitive_age: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes an athlete's competitive age for a competition year.
///
/// # Returns
///
/// Returns the competitive age, or an error if:
/// - `reference_year` is not a 4-digit year (`InvalidReferenceYear`)
/// - the athlete was born after `reference_year` (`BirthAfterReferenceYear`)
///
/// # Examples
///
/// ```
/// use category_engine::calculation::calculate_competitive_age;
/// use chrono::NaiveDate;
///
/// let december = NaiveDate::from_ymd_opt(2008, 12, 31).unwrap();
/// let january = NaiveDate::from_ymd_opt(2008, 1, 1).unwrap();
///
/// assert_eq!(calculate_competitive_age(december, 2026, 1).unwrap().competitive_age, 18);
/// assert_eq!(calculate_competitive_age(january, 2026, 1).unwrap().competitive_age, 18);
/// ```
pub fn calculate_competitive_age(
    birth_date: NaiveDate,
    reference_year: i32,
    step_number: u32,
) -> EngineResult<CompetitiveAgeResult> {
    if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&reference_year) {
        return Err(EngineError::InvalidReferenceYear {
            year: reference_year,
        });
    }

    let birth_year = birth_date.year();
    if birth_year > reference_year {
        return Err(EngineError::BirthAfterReferenceYear {
            birth_year,
            reference_year,
        });
    }

    let competitive_age = (reference_year - birth_year) as u32;

    let audit_step = AuditStep {
        step_number,
        rule_id: "competitive_age".to_string(),
        rule_name: "Competitive Age".to_string(),
        rule_ref: "birth_year".to_string(),
        input: serde_json::json!({
            "birth_date": birth_date.to_string(),
            "reference_year": reference_year
        }),
        output: serde_json::json!({
            "competitive_age": competitive_age
        }),
        reasoning: format!(
            "{} - {} = {} (birth month and day are ignored)",
            reference_year, birth_year, competitive_age
        ),
    };

    Ok(CompetitiveAgeResult {
        competitive_age,
        audit_step,
    })
}

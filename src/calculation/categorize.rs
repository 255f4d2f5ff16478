//! Automatic categorization of an athlete.
//!
//! Combines competitive age, age division and weight division into the
//! composite category label. Every function here is pure: the same athlete,
//! reference year and rule set always produce the same result.

use tracing::debug;

use crate::config::RuleSet;
use crate::error::EngineResult;
use crate::models::{
    AthleteInput, AuditStep, AuditTrace, AuditedCategorization, CategorizationResult,
};

use super::age_division::resolve_age_division;
use super::competitive_age::calculate_competitive_age;
use super::weight_division::resolve_weight_division;

/// Categorizes an athlete for a competition year.
///
/// # Returns
///
/// Returns the [`CategorizationResult`], or an error if:
/// - the athlete data is invalid (non-positive weight, born after the
///   reference year, reference year not 4 digits)
/// - the rule set has no division for the athlete (a configuration defect)
///
/// # Examples
///
/// ```no_run
/// use category_engine::calculation::categorize;
/// use category_engine::config::ConfigLoader;
/// use category_engine::models::AthleteInput;
///
/// let loader = ConfigLoader::load("./config/ibjjf-nogi-2026").unwrap();
/// let athlete = AthleteInput::parse("2008-12-31", "Masculino", "74.5").unwrap();
///
/// let result = categorize(&athlete, 2026, loader.rules()).unwrap();
/// assert_eq!(result.full_category, "ADULTO / Médio");
/// ```
pub fn categorize(
    athlete: &AthleteInput,
    reference_year: i32,
    rules: &RuleSet,
) -> EngineResult<CategorizationResult> {
    categorize_with_audit(athlete, reference_year, rules).map(|audited| audited.result)
}

/// Categorizes an athlete and records every rule applied.
///
/// The audit trace holds four steps in order: `competitive_age`,
/// `age_division_lookup`, `weight_division_lookup` and `category_label`.
pub fn categorize_with_audit(
    athlete: &AthleteInput,
    reference_year: i32,
    rules: &RuleSet,
) -> EngineResult<AuditedCategorization> {
    athlete.validate()?;

    let mut steps = Vec::with_capacity(4);

    let age = calculate_competitive_age(athlete.birth_date, reference_year, 1)?;
    steps.push(age.audit_step);

    let age_division = resolve_age_division(age.competitive_age, rules.age_divisions(), 2)?;
    steps.push(age_division.audit_step);

    let weight_division = resolve_weight_division(
        athlete.weight,
        athlete.gender,
        &age_division.division.name,
        rules.weight_tables(),
        3,
    )?;
    steps.push(weight_division.audit_step);

    let result = CategorizationResult::new(
        age.competitive_age,
        age_division.division.name,
        weight_division.class.name,
        rules.label_separator(),
    );
    steps.push(label_step(&result, rules.label_separator(), 4));

    debug!(
        birth_date = %athlete.birth_date,
        gender = %athlete.gender,
        weight = %athlete.weight,
        reference_year,
        competitive_age = result.competitive_age,
        category = %result.full_category,
        "Athlete categorized"
    );

    Ok(AuditedCategorization {
        result,
        audit_trace: AuditTrace {
            ruleset_code: rules.metadata().code.clone(),
            ruleset_version: rules.metadata().version.clone(),
            steps,
        },
    })
}

fn label_step(result: &CategorizationResult, separator: &str, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "category_label".to_string(),
        rule_name: "Full Category Label".to_string(),
        rule_ref: "label_separator".to_string(),
        input: serde_json::json!({
            "age_category": result.age_category,
            "weight_category": result.weight_category,
            "separator": separator
        }),
        output: serde_json::json!({
            "full_category": result.full_category
        }),
        reasoning: format!("Joined age and weight category as '{}'", result.full_category),
    }
}

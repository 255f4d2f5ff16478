//! Age division lookup.

use crate::config::AgeDivisionRule;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of an age division lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct AgeDivisionResult {
    /// The matching age division.
    pub division: AgeDivisionRule,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Finds the age division containing a competitive age.
///
/// Scans `divisions` in order and returns the first one whose inclusive
/// range contains the age. A validated rule set always matches; if nothing
/// matches the table is defective and `NoAgeDivision` is returned instead
/// of a fallback division.
///
/// # Examples
///
/// ```
/// use category_engine::calculation::resolve_age_division;
/// use category_engine::config::AgeDivisionRule;
///
/// let divisions = vec![
///     AgeDivisionRule { name: "JUVENIL".to_string(), min_age: 0, max_age: Some(17) },
///     AgeDivisionRule { name: "ADULTO".to_string(), min_age: 18, max_age: None },
/// ];
///
/// let result = resolve_age_division(18, &divisions, 1).unwrap();
/// assert_eq!(result.division.name, "ADULTO");
/// ```
pub fn resolve_age_division(
    competitive_age: u32,
    divisions: &[AgeDivisionRule],
    step_number: u32,
) -> EngineResult<AgeDivisionResult> {
    let division = divisions
        .iter()
        .find(|d| d.contains(competitive_age))
        .ok_or(EngineError::NoAgeDivision { competitive_age })?;

    let range = match division.max_age {
        Some(max) => format!("{}..={}", division.min_age, max),
        None => format!("{}+", division.min_age),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "age_division_lookup".to_string(),
        rule_name: "Age Division Lookup".to_string(),
        rule_ref: division.name.clone(),
        input: serde_json::json!({
            "competitive_age": competitive_age
        }),
        output: serde_json::json!({
            "age_division": division.name,
            "min_age": division.min_age,
            "max_age": division.max_age
        }),
        reasoning: format!(
            "Competitive age {} falls in '{}' ({})",
            competitive_age, division.name, range
        ),
    };

    Ok(AgeDivisionResult {
        division: division.clone(),
        audit_step,
    })
}

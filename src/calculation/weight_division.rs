//! Weight division lookup.
//!
//! Weight classes are right-inclusive: an athlete weighing exactly a class
//! limit belongs to that class, not the next heavier one. Weights are
//! compared as exact decimals and never rounded.

use rust_decimal::Decimal;

use crate::config::{WeightClassRule, WeightTable, select_weight_table};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Gender};

/// The result of a weight division lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct WeightDivisionResult {
    /// The matching weight class.
    pub class: WeightClassRule,
    /// Zero-based position of the class in its table, lightest first.
    pub rank: usize,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Finds the weight class for a weight within a gender and age division.
///
/// The table is chosen with [`select_weight_table`]: a table naming the age
/// division explicitly wins over the gender's unscoped table. Within it the
/// first class whose limit is at or above `weight` is returned.
///
/// # Returns
///
/// Returns the weight class, or an error if:
/// - no table applies to the gender and age division (`NoWeightTable`)
/// - no class in the table accepts the weight (`NoWeightDivision`)
///
/// Both indicate a defective rule set.
///
/// # Examples
///
/// ```
/// use category_engine::calculation::resolve_weight_division;
/// use category_engine::config::{WeightClassRule, WeightTable};
/// use category_engine::models::Gender;
/// use rust_decimal::Decimal;
///
/// let tables = vec![WeightTable {
///     gender: Gender::Male,
///     age_divisions: None,
///     classes: vec![
///         WeightClassRule { name: "Leve".to_string(), max_weight: Some(Decimal::new(735, 1)) },
///         WeightClassRule { name: "Médio".to_string(), max_weight: Some(Decimal::new(795, 1)) },
///         WeightClassRule { name: "Pesado".to_string(), max_weight: None },
///     ],
/// }];
///
/// let result = resolve_weight_division(Decimal::new(795, 1), Gender::Male, "ADULTO", &tables, 1).unwrap();
/// assert_eq!(result.class.name, "Médio");
/// ```
pub fn resolve_weight_division(
    weight: Decimal,
    gender: Gender,
    age_division: &str,
    tables: &[WeightTable],
    step_number: u32,
) -> EngineResult<WeightDivisionResult> {
    let table = select_weight_table(tables, gender, age_division).ok_or_else(|| {
        EngineError::NoWeightTable {
            gender: gender.to_string(),
            age_division: age_division.to_string(),
        }
    })?;

    let (rank, class) = table
        .classes
        .iter()
        .enumerate()
        .find(|(_, c)| c.contains(weight))
        .ok_or_else(|| EngineError::NoWeightDivision {
            gender: gender.to_string(),
            age_division: age_division.to_string(),
            weight,
        })?;

    let reasoning = match class.max_weight {
        Some(max) => format!(
            "{} kg is at or under the '{}' limit of {} kg ({}, table [{}])",
            weight,
            class.name,
            max,
            gender,
            table.scope_label()
        ),
        None => format!(
            "{} kg exceeds every bounded class; open class '{}' ({}, table [{}])",
            weight,
            class.name,
            gender,
            table.scope_label()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weight_division_lookup".to_string(),
        rule_name: "Weight Division Lookup".to_string(),
        rule_ref: class.name.clone(),
        input: serde_json::json!({
            "weight": weight.to_string(),
            "gender": gender.as_str(),
            "age_division": age_division
        }),
        output: serde_json::json!({
            "weight_division": class.name,
            "max_weight": class.max_weight.map(|m| m.to_string()),
            "rank": rank,
            "table_scope": table.scope_label()
        }),
        reasoning,
    };

    Ok(WeightDivisionResult {
        class: class.clone(),
        rank,
        audit_step,
    })
}

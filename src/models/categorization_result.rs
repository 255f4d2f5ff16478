//! Categorization result models.
//!
//! This module contains the [`CategorizationResult`] value returned by the
//! engine and the audit structures that record how it was reached.

use serde::{Deserialize, Serialize};

/// The category an athlete falls into for a given competition year.
///
/// # Example
///
/// ```
/// use category_engine::models::CategorizationResult;
///
/// let result = CategorizationResult::new(18, "ADULTO", "Médio", " / ");
/// assert_eq!(result.full_category, "ADULTO / Médio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorizationResult {
    /// Reference year minus birth year.
    pub competitive_age: u32,
    /// The resolved age division name.
    pub age_category: String,
    /// The resolved weight class name.
    pub weight_category: String,
    /// Age and weight category joined by the rule set's separator.
    pub full_category: String,
}

impl CategorizationResult {
    /// Creates a result, deriving `full_category` from its parts.
    pub fn new(
        competitive_age: u32,
        age_category: impl Into<String>,
        weight_category: impl Into<String>,
        separator: &str,
    ) -> Self {
        let age_category = age_category.into();
        let weight_category = weight_category.into();
        let full_category = format_full_category(&age_category, &weight_category, separator);
        Self {
            competitive_age,
            age_category,
            weight_category,
            full_category,
        }
    }
}

/// Joins an age and a weight category into the composite label.
pub fn format_full_category(age_category: &str, weight_category: &str, separator: &str) -> String {
    format!("{age_category}{separator}{weight_category}")
}

/// A single step in the audit trace recording a categorization decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The rule table entry that decided this step (e.g. a division name).
    pub rule_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit steps of one categorization, tagged with the rule
/// set version they were judged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// Code of the rule set used.
    pub ruleset_code: String,
    /// Version of the rule set used.
    pub ruleset_version: String,
    /// The sequence of categorization steps.
    pub steps: Vec<AuditStep>,
}

/// A categorization together with its audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedCategorization {
    /// The categorization outcome.
    pub result: CategorizationResult,
    /// How the outcome was reached.
    pub audit_trace: AuditTrace,
}

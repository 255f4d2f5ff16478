//! Rule table types for categorization.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Gender;

use super::validation::validate_rule_set;

/// The separator used when a rule set does not configure one.
pub const DEFAULT_LABEL_SEPARATOR: &str = " / ";

fn default_label_separator() -> String {
    DEFAULT_LABEL_SEPARATOR.to_string()
}

/// Metadata about the rule set.
///
/// Identifies which federation's tables are in force and which revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// Short identifier (e.g., "ibjjf-nogi-2026").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the tables.
    pub version: String,
    /// URL of the governing rule document.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Text placed between age and weight category in the full label.
    #[serde(default = "default_label_separator")]
    pub label_separator: String,
}

/// A named bracket of competitive ages.
///
/// Both bounds are inclusive. `max_age: None` means unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDivisionRule {
    /// The division name (e.g., "ADULTO").
    pub name: String,
    /// Lowest competitive age in the division.
    pub min_age: u32,
    /// Highest competitive age in the division, if any.
    #[serde(default)]
    pub max_age: Option<u32>,
}

impl AgeDivisionRule {
    /// Returns true if the competitive age falls inside this division.
    ///
    /// # Example
    ///
    /// ```
    /// use category_engine::config::AgeDivisionRule;
    ///
    /// let juvenile = AgeDivisionRule {
    ///     name: "JUVENIL".to_string(),
    ///     min_age: 16,
    ///     max_age: Some(17),
    /// };
    /// assert!(juvenile.contains(17));
    /// assert!(!juvenile.contains(18));
    /// ```
    pub fn contains(&self, competitive_age: u32) -> bool {
        competitive_age >= self.min_age && self.max_age.is_none_or(|max| competitive_age <= max)
    }
}

/// A named weight class inside a [`WeightTable`].
///
/// The upper limit is inclusive. `max_weight: None` is the open class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightClassRule {
    /// The class name (e.g., "Médio").
    pub name: String,
    /// Heaviest weight, in kg, that still belongs to this class.
    #[serde(default)]
    pub max_weight: Option<Decimal>,
}

impl WeightClassRule {
    /// Returns true if the weight is at or under this class's limit.
    pub fn contains(&self, weight: Decimal) -> bool {
        self.max_weight.is_none_or(|max| weight <= max)
    }
}

/// An ascending partition of the weight axis for one gender and a set of
/// age divisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    /// The gender this table applies to.
    pub gender: Gender,
    /// Age divisions this table is scoped to. `None` applies to every
    /// division that has no explicitly scoped table.
    #[serde(default)]
    pub age_divisions: Option<Vec<String>>,
    /// Weight classes in ascending order of `max_weight`.
    pub classes: Vec<WeightClassRule>,
}

impl WeightTable {
    /// Returns true if this table has no age-division scope.
    pub fn is_wildcard(&self) -> bool {
        self.age_divisions.is_none()
    }

    /// Returns true if this table names the age division explicitly.
    pub fn names_division(&self, age_division: &str) -> bool {
        self.age_divisions
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == age_division))
    }

    /// Describes the table's scope for logs and error messages.
    pub fn scope_label(&self) -> String {
        match &self.age_divisions {
            Some(names) => names.join(", "),
            None => "*".to_string(),
        }
    }
}

/// Picks the weight table for a gender and resolved age division.
///
/// An explicitly scoped table wins over the gender's wildcard table.
pub fn select_weight_table<'a>(
    tables: &'a [WeightTable],
    gender: Gender,
    age_division: &str,
) -> Option<&'a WeightTable> {
    tables
        .iter()
        .find(|t| t.gender == gender && t.names_division(age_division))
        .or_else(|| {
            tables
                .iter()
                .find(|t| t.gender == gender && t.is_wildcard())
        })
}

/// Age divisions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AgeDivisionsConfig {
    /// Ordered age divisions, youngest first.
    pub age_divisions: Vec<AgeDivisionRule>,
}

/// Weight divisions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightDivisionsConfig {
    /// Weight tables by gender and age scope.
    pub weight_divisions: Vec<WeightTable>,
}

/// A complete, validated set of categorization rules.
///
/// A `RuleSet` can only be built through [`RuleSet::new`], which enforces
/// the partition invariants, so every instance is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Rule set metadata.
    metadata: RuleSetMetadata,
    /// Age divisions, youngest first.
    age_divisions: Vec<AgeDivisionRule>,
    /// Weight tables.
    weight_tables: Vec<WeightTable>,
}

impl RuleSet {
    /// Creates a rule set after checking every partition invariant.
    ///
    /// Returns `InvalidRuleSet` listing all problems found.
    pub fn new(
        metadata: RuleSetMetadata,
        age_divisions: Vec<AgeDivisionRule>,
        weight_tables: Vec<WeightTable>,
    ) -> EngineResult<Self> {
        let report = validate_rule_set(&metadata, &age_divisions, &weight_tables);
        if !report.is_valid() {
            return Err(EngineError::InvalidRuleSet {
                ruleset: metadata.code.clone(),
                message: report.errors.join("; "),
            });
        }

        Ok(Self {
            metadata,
            age_divisions,
            weight_tables,
        })
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.metadata
    }

    /// Returns the age divisions, youngest first.
    pub fn age_divisions(&self) -> &[AgeDivisionRule] {
        &self.age_divisions
    }

    /// Returns all weight tables.
    pub fn weight_tables(&self) -> &[WeightTable] {
        &self.weight_tables
    }

    /// Returns the full-label separator.
    pub fn label_separator(&self) -> &str {
        &self.metadata.label_separator
    }

    /// Looks up an age division by name.
    pub fn age_division(&self, name: &str) -> Option<&AgeDivisionRule> {
        self.age_divisions.iter().find(|d| d.name == name)
    }

    /// Returns the weight table that applies to a gender and age division.
    pub fn weight_table_for(&self, gender: Gender, age_division: &str) -> Option<&WeightTable> {
        select_weight_table(&self.weight_tables, gender, age_division)
    }
}

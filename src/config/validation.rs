//! Partition checks for rule tables.
//!
//! Age divisions must cover every competitive age exactly once, and every
//! gender/age-division pair must resolve to exactly one ascending weight
//! table whose last class is open.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::Gender;

use super::types::{AgeDivisionRule, RuleSetMetadata, WeightTable};

/// The outcome of validating a rule set.
///
/// `errors` make the rule set unusable; `warnings` do not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Invariant violations.
    pub errors: Vec<String>,
    /// Non-fatal observations.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Returns true when no invariant is violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a rule set's tables without building it.
///
/// Collects every problem rather than stopping at the first one, so an
/// operator can fix a table in one pass.
pub fn validate_rule_set(
    metadata: &RuleSetMetadata,
    age_divisions: &[AgeDivisionRule],
    weight_tables: &[WeightTable],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if metadata.code.trim().is_empty() {
        report.errors.push("Rule set code is required".to_string());
    }
    if metadata.version.trim().is_empty() {
        report
            .errors
            .push("Rule set version is required".to_string());
    }
    if metadata.source_url.is_none() {
        report
            .warnings
            .push("Rule set source URL is not specified".to_string());
    }

    validate_age_divisions(age_divisions, &mut report);
    for table in weight_tables {
        validate_weight_table(table, &mut report);
    }
    validate_weight_coverage(age_divisions, weight_tables, &mut report);

    report
}

fn validate_age_divisions(divisions: &[AgeDivisionRule], report: &mut ValidationReport) {
    let Some(first) = divisions.first() else {
        report
            .errors
            .push("At least one age division is required".to_string());
        return;
    };

    if first.min_age != 0 {
        report.errors.push(format!(
            "First age division '{}' starts at {} instead of 0",
            first.name, first.min_age
        ));
    }

    let mut names = HashSet::new();
    for division in divisions {
        if division.name.trim().is_empty() {
            report
                .errors
                .push("Age division name cannot be empty".to_string());
        } else if !names.insert(division.name.as_str()) {
            report
                .errors
                .push(format!("Duplicate age division '{}'", division.name));
        }
        if let Some(max) = division.max_age {
            if max < division.min_age {
                report.errors.push(format!(
                    "Age division '{}' has max_age {} below min_age {}",
                    division.name, max, division.min_age
                ));
            }
        }
    }

    for pair in divisions.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        match prev.max_age {
            None => report.errors.push(format!(
                "Unbounded age division '{}' must be the last one",
                prev.name
            )),
            Some(max) => {
                let Some(expected) = max.checked_add(1) else {
                    report.errors.push(format!(
                        "Age division '{}' reaches the largest representable age; \
                         use an unbounded max_age instead of following it with '{}'",
                        prev.name, next.name
                    ));
                    continue;
                };
                if next.min_age > expected {
                    report.errors.push(format!(
                        "Gap in age divisions: ages {}..={} between '{}' and '{}' are uncovered",
                        expected,
                        next.min_age - 1,
                        prev.name,
                        next.name
                    ));
                } else if next.min_age < expected {
                    report.errors.push(format!(
                        "Age divisions '{}' and '{}' overlap at age {}",
                        prev.name, next.name, next.min_age
                    ));
                }
            }
        }
    }

    if let Some(last) = divisions.last() {
        if last.max_age.is_some() {
            report.errors.push(format!(
                "Last age division '{}' must be unbounded",
                last.name
            ));
        }
    }
}

fn validate_weight_table(table: &WeightTable, report: &mut ValidationReport) {
    let scope = table.scope_label();

    if let Some(names) = &table.age_divisions {
        if names.is_empty() {
            report.errors.push(format!(
                "Weight table for {} has an empty age division scope",
                table.gender
            ));
        }
    }

    let Some((last, bounded)) = table.classes.split_last() else {
        report.errors.push(format!(
            "Weight table for {} [{}] has no classes",
            table.gender, scope
        ));
        return;
    };

    let mut names = HashSet::new();
    for class in &table.classes {
        if class.name.trim().is_empty() {
            report.errors.push(format!(
                "Weight table for {} [{}] has a class with an empty name",
                table.gender, scope
            ));
        } else if !names.insert(class.name.as_str()) {
            report.errors.push(format!(
                "Weight table for {} [{}] repeats class '{}'",
                table.gender, scope, class.name
            ));
        }
    }

    let mut previous: Option<Decimal> = None;
    for class in bounded {
        match class.max_weight {
            None => report.errors.push(format!(
                "Open class '{}' must be the last class for {} [{}]",
                class.name, table.gender, scope
            )),
            Some(max) if max <= Decimal::ZERO => report.errors.push(format!(
                "Class '{}' for {} [{}] has non-positive limit {}",
                class.name, table.gender, scope, max
            )),
            Some(max) => {
                if let Some(prev) = previous {
                    if max <= prev {
                        report.errors.push(format!(
                            "Class '{}' for {} [{}] limit {} is not above previous limit {}",
                            class.name, table.gender, scope, max, prev
                        ));
                    }
                }
                previous = Some(max);
            }
        }
    }

    if last.max_weight.is_some() {
        report.errors.push(format!(
            "Last class '{}' for {} [{}] must be open (no max_weight)",
            last.name, table.gender, scope
        ));
    }
}

fn validate_weight_coverage(
    divisions: &[AgeDivisionRule],
    tables: &[WeightTable],
    report: &mut ValidationReport,
) {
    let known: HashSet<&str> = divisions.iter().map(|d| d.name.as_str()).collect();

    for gender in Gender::ALL {
        let mut claimed: HashMap<&str, usize> = HashMap::new();
        let mut wildcards = 0;

        for table in tables.iter().filter(|t| t.gender == gender) {
            match &table.age_divisions {
                None => wildcards += 1,
                Some(names) => {
                    for name in names {
                        if !known.contains(name.as_str()) {
                            report.errors.push(format!(
                                "Weight table for {} references unknown age division '{}'",
                                gender, name
                            ));
                        }
                        *claimed.entry(name.as_str()).or_default() += 1;
                    }
                }
            }
        }

        if wildcards > 1 {
            report.errors.push(format!(
                "{} has {} unscoped weight tables; at most one is allowed",
                gender, wildcards
            ));
        }

        let mut duplicated: Vec<_> = claimed
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(name, _)| *name)
            .collect();
        duplicated.sort_unstable();
        for name in duplicated {
            report.errors.push(format!(
                "Age division '{}' is claimed by more than one weight table for {}",
                name, gender
            ));
        }

        if wildcards == 0 {
            for division in divisions {
                if !claimed.contains_key(division.name.as_str()) {
                    report.errors.push(format!(
                        "No weight table covers {} in age division '{}'",
                        gender, division.name
                    ));
                }
            }
        }
    }
}

//! Batch categorization of a roster.
//!
//! Each athlete is categorized independently against one rule set, so a
//! bad entry never affects the others and the whole batch is judged under
//! a single rule version.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{RuleSet, RuleStore};
use crate::error::{EngineError, EngineResult};
use crate::models::{AthleteInput, CategorizationResult};

use super::categorize::categorize;

/// Rosters larger than this are categorized in parallel.
pub const PARALLEL_ROSTER_THRESHOLD: usize = 64;

/// One athlete on a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Caller-assigned identifier (e.g., a profile id).
    pub athlete_id: String,
    /// The athlete's categorization inputs.
    #[serde(flatten)]
    pub athlete: AthleteInput,
}

/// The outcome for one roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterOutcome {
    /// The entry's identifier.
    pub athlete_id: String,
    /// The category, or why it could not be computed.
    pub result: EngineResult<CategorizationResult>,
}

/// The outcome of categorizing a whole roster.
#[derive(Debug, Clone)]
pub struct RosterReport {
    /// Identifier of this run, for correlating log lines.
    pub run_id: Uuid,
    /// Code of the rule set the roster was judged against.
    pub ruleset_code: String,
    /// Version of the rule set the roster was judged against.
    pub ruleset_version: String,
    /// The competition year used.
    pub reference_year: i32,
    /// One outcome per entry, in input order.
    pub outcomes: Vec<RosterOutcome>,
}

impl RosterReport {
    /// Returns the successfully categorized athletes.
    pub fn successes(&self) -> impl Iterator<Item = (&str, &CategorizationResult)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(result) => Some((o.athlete_id.as_str(), result)),
            Err(_) => None,
        })
    }

    /// Returns the athletes that could not be categorized.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &EngineError)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(_) => None,
            Err(err) => Some((o.athlete_id.as_str(), err)),
        })
    }

    /// Groups athlete ids by full category, in category order.
    ///
    /// Ids keep roster order within each category. Failed entries are
    /// left out.
    pub fn by_category(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (athlete_id, result) in self.successes() {
            groups
                .entry(result.full_category.clone())
                .or_default()
                .push(athlete_id.to_string());
        }
        groups
    }
}

/// Categorizes every athlete on a roster against one rule set.
///
/// Outcomes are returned in input order. Rosters above
/// [`PARALLEL_ROSTER_THRESHOLD`] entries are processed on the rayon pool.
pub fn categorize_roster(
    entries: &[RosterEntry],
    reference_year: i32,
    rules: &RuleSet,
) -> RosterReport {
    let run_id = Uuid::new_v4();
    let start_time = Instant::now();

    let categorize_entry = |entry: &RosterEntry| {
        let result = categorize(&entry.athlete, reference_year, rules);
        if let Err(err) = &result {
            warn!(
                run_id = %run_id,
                athlete_id = %entry.athlete_id,
                error = %err,
                configuration = err.is_configuration_error(),
                "Athlete could not be categorized"
            );
        }
        RosterOutcome {
            athlete_id: entry.athlete_id.clone(),
            result,
        }
    };

    let outcomes: Vec<RosterOutcome> = if entries.len() > PARALLEL_ROSTER_THRESHOLD {
        entries.par_iter().map(categorize_entry).collect()
    } else {
        entries.iter().map(categorize_entry).collect()
    };

    let report = RosterReport {
        run_id,
        ruleset_code: rules.metadata().code.clone(),
        ruleset_version: rules.metadata().version.clone(),
        reference_year,
        outcomes,
    };

    info!(
        run_id = %run_id,
        ruleset = %report.ruleset_code,
        version = %report.ruleset_version,
        reference_year,
        athletes = entries.len(),
        failures = report.failures().count(),
        duration_us = start_time.elapsed().as_micros() as u64,
        "Roster categorized"
    );

    report
}

impl RuleStore {
    /// Categorizes a roster against the rule set in force when the call
    /// starts. A concurrent reload does not affect this batch.
    pub fn categorize_roster(&self, entries: &[RosterEntry], reference_year: i32) -> RosterReport {
        let rules = self.snapshot();
        categorize_roster(entries, reference_year, &rules)
    }
}

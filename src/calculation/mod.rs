//! Categorization logic for the engine.
//!
//! This module contains the competitive age calculation, the age and weight
//! division lookups, the composite categorization built from them, roster
//! batch categorization, and registration verification.

mod age_division;
mod categorize;
mod competitive_age;
mod registration;
mod roster;
mod weight_division;

pub use age_division::{AgeDivisionResult, resolve_age_division};
pub use categorize::{categorize, categorize_with_audit};
pub use competitive_age::{
    CompetitiveAgeResult, MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR, calculate_competitive_age,
};
pub use registration::{RegistrationCheck, RegistrationStatus, verify_registration};
pub use roster::{
    PARALLEL_ROSTER_THRESHOLD, RosterEntry, RosterOutcome, RosterReport, categorize_roster,
};
pub use weight_division::{WeightDivisionResult, resolve_weight_division};

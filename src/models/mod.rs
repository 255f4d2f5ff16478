//! Core data models for the categorization engine.
//!
//! This module contains the value types passed into and returned from the engine.

mod athlete;
mod categorization_result;

pub use athlete::{AthleteInput, Gender};
pub use categorization_result::{
    AuditStep, AuditTrace, AuditedCategorization, CategorizationResult, format_full_category,
};

//! Error types for the categorization engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every error belongs to one of two kinds: bad athlete data
//! ([`ErrorKind::InvalidInput`]) or a defect in the deployed rule tables
//! ([`ErrorKind::Configuration`]).

use rust_decimal::Decimal;
use thiserror::Error;

/// The broad class of an [`EngineError`].
///
/// Operators use this to tell "bad data" apart from "bad rules".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied malformed or out-of-range athlete data.
    InvalidInput,
    /// The rule set is missing, unreadable, or violates its partition invariants.
    Configuration,
}

/// The main error type for the categorization engine.
///
/// # Example
///
/// ```
/// use category_engine::error::{EngineError, ErrorKind};
///
/// let error = EngineError::UnknownGender {
///     value: "x".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown gender: 'x'");
/// assert_eq!(error.kind(), ErrorKind::InvalidInput);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The rule tables violate the partition invariants.
    #[error("Invalid rule set '{ruleset}': {message}")]
    InvalidRuleSet {
        /// The code of the offending rule set.
        ruleset: String,
        /// Every problem found, joined with "; ".
        message: String,
    },

    /// No age division covers the competitive age.
    #[error("No age division covers competitive age {competitive_age}")]
    NoAgeDivision {
        /// The competitive age that fell through the table.
        competitive_age: u32,
    },

    /// No weight table is scoped to the gender and age division.
    #[error("No weight table for gender '{gender}' in age division '{age_division}'")]
    NoWeightTable {
        /// The athlete's gender.
        gender: String,
        /// The resolved age division.
        age_division: String,
    },

    /// No weight class in the selected table matched the weight.
    #[error("No weight division for {weight} kg ({gender}, {age_division})")]
    NoWeightDivision {
        /// The athlete's gender.
        gender: String,
        /// The resolved age division.
        age_division: String,
        /// The weight that fell through the table.
        weight: Decimal,
    },

    /// The birth date could not be parsed or is out of range.
    #[error("Invalid birth date '{value}': {message}")]
    InvalidBirthDate {
        /// The raw birth date value.
        value: String,
        /// A description of the problem.
        message: String,
    },

    /// The weight is malformed or not strictly positive.
    #[error("Invalid weight '{value}': {message}")]
    InvalidWeight {
        /// The raw weight value.
        value: String,
        /// A description of the problem.
        message: String,
    },

    /// The gender value is not one of the recognized spellings.
    #[error("Unknown gender: '{value}'")]
    UnknownGender {
        /// The raw gender value.
        value: String,
    },

    /// The reference year is not a 4-digit year.
    #[error("Invalid reference year {year}: must be a 4-digit year")]
    InvalidReferenceYear {
        /// The rejected year.
        year: i32,
    },

    /// The athlete was born after the reference year.
    #[error("Birth year {birth_year} is after reference year {reference_year}")]
    BirthAfterReferenceYear {
        /// The athlete's birth year.
        birth_year: i32,
        /// The competition year.
        reference_year: i32,
    },
}

impl EngineError {
    /// Returns whether this error is bad input or bad configuration.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRuleSet { .. }
            | EngineError::NoAgeDivision { .. }
            | EngineError::NoWeightTable { .. }
            | EngineError::NoWeightDivision { .. } => ErrorKind::Configuration,
            EngineError::InvalidBirthDate { .. }
            | EngineError::InvalidWeight { .. }
            | EngineError::UnknownGender { .. }
            | EngineError::InvalidReferenceYear { .. }
            | EngineError::BirthAfterReferenceYear { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Returns true if the caller supplied bad athlete data.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Returns true if the rule set is at fault.
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Athlete model and related types.
//!
//! This module defines the [`AthleteInput`] value handed to the engine and
//! the [`Gender`] enum that scopes weight tables.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// The competition gender of an athlete.
///
/// Parsing accepts English and Portuguese spellings, case-insensitively.
/// Any other value is rejected rather than defaulted.
///
/// # Example
///
/// ```
/// use category_engine::models::Gender;
///
/// assert_eq!("Masculino".parse::<Gender>().unwrap(), Gender::Male);
/// assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
/// assert!("x".parse::<Gender>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male division.
    Male,
    /// Female division.
    Female,
}

impl Gender {
    /// Every recognized gender, in a stable order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the lowercase identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "masculino" => Ok(Gender::Male),
            "female" | "feminino" => Ok(Gender::Female),
            _ => Err(EngineError::UnknownGender {
                value: s.to_string(),
            }),
        }
    }
}

// Same spellings as `FromStr`.
impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The athlete data the engine categorizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteInput {
    /// The athlete's date of birth. Only the year affects categorization.
    pub birth_date: NaiveDate,
    /// The athlete's competition gender.
    pub gender: Gender,
    /// Body weight in kilograms.
    pub weight: Decimal,
}

impl AthleteInput {
    /// Builds an athlete from raw caller strings.
    ///
    /// `birth_date` must be `YYYY-MM-DD`, `gender` one of the spellings
    /// [`Gender`] accepts, and `weight` a decimal number of kilograms.
    ///
    /// # Example
    ///
    /// ```
    /// use category_engine::models::{AthleteInput, Gender};
    /// use rust_decimal::Decimal;
    ///
    /// let athlete = AthleteInput::parse("2008-12-31", "Masculino", "74.5").unwrap();
    /// assert_eq!(athlete.gender, Gender::Male);
    /// assert_eq!(athlete.weight, Decimal::new(745, 1));
    /// ```
    pub fn parse(birth_date: &str, gender: &str, weight: &str) -> EngineResult<Self> {
        let birth_date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").map_err(|e| {
            EngineError::InvalidBirthDate {
                value: birth_date.to_string(),
                message: e.to_string(),
            }
        })?;
        let gender = gender.parse::<Gender>()?;
        let weight = Decimal::from_str(weight.trim()).map_err(|e| EngineError::InvalidWeight {
            value: weight.to_string(),
            message: e.to_string(),
        })?;

        let athlete = Self {
            birth_date,
            gender,
            weight,
        };
        athlete.validate()?;
        Ok(athlete)
    }

    /// Checks the invariants that do not depend on the competition year.
    pub fn validate(&self) -> EngineResult<()> {
        if self.weight <= Decimal::ZERO {
            return Err(EngineError::InvalidWeight {
                value: self.weight.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

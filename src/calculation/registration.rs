//! Registration verification.
//!
//! A registration declares the category an athlete will compete in. At
//! sign-up, and again at weigh-in with the measured weight, the engine
//! recomputes the category and compares it with the declaration.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RuleSet;
use crate::error::EngineResult;
use crate::models::{AthleteInput, CategorizationResult};

use super::categorize::categorize;

/// The lifecycle status of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Registered but not yet verified.
    Pending,
    /// The declared category matches the computed one.
    Confirmed,
    /// The declared category does not match the computed one.
    Disqualified,
}

/// The outcome of verifying a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCheck {
    /// `Confirmed` or `Disqualified`.
    pub status: RegistrationStatus,
    /// The category the athlete registered for.
    pub declared_category: String,
    /// The category the engine computed.
    pub computed: CategorizationResult,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

impl RegistrationCheck {
    /// Returns true if the registration was confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.status == RegistrationStatus::Confirmed
    }
}

/// Verifies a declared category against the athlete's computed category.
///
/// The declaration matches when it equals the computed full category after
/// trimming surrounding whitespace. Invalid athlete data and rule set
/// defects are returned as errors, never as a status.
///
/// # Examples
///
/// ```no_run
/// use category_engine::calculation::{RegistrationStatus, verify_registration};
/// use category_engine::config::ConfigLoader;
/// use category_engine::models::AthleteInput;
///
/// let loader = ConfigLoader::load("./config/ibjjf-nogi-2026").unwrap();
/// let weigh_in = AthleteInput::parse("2008-12-31", "male", "80.1").unwrap();
///
/// let check = verify_registration("ADULTO / Médio", &weigh_in, 2026, loader.rules()).unwrap();
/// assert_eq!(check.status, RegistrationStatus::Disqualified);
/// ```
pub fn verify_registration(
    declared_category: &str,
    athlete: &AthleteInput,
    reference_year: i32,
    rules: &RuleSet,
) -> EngineResult<RegistrationCheck> {
    let computed = categorize(athlete, reference_year, rules)?;
    let declared = declared_category.trim();

    let (status, reasoning) = if computed.full_category == declared {
        (
            RegistrationStatus::Confirmed,
            format!("Declared category '{}' matches", declared),
        )
    } else {
        (
            RegistrationStatus::Disqualified,
            format!(
                "Declared category '{}' but athlete categorizes as '{}'",
                declared, computed.full_category
            ),
        )
    };

    match status {
        RegistrationStatus::Confirmed => debug!(category = %declared, "Registration confirmed"),
        _ => info!(
            declared = %declared,
            computed = %computed.full_category,
            weight = %athlete.weight,
            "Registration category mismatch"
        ),
    }

    Ok(RegistrationCheck {
        status,
        declared_category: declared.to_string(),
        computed,
        reasoning,
    })
}

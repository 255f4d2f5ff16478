//! Rule set configuration for the categorization engine.
//!
//! This module loads age and weight division tables from YAML files,
//! validates that they partition their axes, and holds the active rule set
//! for concurrent readers.
//!
//! # Example
//!
//! ```no_run
//! use category_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ibjjf-nogi-2026").unwrap();
//! println!("Loaded rule set: {}", config.metadata().name);
//! ```

mod loader;
mod store;
mod types;
mod validation;

pub use loader::ConfigLoader;
pub use store::RuleStore;
pub use types::{
    AgeDivisionRule, AgeDivisionsConfig, DEFAULT_LABEL_SEPARATOR, RuleSet, RuleSetMetadata,
    WeightClassRule, WeightDivisionsConfig, WeightTable, select_weight_table,
};
pub use validation::{ValidationReport, validate_rule_set};

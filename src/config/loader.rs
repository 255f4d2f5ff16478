//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule sets
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Gender;

use super::types::{
    AgeDivisionRule, AgeDivisionsConfig, RuleSet, RuleSetMetadata, WeightDivisionsConfig,
    WeightTable,
};

/// Loads and provides access to a categorization rule set.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ibjjf-nogi-2026/
/// ├── ruleset.yaml          # Rule set metadata and label separator
/// ├── age_divisions.yaml    # Ordered age divisions, youngest first
/// └── weight_divisions.yaml # Weight tables by gender and age scope
/// ```
///
/// # Example
///
/// ```no_run
/// use category_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ibjjf-nogi-2026").unwrap();
/// println!("Loaded rule set: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: RuleSet,
}

impl ConfigLoader {
    /// Loads and validates a rule set from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The tables violate the partition invariants (`InvalidRuleSet`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RuleSetMetadata>(&path.join("ruleset.yaml"))?;
        let ages = Self::load_yaml::<AgeDivisionsConfig>(&path.join("age_divisions.yaml"))?;
        let weights =
            Self::load_yaml::<WeightDivisionsConfig>(&path.join("weight_divisions.yaml"))?;

        let rules = RuleSet::new(metadata, ages.age_divisions, weights.weight_divisions)?;
        debug!(
            ruleset = %rules.metadata().code,
            version = %rules.metadata().version,
            age_divisions = rules.age_divisions().len(),
            weight_tables = rules.weight_tables().len(),
            "Loaded rule set"
        );

        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Consumes the loader, returning the rule set.
    pub fn into_rules(self) -> RuleSet {
        self.rules
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        self.rules.metadata()
    }

    /// Gets an age division by its name.
    pub fn get_age_division(&self, name: &str) -> Option<&AgeDivisionRule> {
        self.rules.age_division(name)
    }

    /// Gets the weight table that applies to a gender and age division.
    pub fn get_weight_table(&self, gender: Gender, age_division: &str) -> Option<&WeightTable> {
        self.rules.weight_table_for(gender, age_division)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ibjjf-nogi-2026"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "category-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::copy(
            Path::new(config_path()).join("ruleset.yaml"),
            dir.join("ruleset.yaml"),
        )
        .unwrap();
        fs::copy(
            Path::new(config_path()).join("weight_divisions.yaml"),
            dir.join("weight_divisions.yaml"),
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "ibjjf-nogi-2026");
        assert_eq!(loader.metadata().label_separator, " / ");
    }

    #[test]
    fn test_age_divisions_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let names: Vec<&str> = loader
            .rules()
            .age_divisions()
            .iter()
            .map(|d| d.name.as_str())
            .collect();

        assert_eq!(names.first(), Some(&"PRÉ-MIRIM"));
        assert_eq!(names.last(), Some(&"MASTER 7"));
        assert!(names.contains(&"ADULTO"));
    }

    #[test]
    fn test_get_age_division() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let adult = loader.get_age_division("ADULTO").unwrap();
        assert_eq!(adult.min_age, 18);
        assert_eq!(adult.max_age, Some(29));
        assert!(loader.get_age_division("unknown").is_none());
    }

    #[test]
    fn test_get_weight_table_for_adult_male() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let table = loader.get_weight_table(Gender::Male, "ADULTO").unwrap();
        let medio = table.classes.iter().find(|c| c.name == "Médio").unwrap();
        assert_eq!(medio.max_weight, Some(dec("79.5")));
        assert_eq!(table.classes.last().unwrap().max_weight, None);
    }

    #[test]
    fn test_juvenile_has_its_own_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let juvenile = loader.get_weight_table(Gender::Female, "JUVENIL").unwrap();
        let adult = loader.get_weight_table(Gender::Female, "ADULTO").unwrap();
        assert_ne!(juvenile, adult);
        assert!(adult.is_wildcard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("ruleset.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("age_divisions.yaml"), "age_divisions: [name: ").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("age_divisions.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_in_age_table_rejected_on_load() {
        let dir = scratch_dir("gap");
        fs::write(
            dir.join("age_divisions.yaml"),
            r#"
age_divisions:
  - name: PRÉ-MIRIM
    min_age: 0
    max_age: 5
  - name: ADULTO
    min_age: 18
"#,
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::InvalidRuleSet { ruleset, message }) => {
                assert_eq!(ruleset, "ibjjf-nogi-2026");
                assert!(message.contains("Gap in age divisions"), "{message}");
            }
            other => panic!("Expected InvalidRuleSet, got {:?}", other),
        }
    }
}

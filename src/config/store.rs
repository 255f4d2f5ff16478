//! Shared, swappable holder of the active rule set.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::error::EngineResult;

use super::loader::ConfigLoader;
use super::types::RuleSet;

/// Holds the rule set currently in force.
///
/// Readers take an [`Arc`] snapshot and keep using it even if the rules
/// are replaced afterwards, so a batch started under one version finishes
/// under that version.
///
/// # Example
///
/// ```no_run
/// use category_engine::config::{ConfigLoader, RuleStore};
///
/// let loader = ConfigLoader::load("./config/ibjjf-nogi-2026").unwrap();
/// let store = RuleStore::new(loader.into_rules());
/// let rules = store.snapshot();
/// println!("Using {}", rules.metadata().version);
/// ```
#[derive(Debug)]
pub struct RuleStore {
    current: RwLock<Arc<RuleSet>>,
}

impl RuleStore {
    /// Creates a store holding the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rules)),
        }
    }

    /// Returns the rule set currently in force.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        // Writers only swap the Arc, so a poisoned lock still holds a complete rule set.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Installs a new rule set, returning the previous one.
    pub fn replace(&self, rules: RuleSet) -> Arc<RuleSet> {
        self.install(Arc::new(rules))
    }

    fn install(&self, next: Arc<RuleSet>) -> Arc<RuleSet> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        info!(
            from = %guard.metadata().version,
            to = %next.metadata().version,
            ruleset = %next.metadata().code,
            "Replacing rule set"
        );
        std::mem::replace(&mut *guard, next)
    }

    /// Loads a rule set from disk and installs it.
    ///
    /// If loading or validation fails the current rules stay in force.
    pub fn reload<P: AsRef<Path>>(&self, path: P) -> EngineResult<Arc<RuleSet>> {
        match ConfigLoader::load(path.as_ref()) {
            Ok(loader) => {
                let installed = Arc::new(loader.into_rules());
                self.install(Arc::clone(&installed));
                Ok(installed)
            }
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    error = %err,
                    "Rule set reload failed; keeping current rules"
                );
                Err(err)
            }
        }
    }
}

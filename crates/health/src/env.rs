use std::collections::HashMap;
use std::sync::Arc;

use common::env_keys;

use crate::report::EnvironmentCheck;

/// Read-only source of configuration values.
///
/// The validator reads only through this seam, so the check itself is pure
/// and tests never mutate process-global state.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Presence check for the fixed set of required configuration keys.
///
/// A key counts as configured only when it resolves to a non-empty string.
pub struct EnvValidator {
    required: Vec<String>,
    source: Arc<dyn EnvSource>,
}

impl EnvValidator {
    /// Validates the standard required set against the process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }

    /// Validates the standard required set against the given source.
    pub fn with_source(source: impl EnvSource + 'static) -> Self {
        Self {
            required: env_keys::REQUIRED.iter().map(|k| (*k).to_string()).collect(),
            source: Arc::new(source),
        }
    }

    /// Replaces the required key set. Test seam.
    pub fn required_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Counts configured keys and reports healthy only when all required
    /// keys are present and non-empty. `configured <= required` holds by
    /// construction.
    pub fn check(&self) -> EnvironmentCheck {
        let configured = self
            .required
            .iter()
            .filter(|key| self.source.get(key).is_some_and(|value| !value.is_empty()))
            .count();
        let required = self.required.len();

        EnvironmentCheck {
            status: (configured == required).into(),
            required_vars: required,
            configured_vars: configured,
        }
    }
}

impl Default for EnvValidator {
    fn default() -> Self {
        Self::new()
    }
}

//! Typeahead configuration.
//!
//! A [`TypeaheadConfig`] can be built in code or read from TOML. Every field
//! is optional in the file:
//!
//! ```toml
//! case_sensitivity = "case_insensitive"
//! stale_completions = "matching_value"
//! initial_value = "ber"
//! candidates = ["Berlin", { value = "Bern", country = "CH" }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_typeahead_core::logging::targets;

use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::model::CaseSensitivity;
use crate::source::StaleCompletionPolicy;

/// Settings applied to a [`Typeahead`](crate::Typeahead).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeaheadConfig {
    /// How the auto-mode prefix filter treats letter case.
    pub case_sensitivity: CaseSensitivity,
    /// Which manual-mode completions may update the list.
    pub stale_completions: StaleCompletionPolicy,
    /// Initial input text. Only honored in manual mode.
    pub initial_value: Option<String>,
    /// Static candidate list for auto mode.
    pub candidates: Vec<Candidate>,
}

impl TypeaheadConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            candidates = config.candidates.len(),
            "loaded typeahead config"
        );
        Ok(config)
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitivity(mut self, sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = sensitivity;
        self
    }

    /// Set the stale-completion policy using builder pattern.
    pub fn with_stale_completions(mut self, policy: StaleCompletionPolicy) -> Self {
        self.stale_completions = policy;
        self
    }

    /// Set the static candidate list using builder pattern.
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }
}

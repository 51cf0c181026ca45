//! Harness configuration
//!
//! Values come from an optional YAML file, then `WORBLEHAT_*` environment
//! variables, then command line flags, each layer overriding the previous.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::compare::BlankPolicy;
use crate::error::{VerifyError, VerifyResult};

pub const ENV_SCENARIOS: &str = "WORBLEHAT_SCENARIOS";
pub const ENV_SNAPSHOT: &str = "WORBLEHAT_SNAPSHOT";
pub const ENV_BLANK_BORROWER: &str = "WORBLEHAT_BLANK_BORROWER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Directory searched for scenario files
    pub scenarios_dir: PathBuf,

    /// Recorded page renders replayed by the runner
    pub snapshot: PathBuf,

    /// Canonical catalog records; the demo book when unset
    pub catalog: Option<PathBuf>,

    /// Output directory for results
    pub output_dir: PathBuf,

    /// Whether a whitespace-only borrower cell counts as "not borrowed"
    pub blank_borrower: BlankPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenarios_dir: PathBuf::from("tests/scenarios"),
            snapshot: PathBuf::from("tests/fixtures/booklist.yaml"),
            catalog: None,
            output_dir: PathBuf::from("test-results"),
            blank_borrower: BlankPolicy::default(),
        }
    }
}

impl HarnessConfig {
    pub fn from_yaml(yaml: &str) -> VerifyResult<Self> {
        serde_yaml::from_str(yaml).map_err(VerifyError::from)
    }

    pub fn from_file(path: &Path) -> VerifyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply `WORBLEHAT_*` variables from the process environment.
    pub fn apply_env(&mut self) -> VerifyResult<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> VerifyResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_SCENARIOS) {
            self.scenarios_dir = PathBuf::from(dir);
        }
        if let Some(snapshot) = lookup(ENV_SNAPSHOT) {
            self.snapshot = PathBuf::from(snapshot);
        }
        if let Some(policy) = lookup(ENV_BLANK_BORROWER) {
            self.blank_borrower = BlankPolicy::from_str(&policy, true).map_err(|_| {
                VerifyError::Config(format!(
                    "{} must be empty_only or trim_whitespace, got {:?}",
                    ENV_BLANK_BORROWER, policy
                ))
            })?;
        }
        Ok(())
    }
}

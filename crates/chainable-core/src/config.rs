//! Chain configuration
//!
//! Options are loaded from, in increasing precedence:
//! - Default values
//! - JSON text (`ChainOptions::from_json`)
//! - Environment variables (`CHAINABLE_SCALAR_POLICY`)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable overriding [`ChainOptions::scalar_policy`]
pub const SCALAR_POLICY_ENV: &str = "CHAINABLE_SCALAR_POLICY";

/// What a chain does when its subject is neither a mapping nor a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarPolicy {
    /// Dispatch as a mapping and read it as an empty one
    #[default]
    TreatAsEmpty,
    /// Fail with `Error::ScalarRejected`
    Reject,
}

/// Options carried by every step of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainOptions {
    /// Handling of null and scalar subjects
    pub scalar_policy: ScalarPolicy,
}

impl ChainOptions {
    /// Options rejecting scalar subjects
    pub fn strict() -> Self {
        Self {
            scalar_policy: ScalarPolicy::Reject,
        }
    }

    /// Parse options from JSON text, missing fields take defaults
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let mut options = Self::default();
        options.merge_with_env()?;
        Ok(options)
    }

    /// Apply overrides from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(SCALAR_POLICY_ENV) {
            self.scalar_policy = policy.parse().map_err(|e: Error| Error::Configuration {
                message: format!("{} is invalid", SCALAR_POLICY_ENV),
                source: Some(anyhow::Error::new(e)),
            })?;
        }
        Ok(())
    }
}

impl FromStr for ScalarPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "treat-as-empty" | "lenient" => Ok(ScalarPolicy::TreatAsEmpty),
            "reject" | "strict" => Ok(ScalarPolicy::Reject),
            other => Err(Error::configuration(format!(
                "unknown scalar policy '{}', expected treat-as-empty or reject",
                other
            ))),
        }
    }
}

impl fmt::Display for ScalarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarPolicy::TreatAsEmpty => write!(f, "treat-as-empty"),
            ScalarPolicy::Reject => write!(f, "reject"),
        }
    }
}

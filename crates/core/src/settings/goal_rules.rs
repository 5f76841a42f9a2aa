//! Tunable rules for goal evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ACHIEVEMENT_THRESHOLD, DEFAULT_NEAR_DEADLINE_DAYS, ENV_ACHIEVEMENT_THRESHOLD,
    ENV_NEAR_DEADLINE_DAYS,
};
use crate::errors::{Error, Result};

/// Thresholds used by the goal evaluator.
///
/// Defaults reproduce the mirrored contract: a goal is achieved once savings
/// reach 80% of the target, and flagged as near its deadline within 7 days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalRules {
    pub achievement_threshold: Decimal,
    pub near_deadline_days: i64,
}

impl Default for GoalRules {
    fn default() -> Self {
        Self {
            achievement_threshold: DEFAULT_ACHIEVEMENT_THRESHOLD,
            near_deadline_days: DEFAULT_NEAR_DEADLINE_DAYS,
        }
    }
}

impl GoalRules {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rules = Self::default();

        if let Some(raw) = lookup(ENV_ACHIEVEMENT_THRESHOLD) {
            rules.achievement_threshold = Decimal::from_str(raw.trim()).map_err(|_| {
                Error::InvalidConfigValue(format!("{ENV_ACHIEVEMENT_THRESHOLD}='{raw}'"))
            })?;
        }
        if let Some(raw) = lookup(ENV_NEAR_DEADLINE_DAYS) {
            rules.near_deadline_days = raw.trim().parse().map_err(|_| {
                Error::InvalidConfigValue(format!("{ENV_NEAR_DEADLINE_DAYS}='{raw}'"))
            })?;
        }

        rules.validate()?;
        Ok(rules)
    }

    /// Parses rules from a JSON document, e.g. an application config file.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfigValue(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        if self.achievement_threshold <= Decimal::ZERO || self.achievement_threshold > Decimal::ONE
        {
            return Err(Error::InvalidConfigValue(format!(
                "achievement threshold must be in (0, 1], got {}",
                self.achievement_threshold
            )));
        }
        if self.near_deadline_days < 0 {
            return Err(Error::InvalidConfigValue(format!(
                "near-deadline window must not be negative, got {}",
                self.near_deadline_days
            )));
        }
        Ok(())
    }
}

//! Configuration system for Kingdom.
//!
//! Load process configuration from TOML or YAML files to control the
//! store namespace, the random seed and the reward defaults without code
//! changes. The store-side `settings/rewards` document overrides the
//! reward defaults at runtime; see [`RewardDefaults::resolve`].
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use kingdom_config::KingdomConfig;
//!
//! let config = KingdomConfig::from_toml_str(r#"
//!     app_id = "test-castle"
//!     random_seed = 7
//!
//!     [rewards]
//!     chores_per_coupon = 3
//! "#).unwrap();
//!
//! assert_eq!(config.app_id, "test-castle");
//! assert_eq!(config.rewards.chores_per_coupon, 3);
//! assert_eq!(config.rewards.chores_per_date_night, 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use kingdom_config::KingdomConfig;
//!
//! let config = KingdomConfig::load("kingdom.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use kingdom_core::{Participant, PerParticipant, RewardSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store namespace used when none is configured.
pub const DEFAULT_APP_ID: &str = "ducky-pips-v1";

/// Household deeds consumed per coupon.
pub const DEFAULT_CHORES_PER_COUPON: usize = 5;

/// Household deeds consumed per date night.
pub const DEFAULT_CHORES_PER_DATE_NIGHT: usize = 20;

/// Score lead needed before one partner reigns over the kingdom.
pub const DEFAULT_REIGN_MARGIN: usize = 5;

/// Stock coupon titles.
pub const DEFAULT_COUPONS: [&str; 10] = [
    "15 min Back Massage",
    "Homemade Dinner Choice",
    "Dish Duty Pass",
    "Movie Selection",
    "Breakfast in Bed",
    "Foot Massage",
    "Veto Power",
    "Ice Cream Run",
    "Bubble Bath Setup",
    "30 min Gaming Time",
];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct KingdomConfig {
    /// Namespace under which all collections live in the store.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Random seed for reproducible coupon and date-night draws.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Reward defaults.
    #[serde(default)]
    pub rewards: RewardDefaults,
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

impl Default for KingdomConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            random_seed: None,
            rewards: RewardDefaults::default(),
        }
    }
}

impl KingdomConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the store namespace.
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replaces the reward defaults.
    pub fn with_rewards(mut self, rewards: RewardDefaults) -> Self {
        self.rewards = rewards;
        self
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::Invalid("app_id must not be empty".to_string()));
        }
        self.rewards.validate()
    }
}

/// Process-level reward defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RewardDefaults {
    /// Household deeds consumed per coupon.
    pub chores_per_coupon: usize,

    /// Household deeds consumed per date night.
    pub chores_per_date_night: usize,

    /// Score lead needed before one partner reigns.
    pub reign_margin: usize,

    /// Coupon titles used when a partner has no pool of their own.
    pub default_pool: Vec<String>,
}

impl Default for RewardDefaults {
    fn default() -> Self {
        Self {
            chores_per_coupon: DEFAULT_CHORES_PER_COUPON,
            chores_per_date_night: DEFAULT_CHORES_PER_DATE_NIGHT,
            reign_margin: DEFAULT_REIGN_MARGIN,
            default_pool: DEFAULT_COUPONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RewardDefaults {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chores_per_coupon == 0 {
            return Err(ConfigError::Invalid(
                "rewards.chores_per_coupon must be positive".to_string(),
            ));
        }
        if self.chores_per_date_night == 0 {
            return Err(ConfigError::Invalid(
                "rewards.chores_per_date_night must be positive".to_string(),
            ));
        }
        if self.default_pool.is_empty() {
            return Err(ConfigError::Invalid(
                "rewards.default_pool must list at least one coupon".to_string(),
            ));
        }
        Ok(())
    }

    /// Merges the store-side reward settings over these defaults.
    ///
    /// A threshold that is absent or zero keeps the default. A pool that
    /// is absent or empty falls back to `default_pool`.
    pub fn resolve(&self, settings: Option<&RewardSettings>) -> RewardPolicy {
        let threshold = |stored: Option<u32>, fallback: usize| match stored {
            Some(n) if n > 0 => n as usize,
            _ => fallback,
        };

        let chores_per_coupon = threshold(
            settings.and_then(|s| s.chores_per_coupon),
            self.chores_per_coupon,
        );
        let chores_per_date_night = threshold(
            settings.and_then(|s| s.chores_per_date_night),
            self.chores_per_date_night,
        );
        let pools = PerParticipant::from_fn(|p: Participant| {
            settings
                .and_then(|s| s.pools.get(&p))
                .filter(|pool| !pool.is_empty())
                .cloned()
                .unwrap_or_else(|| self.default_pool.clone())
        });

        RewardPolicy {
            chores_per_coupon,
            chores_per_date_night,
            reign_margin: self.reign_margin,
            pools,
        }
    }
}

/// Effective reward rules after merging store settings over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardPolicy {
    pub chores_per_coupon: usize,
    pub chores_per_date_night: usize,
    pub reign_margin: usize,
    pub pools: PerParticipant<Vec<String>>,
}

impl RewardPolicy {
    /// Coupon titles a partner can win. Never empty when built by
    /// [`RewardDefaults::resolve`] from validated defaults.
    pub fn pool(&self, participant: Participant) -> &[String] {
        &self.pools[participant]
    }
}

impl Default for RewardPolicy {
    fn default() -> Self {
        RewardDefaults::default().resolve(None)
    }
}

#[cfg(test)]
mod tests;

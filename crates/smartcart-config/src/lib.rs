//! Configuration system for SmartCart.
//!
//! Load optimizer, route and server settings from TOML or YAML files so the
//! search budget and operator rates can be tuned without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use smartcart_config::SmartCartConfig;
//!
//! let config = SmartCartConfig::from_toml_str(r#"
//!     [optimizer]
//!     random_seed = 7
//!     crossover_probability = 0.8
//!
//!     [optimizer.generations]
//!     max = 300
//!
//!     [server]
//!     port = 8080
//! "#).unwrap();
//!
//! assert_eq!(config.optimizer.random_seed, Some(7));
//! assert_eq!(config.optimizer.generation_count(30), 300);
//! assert_eq!(config.optimizer.population_size(3), 50);
//! assert_eq!(config.server.port, 8080);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use smartcart_config::SmartCartConfig;
//!
//! let config = SmartCartConfig::load("smartcart.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

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

/// Main SmartCart configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SmartCartConfig {
    /// Genetic search settings.
    pub optimizer: OptimizerConfig,

    /// Route assembly settings.
    pub route: RouteConfig,

    /// HTTP server settings.
    pub server: ServerConfig,
}

impl SmartCartConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the optimizer random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.optimizer.random_seed = Some(seed);
        self
    }

    /// Replaces the optimizer configuration.
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Sets the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Checks every section for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.optimizer.validate()?;
        self.route.validate()
    }
}

/// Linear scaling of a search budget with the number of items, clamped to
/// `[min, max]`.
///
/// In a config file any field may be left out; missing fields keep the
/// default for that budget (see [`OptimizerConfig::DEFAULT_POPULATION`] and
/// [`OptimizerConfig::DEFAULT_GENERATIONS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScalingConfig {
    /// Budget added per item.
    pub per_item: usize,
    /// Lower bound.
    pub min: usize,
    /// Upper bound.
    pub max: usize,
}

impl ScalingConfig {
    pub const fn new(per_item: usize, min: usize, max: usize) -> Self {
        Self { per_item, min, max }
    }

    /// Returns `clamp(item_count * per_item, min, max)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartcart_config::ScalingConfig;
    ///
    /// let population = ScalingConfig::new(10, 50, 200);
    /// assert_eq!(population.scaled(2), 50);
    /// assert_eq!(population.scaled(12), 120);
    /// assert_eq!(population.scaled(40), 200);
    /// ```
    pub fn scaled(&self, item_count: usize) -> usize {
        item_count
            .saturating_mul(self.per_item)
            .clamp(self.min, self.max.max(self.min))
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.per_item == 0 || self.min == 0 {
            return Err(ConfigError::Invalid(format!(
                "{name}: per_item and min must be positive"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "{name}: min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// A scaling table as written in a file, with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "snake_case")]
struct PartialScaling {
    per_item: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
}

impl PartialScaling {
    fn over(self, base: ScalingConfig) -> ScalingConfig {
        ScalingConfig {
            per_item: self.per_item.unwrap_or(base.per_item),
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
        }
    }
}

fn population_scaling<'de, D: Deserializer<'de>>(d: D) -> Result<ScalingConfig, D::Error> {
    PartialScaling::deserialize(d).map(|p| p.over(OptimizerConfig::DEFAULT_POPULATION))
}

fn generations_scaling<'de, D: Deserializer<'de>>(d: D) -> Result<ScalingConfig, D::Error> {
    PartialScaling::deserialize(d).map(|p| p.over(OptimizerConfig::DEFAULT_GENERATIONS))
}

/// Genetic search configuration.
///
/// Passed by reference into each optimization; nothing here is global.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OptimizerConfig {
    /// Population size scaling.
    #[serde(deserialize_with = "population_scaling")]
    pub population: ScalingConfig,

    /// Generation count scaling.
    #[serde(deserialize_with = "generations_scaling")]
    pub generations: ScalingConfig,

    /// Probability that a parent pair is recombined.
    pub crossover_probability: f64,

    /// Probability that an offspring is mutated.
    pub mutation_probability: f64,

    /// Per-position swap probability inside a mutation.
    pub mutation_index_probability: f64,

    /// Number of aspirants per tournament.
    pub tournament_size: usize,

    /// Random seed for reproducible results.
    pub random_seed: Option<u64>,
}

impl OptimizerConfig {
    /// Population scaling used when none is configured.
    pub const DEFAULT_POPULATION: ScalingConfig = ScalingConfig::new(10, 50, 200);

    /// Generation scaling used when none is configured.
    pub const DEFAULT_GENERATIONS: ScalingConfig = ScalingConfig::new(20, 100, 500);

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets population scaling.
    pub fn with_population(mut self, population: ScalingConfig) -> Self {
        self.population = population;
        self
    }

    /// Sets generation scaling.
    pub fn with_generations(mut self, generations: ScalingConfig) -> Self {
        self.generations = generations;
        self
    }

    /// Population size for a list of `item_count` items.
    pub fn population_size(&self, item_count: usize) -> usize {
        self.population.scaled(item_count)
    }

    /// Number of generations for a list of `item_count` items.
    pub fn generation_count(&self, item_count: usize) -> usize {
        self.generations.scaled(item_count)
    }

    /// Checks probabilities and sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.population.validate("population")?;
        self.generations.validate("generations")?;

        let probabilities = [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
            ("mutation_index_probability", self.mutation_index_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }

        if self.tournament_size == 0 {
            return Err(ConfigError::Invalid(
                "tournament_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population: Self::DEFAULT_POPULATION,
            generations: Self::DEFAULT_GENERATIONS,
            crossover_probability: 0.7,
            mutation_probability: 0.2,
            mutation_index_probability: 0.2,
            tournament_size: 3,
            random_seed: None,
        }
    }
}

/// Route assembly configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RouteConfig {
    /// Walking speed in map units per second.
    pub walking_speed: f64,
}

impl RouteConfig {
    /// Checks that the walking speed is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walking_speed.is_finite() && self.walking_speed > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "walking_speed must be positive, got {}",
                self.walking_speed
            )))
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self { walking_speed: 1.2 }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Returns `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

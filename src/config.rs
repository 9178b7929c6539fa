//! Game configuration.
//!
//! Loaded from YAML; every section falls back to defaults when omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{parse_rule, presets, validate_density, GameEngine, Seed};
use crate::error::{LifeError, Result};

/// Allowed range for `updates_per_second`
pub const MIN_UPDATES_PER_SECOND: f32 = 1.0;
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    /// Rule in B/S notation
    pub rule: String,
    /// Generations per second while running, within 1..=60
    pub updates_per_second: f32,
    /// Whether clicks edit cells when a game starts
    pub god_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells per row
    pub size_x: usize,
    /// Rows
    pub size_y: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Fraction of cells alive at start (0.0 - 1.0)
    pub density: f64,
    /// Fixed RNG seed for reproducible boards
    pub rng_seed: Option<u64>,
    /// Preset name placed centred on an otherwise empty board instead of a random fill
    pub pattern: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            seed: SeedConfig::default(),
            rule: "B3/S23".to_string(),
            updates_per_second: 10.0,
            god_mode: true,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size_x: 40, size_y: 30 }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { density: 0.3, rng_seed: None, pattern: None }
    }
}

impl SeedConfig {
    /// Resolve to an engine seed for a `size_x` by `size_y` grid
    pub fn to_seed(&self, size_x: usize, size_y: usize) -> Result<Seed> {
        match &self.pattern {
            Some(name) => Ok(Seed::centred(presets::by_name(name)?, size_x, size_y)),
            None => Ok(Seed::Random { density: self.density, rng_seed: self.rng_seed }),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let GridConfig { size_x, size_y } = self.grid;
        if size_x == 0 || size_y == 0 {
            return Err(LifeError::InvalidConfiguration(format!(
                "grid size must be positive, got {size_x}x{size_y}"
            )));
        }
        if size_x.checked_mul(size_y).is_none() {
            return Err(LifeError::InvalidConfiguration(format!("grid size {size_x}x{size_y} overflows")));
        }
        validate_density(self.seed.density)?;
        if let Some(name) = &self.seed.pattern {
            presets::by_name(name)?;
        }
        parse_rule(&self.rule)?;
        if !(MIN_UPDATES_PER_SECOND..=MAX_UPDATES_PER_SECOND).contains(&self.updates_per_second) {
            return Err(LifeError::InvalidConfiguration(format!(
                "updates_per_second must be within {MIN_UPDATES_PER_SECOND}..={MAX_UPDATES_PER_SECOND}, got {}",
                self.updates_per_second
            )));
        }
        Ok(())
    }

    /// Build an engine for this configuration
    pub fn build_engine(&self) -> Result<GameEngine> {
        self.validate()?;
        let GridConfig { size_x, size_y } = self.grid;
        let mut engine = GameEngine::new(size_x, size_y, &self.seed.to_seed(size_x, size_y)?)?
            .with_rule(parse_rule(&self.rule)?);
        engine.set_god_mode(self.god_mode);
        Ok(engine)
    }
}

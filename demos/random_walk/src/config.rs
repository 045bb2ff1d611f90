//! TOML configuration for the random-walk demo.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use cs_agent::PopulationConfig;
use cs_behavior::DEFAULT_MOVE_RANGE;
use cs_core::SimConfig;

/// Everything the demo needs to run.  All sections are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:        SimConfig,
    pub population: PopulationConfig,
    pub movement:   MovementConfig,
    /// Where the CSV files go.  `--output` overrides it.
    pub output_dir: Option<PathBuf>,
}

/// Per-axis displacement interval of the move module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    #[serde(default = "default_min_step")]
    pub min_step: f64,
    #[serde(default = "default_max_step")]
    pub max_step: f64,
}

fn default_min_step() -> f64 { DEFAULT_MOVE_RANGE.0 }
fn default_max_step() -> f64 { DEFAULT_MOVE_RANGE.1 }

impl Default for MovementConfig {
    fn default() -> Self {
        Self { min_step: default_min_step(), max_step: default_max_step() }
    }
}

impl DemoConfig {
    /// Load from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        if config.movement.min_step > config.movement.max_step {
            anyhow::bail!(
                "movement range [{}, {}] is inverted",
                config.movement.min_step,
                config.movement.max_step
            );
        }
        Ok(config)
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::Steering;
use crate::cli::Cli;
use crate::error::{Result, ViewerError};
use crate::frame::Timestep;
use crate::scenes::SceneKind;

/// Key-press increments and optional caps, as read from config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    pub angular_step: f64,
    pub speed_step: f64,
    pub pitch_step: f64,
    pub max_speed: Option<f64>,
    pub max_angular_speed: Option<f64>,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Steering::default().into()
    }
}

impl From<Steering> for SteeringConfig {
    fn from(s: Steering) -> Self {
        Self {
            angular_step: s.angular_step,
            speed_step: s.speed_step,
            pitch_step: s.pitch_step,
            max_speed: s.max_speed,
            max_angular_speed: s.max_angular_speed,
        }
    }
}

impl From<SteeringConfig> for Steering {
    fn from(c: SteeringConfig) -> Self {
        Self {
            angular_step: c.angular_step,
            speed_step: c.speed_step,
            pitch_step: c.pitch_step,
            max_speed: c.max_speed,
            max_angular_speed: c.max_angular_speed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub scene: SceneKind,
    pub steering: SteeringConfig,
    pub timestep: Timestep,
    /// Road noise seed; `None` draws one from entropy
    pub texture_seed: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            steering: SteeringConfig::default(),
            timestep: Timestep::default(),
            texture_seed: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ViewerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ViewerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file (if any) with command-line flags layered on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(scene) = cli.scene {
            self.scene = scene;
        }
        if let Some(ticks) = cli.timestep {
            self.timestep = Timestep::Fixed { ticks };
        }
        if let Some(ticks_per_second) = cli.ticks_per_second {
            self.timestep = Timestep::RealTime { ticks_per_second };
        }
        if cli.max_speed.is_some() {
            self.steering.max_speed = cli.max_speed;
        }
        if cli.max_angular_speed.is_some() {
            self.steering.max_angular_speed = cli.max_angular_speed;
        }
        if cli.texture_seed.is_some() {
            self.texture_seed = cli.texture_seed;
        }
    }

    pub fn steering(&self) -> Steering {
        self.steering.into()
    }
}

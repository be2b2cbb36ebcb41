// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scene-viewer")]
#[command(about = "Interactive house and owl scene viewer", long_about = None)]
pub struct Cli {
    /// Scene to open
    #[arg(long, value_enum)]
    pub scene: Option<SceneKind>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fixed simulation ticks per frame
    #[arg(long, conflicts_with = "ticks_per_second")]
    pub timestep: Option<f64>,

    /// Advance by wall-clock time at this many ticks per second
    #[arg(long)]
    pub ticks_per_second: Option<f64>,

    /// Cap on forward speed magnitude
    #[arg(long)]
    pub max_speed: Option<f64>,

    /// Cap on turn rate magnitude
    #[arg(long)]
    pub max_angular_speed: Option<f64>,

    /// Seed for the road texture noise
    #[arg(long)]
    pub texture_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scene_and_caps() {
        let cli = Cli::parse_from(["scene-viewer", "--scene", "owl", "--max-speed", "0.5"]);
        assert_eq!(cli.scene, Some(SceneKind::Owl));
        assert_eq!(cli.max_speed, Some(0.5));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn timestep_modes_conflict() {
        let result = Cli::try_parse_from(["scene-viewer", "--timestep", "1", "--ticks-per-second", "60"]);
        assert!(result.is_err());
    }
}

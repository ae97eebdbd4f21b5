use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lazer::WorldConfig;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub tick_rate: u32,
    pub duration_secs: f32,
    pub fire_hold_secs: f32,
    pub fire_release_secs: f32,
    pub frame_jitter: bool,
    pub print_events: bool,
    pub world: WorldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: lazer::DEFAULT_TICK_RATE,
            duration_secs: 20.0,
            fire_hold_secs: 1.5,
            fire_release_secs: 0.5,
            frame_jitter: false,
            print_events: false,
            world: WorldConfig::default(),
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<WorldConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn partial_scenario_fills_defaults() {
        let config: WorldConfig = serde_json::from_str(
            r#"{
                "player": { "fire_period": 0.25 },
                "waves": [
                    { "waypoints": [[0.0, 9.0], [0.0, -9.0]], "enemy_count": 3 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.player.fire_period, 0.25);
        assert_eq!(config.player.health, 200.0);
        assert_eq!(config.viewport, lazer::Viewport::default());
        assert_eq!(config.waves.len(), 1);
        assert_eq!(config.waves[0].waypoints[1], Vec2::new(0.0, -9.0));
        assert!(lazer::World::new(config).is_ok());
    }

    #[test]
    fn missing_scenario_file_reports_path() {
        let err = load_scenario(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}

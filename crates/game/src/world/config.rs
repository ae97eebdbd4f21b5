use serde::{Deserialize, Serialize};

use crate::pathing::WaveConfig;
use crate::player::{PlayerConfig, Viewport};

/// Everything needed to build a [`super::World`]; loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub player: PlayerConfig,
    pub viewport: Viewport,
    /// Played in order; each wave starts once the previous one has released
    /// all of its enemies.
    pub waves: Vec<WaveConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            viewport: Viewport::default(),
            waves: vec![WaveConfig::default()],
        }
    }
}

use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult, require_positive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub waypoints: Vec<Vec2>,
    pub move_speed: f32,

    pub enemy_count: u32,
    pub spawn_interval: f32,

    pub enemy_health: f32,
    pub contact_damage: f32,
    pub hit_radius: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Vec2::new(-6.0, 11.0),
                Vec2::new(-4.0, 6.0),
                Vec2::new(4.0, 6.0),
                Vec2::new(4.0, 2.0),
                Vec2::new(-4.0, 2.0),
                Vec2::new(0.0, -11.0),
            ],
            move_speed: 2.0,

            enemy_count: 5,
            spawn_interval: 0.5,

            enemy_health: 100.0,
            contact_damage: 100.0,
            hit_radius: 0.5,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> SimResult<()> {
        require_positive("wave move speed", self.move_speed)?;
        require_positive("wave spawn interval", self.spawn_interval)?;
        require_positive("enemy health", self.enemy_health)?;
        require_positive("enemy hit radius", self.hit_radius)?;
        if !(self.contact_damage.is_finite() && self.contact_damage >= 0.0) {
            return Err(SimError::InvalidDamage(self.contact_damage));
        }
        if self.waypoints.is_empty() {
            warn!("wave has no waypoints; its enemies spawn at the origin and despawn at once");
        }
        Ok(())
    }

    pub fn spawn_point(&self) -> Option<Vec2> {
        self.waypoints.first().copied()
    }
}

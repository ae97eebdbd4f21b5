use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult, require_positive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    /// Distance kept between the player and each viewport edge.
    pub padding: f32,
    pub health: f32,

    pub projectile_speed: f32,
    pub fire_period: f32,
    pub projectile_damage: f32,
    pub projectile_radius: f32,

    pub hit_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            padding: 1.0,
            health: 200.0,

            projectile_speed: 10.0,
            fire_period: 0.1,
            projectile_damage: 100.0,
            projectile_radius: 0.1,

            hit_radius: 0.5,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> SimResult<()> {
        require_positive("player move speed", self.move_speed)?;
        require_positive("player health", self.health)?;
        require_positive("projectile speed", self.projectile_speed)?;
        require_positive("fire period", self.fire_period)?;
        require_positive("projectile radius", self.projectile_radius)?;
        require_positive("player hit radius", self.hit_radius)?;
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(SimError::InvalidBounds {
                padding: self.padding,
            });
        }
        if !(self.projectile_damage.is_finite() && self.projectile_damage >= 0.0) {
            return Err(SimError::InvalidDamage(self.projectile_damage));
        }
        Ok(())
    }
}

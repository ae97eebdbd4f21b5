use glam::Vec2;

use crate::combat::{DamageDealer, DamageReceiver, HitOutcome};
use crate::error::SimResult;
use crate::input::InputTracker;
use crate::weapon::Launcher;

use super::PlayerConfig;

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub health: DamageReceiver,
    pub launcher: Launcher,
    pub input: InputTracker,
}

impl PlayerState {
    pub fn new(config: &PlayerConfig, position: Vec2) -> SimResult<Self> {
        Ok(Self {
            position,
            health: DamageReceiver::new(config.health)?,
            launcher: Launcher::new(
                config.fire_period,
                Vec2::new(0.0, config.projectile_speed),
            )?,
            input: InputTracker::new(),
        })
    }

    pub fn take_hit(&mut self, dealer: DamageDealer) -> HitOutcome {
        self.health.take_hit(dealer)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health.is_destroyed()
    }
}

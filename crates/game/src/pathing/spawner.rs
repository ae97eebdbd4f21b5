use log::info;

use crate::error::SimResult;
use crate::gate::PeriodicActionGate;
use crate::simulation::DeltaTime;

use super::{WaveConfig, WaypointMover};

/// Releases the enemies of one wave, the first immediately and the rest
/// `spawn_interval` apart.
#[derive(Debug, Clone)]
pub struct WaveSpawner {
    config: WaveConfig,
    gate: PeriodicActionGate,
    released: u32,
}

impl WaveSpawner {
    pub fn new(config: WaveConfig) -> SimResult<Self> {
        config.validate()?;
        let mut gate = PeriodicActionGate::new(config.spawn_interval)?;
        if config.enemy_count > 0 {
            gate.start();
        }
        Ok(Self {
            config,
            gate,
            released: 0,
        })
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn released(&self) -> u32 {
        self.released
    }

    pub fn remaining(&self) -> u32 {
        self.config.enemy_count - self.released
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns how many enemies to release this tick.
    pub fn step(&mut self, elapsed: DeltaTime) -> u32 {
        let due = self.gate.step(elapsed).min(self.remaining());
        self.released += due;
        if self.is_finished() && self.gate.stop() {
            info!("wave released all {} enemies", self.config.enemy_count);
        }
        due
    }

    /// A fresh mover for one released enemy, positioned on the first waypoint.
    pub fn spawn_mover(&self) -> SimResult<WaypointMover> {
        WaypointMover::new(self.config.waypoints.clone(), self.config.move_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(enemy_count: u32, spawn_interval: f32) -> WaveConfig {
        WaveConfig {
            enemy_count,
            spawn_interval,
            ..Default::default()
        }
    }

    #[test]
    fn first_enemy_is_immediate() {
        let mut spawner = WaveSpawner::new(wave(3, 1.0)).unwrap();
        assert_eq!(spawner.step(DeltaTime::ZERO), 1);
        assert_eq!(spawner.step(DeltaTime::new(0.5).unwrap()), 0);
        assert_eq!(spawner.step(DeltaTime::new(0.5).unwrap()), 1);
    }

    #[test]
    fn releases_exactly_enemy_count() {
        let mut spawner = WaveSpawner::new(wave(4, 0.25)).unwrap();
        let dt = DeltaTime::new(0.125).unwrap();

        let total: u32 = (0..100).map(|_| spawner.step(dt)).sum();
        assert_eq!(total, 4);
        assert!(spawner.is_finished());
    }

    #[test]
    fn large_step_is_capped() {
        let mut spawner = WaveSpawner::new(wave(2, 0.1)).unwrap();
        assert_eq!(spawner.step(DeltaTime::new(5.0).unwrap()), 2);
        assert_eq!(spawner.step(DeltaTime::new(5.0).unwrap()), 0);
    }

    #[test]
    fn empty_wave_is_finished() {
        let mut spawner = WaveSpawner::new(wave(0, 0.1)).unwrap();
        assert!(spawner.is_finished());
        assert_eq!(spawner.step(DeltaTime::new(1.0).unwrap()), 0);
    }

    #[test]
    fn mover_starts_on_first_waypoint() {
        let spawner = WaveSpawner::new(WaveConfig::default()).unwrap();
        let mover = spawner.spawn_mover().unwrap();
        assert_eq!(Some(mover.position()), spawner.config().spawn_point());
        assert_eq!(mover.target_index(), 0);
    }
}

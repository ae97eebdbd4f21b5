use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::gate::PeriodicActionGate;
use crate::input::{ButtonEdges, Buttons};
use crate::simulation::DeltaTime;

/// Request for the collaborator to materialize a projectile. Nothing here
/// tracks the projectile once it has been handed over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnProjectile {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    gate: PeriodicActionGate,
    velocity: Vec2,
    trigger: Buttons,
}

impl Launcher {
    pub fn new(fire_period: f32, velocity: Vec2) -> SimResult<Self> {
        Ok(Self {
            gate: PeriodicActionGate::new(fire_period)?,
            velocity,
            trigger: Buttons::FIRE,
        })
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_firing(&self) -> bool {
        self.gate.is_firing()
    }

    pub fn pull_trigger(&mut self) -> bool {
        self.gate.start()
    }

    pub fn release_trigger(&mut self) -> bool {
        self.gate.stop()
    }

    pub fn handle_edges(&mut self, edges: &ButtonEdges) {
        if edges.was_pressed(self.trigger) {
            self.pull_trigger();
        }
        if edges.was_released(self.trigger) {
            self.release_trigger();
        }
    }

    /// Every shot due this tick, all leaving from `position`.
    pub fn step(&mut self, elapsed: DeltaTime, position: Vec2) -> Vec<SpawnProjectile> {
        let shots = self.gate.step(elapsed);
        let velocity = self.velocity;
        (0..shots)
            .map(|_| SpawnProjectile { position, velocity })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(seconds: f32) -> DeltaTime {
        DeltaTime::new(seconds).unwrap()
    }

    #[test]
    fn shots_carry_position_and_velocity() {
        let mut launcher = Launcher::new(0.1, Vec2::new(0.0, 10.0)).unwrap();
        launcher.pull_trigger();

        let shots = launcher.step(dt(0.35), Vec2::new(1.0, -4.0));
        assert_eq!(shots.len(), 4);
        for shot in shots {
            assert_eq!(shot.position, Vec2::new(1.0, -4.0));
            assert_eq!(shot.velocity, Vec2::new(0.0, 10.0));
        }
    }

    #[test]
    fn edges_drive_the_trigger() {
        let mut launcher = Launcher::new(0.5, Vec2::Y).unwrap();

        launcher.handle_edges(&ButtonEdges {
            pressed: Buttons::FIRE,
            released: Buttons::empty(),
        });
        assert!(launcher.is_firing());
        assert_eq!(launcher.step(dt(0.25), Vec2::ZERO).len(), 1);

        launcher.handle_edges(&ButtonEdges {
            pressed: Buttons::empty(),
            released: Buttons::FIRE,
        });
        assert!(!launcher.is_firing());
        assert!(launcher.step(dt(10.0), Vec2::ZERO).is_empty());
    }
}

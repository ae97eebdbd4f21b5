use glam::Vec2;

use crate::combat::{DamageDealer, DamageReceiver};
use crate::pathing::WaypointMover;
use crate::weapon::SpawnProjectile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    pub mover: WaypointMover,
    pub health: DamageReceiver,
    pub contact: DamageDealer,
    pub radius: f32,
}

impl Enemy {
    pub fn position(&self) -> Vec2 {
        self.mover.position()
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: DamageDealer,
    pub radius: f32,
}

impl Projectile {
    pub fn from_spawn(
        id: EntityId,
        spawn: SpawnProjectile,
        damage: DamageDealer,
        radius: f32,
    ) -> Self {
        Self {
            id,
            position: spawn.position,
            velocity: spawn.velocity,
            damage,
            radius,
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

pub fn overlaps(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

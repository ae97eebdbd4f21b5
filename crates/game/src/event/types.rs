use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::weapon::SpawnProjectile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DespawnReason {
    /// Walked off the end of its path.
    PathComplete,
    /// Health depleted by projectiles.
    Destroyed,
    /// Rammed the player and was consumed by the impact.
    Collided,
}

impl DespawnReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DespawnReason::PathComplete => "path complete",
            DespawnReason::Destroyed => "destroyed",
            DespawnReason::Collided => "collided",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    WaveStarted {
        wave_index: usize,
        enemy_count: u32,
    },
    EnemySpawned {
        enemy_id: u32,
        position: Vec2,
    },
    EnemyDamaged {
        enemy_id: u32,
        remaining: f32,
    },
    EnemyDespawned {
        enemy_id: u32,
        position: Vec2,
        reason: DespawnReason,
    },
    ProjectileSpawned {
        projectile_id: u32,
        spawn: SpawnProjectile,
    },
    ProjectileExpired {
        projectile_id: u32,
    },
    PlayerDamaged {
        remaining: f32,
    },
    PlayerDestroyed {
        position: Vec2,
    },
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::PlayerDestroyed { .. })
    }
}

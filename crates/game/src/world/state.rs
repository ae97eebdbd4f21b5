use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, info};

use crate::combat::{DamageDealer, DamageReceiver, HitOutcome};
use crate::error::SimResult;
use crate::event::{DespawnReason, GameEvent};
use crate::input::InputFrame;
use crate::pathing::WaveSpawner;
use crate::player::{PlayerController, PlayerState, Viewport};
use crate::simulation::DeltaTime;

use super::config::WorldConfig;
use super::entity::{Enemy, EntityId, Projectile, overlaps};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub ticks: u32,
    pub projectiles_fired: u32,
    pub enemies_spawned: u32,
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub enemies_collided: u32,
    pub player_hits: u32,
}

impl WorldStats {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ProjectileSpawned { .. } => self.projectiles_fired += 1,
            GameEvent::EnemySpawned { .. } => self.enemies_spawned += 1,
            GameEvent::EnemyDespawned { reason, .. } => match reason {
                DespawnReason::Destroyed => self.enemies_destroyed += 1,
                DespawnReason::PathComplete => self.enemies_escaped += 1,
                DespawnReason::Collided => self.enemies_collided += 1,
            },
            GameEvent::PlayerDamaged { .. } | GameEvent::PlayerDestroyed { .. } => {
                self.player_hits += 1
            }
            _ => {}
        }
    }
}

/// Owns every entity and applies the controllers' terminal signals.
///
/// Controllers only report `ReachedEnd` or `Destroyed`; removing the entity
/// is done here.
pub struct World {
    viewport: Viewport,
    controller: PlayerController,
    player: PlayerState,
    projectile_damage: DamageDealer,
    projectile_radius: f32,

    pending_waves: VecDeque<WaveSpawner>,
    active_wave: Option<WaveSpawner>,
    waves_started: usize,

    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    next_entity_id: u32,
    stats: WorldStats,
}

impl World {
    pub fn new(config: WorldConfig) -> SimResult<Self> {
        let controller = PlayerController::new(config.player, config.viewport)?;
        let player = controller.spawn()?;
        let pending_waves = config
            .waves
            .into_iter()
            .map(WaveSpawner::new)
            .collect::<SimResult<VecDeque<_>>>()?;

        Ok(Self {
            viewport: config.viewport,
            projectile_damage: DamageDealer::new(controller.config().projectile_damage)?,
            projectile_radius: controller.config().projectile_radius,
            controller,
            player,
            pending_waves,
            active_wave: None,
            waves_started: 0,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            next_entity_id: 1,
            stats: WorldStats::default(),
        })
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    pub fn is_player_destroyed(&self) -> bool {
        self.player.is_destroyed()
    }

    /// No enemies are left to release or alive, or the player is gone.
    pub fn is_over(&self) -> bool {
        if self.is_player_destroyed() {
            return true;
        }
        let waves_done = self.pending_waves.is_empty()
            && self.active_wave.as_ref().is_none_or(WaveSpawner::is_finished);
        waves_done && self.enemies.is_empty()
    }

    pub fn advance(&mut self, elapsed: f32, input: &InputFrame) -> SimResult<Vec<GameEvent>> {
        self.step(DeltaTime::new(elapsed)?, input)
    }

    pub fn step(&mut self, dt: DeltaTime, input: &InputFrame) -> SimResult<Vec<GameEvent>> {
        let mut events = Vec::new();

        self.release_enemies(dt, &mut events)?;
        self.update_player(dt, input, &mut events);
        self.update_enemies(dt, &mut events);
        self.update_projectiles(dt, &mut events);
        self.resolve_projectile_hits(&mut events);
        self.resolve_player_contacts(&mut events);

        self.stats.ticks += 1;
        for event in &events {
            self.stats.record(event);
        }
        Ok(events)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1);
        id
    }

    fn release_enemies(&mut self, dt: DeltaTime, events: &mut Vec<GameEvent>) -> SimResult<()> {
        if self.active_wave.as_ref().is_none_or(WaveSpawner::is_finished) {
            self.active_wave = self.pending_waves.pop_front();
            if let Some(wave) = &self.active_wave {
                info!(
                    "wave {} started with {} enemies",
                    self.waves_started,
                    wave.config().enemy_count
                );
                events.push(GameEvent::WaveStarted {
                    wave_index: self.waves_started,
                    enemy_count: wave.config().enemy_count,
                });
                self.waves_started += 1;
            }
        }

        let Some(wave) = self.active_wave.as_mut() else {
            return Ok(());
        };
        let due = wave.step(dt);
        for _ in 0..due {
            let Some(wave) = self.active_wave.as_ref() else {
                break;
            };
            let mover = wave.spawn_mover()?;
            let health = DamageReceiver::new(wave.config().enemy_health)?;
            let contact = DamageDealer::new(wave.config().contact_damage)?;
            let radius = wave.config().hit_radius;

            let id = self.allocate_id();
            debug!("enemy {} spawned at {}", id.0, mover.position());
            events.push(GameEvent::EnemySpawned {
                enemy_id: id.0,
                position: mover.position(),
            });
            self.enemies.push(Enemy {
                id,
                mover,
                health,
                contact,
                radius,
            });
        }
        Ok(())
    }

    fn update_player(&mut self, dt: DeltaTime, input: &InputFrame, events: &mut Vec<GameEvent>) {
        let shots = self.controller.process(input, &mut self.player, dt);
        for spawn in shots {
            let id = self.allocate_id();
            events.push(GameEvent::ProjectileSpawned {
                projectile_id: id.0,
                spawn,
            });
            self.projectiles.push(Projectile::from_spawn(
                id,
                spawn,
                self.projectile_damage,
                self.projectile_radius,
            ));
        }
    }

    fn update_enemies(&mut self, dt: DeltaTime, events: &mut Vec<GameEvent>) {
        self.enemies.retain_mut(|enemy| {
            if enemy.mover.step(dt).reached_end() {
                debug!("enemy {} reached end of path", enemy.id.0);
                events.push(GameEvent::EnemyDespawned {
                    enemy_id: enemy.id.0,
                    position: enemy.position(),
                    reason: DespawnReason::PathComplete,
                });
                false
            } else {
                true
            }
        });
    }

    fn update_projectiles(&mut self, dt: DeltaTime, events: &mut Vec<GameEvent>) {
        let viewport = self.viewport;
        self.projectiles.retain_mut(|projectile| {
            projectile.integrate(dt.seconds());
            if viewport.contains(projectile.position) {
                true
            } else {
                events.push(GameEvent::ProjectileExpired {
                    projectile_id: projectile.id.0,
                });
                false
            }
        });
    }

    fn resolve_projectile_hits(&mut self, events: &mut Vec<GameEvent>) {
        let enemies = &mut self.enemies;
        self.projectiles.retain(|projectile| {
            let Some(index) = enemies.iter().position(|enemy| {
                overlaps(
                    projectile.position,
                    projectile.radius,
                    enemy.position(),
                    enemy.radius,
                )
            }) else {
                return true;
            };

            let enemy = &mut enemies[index];
            match enemy.health.take_hit(projectile.damage) {
                HitOutcome::Survived { remaining } => {
                    events.push(GameEvent::EnemyDamaged {
                        enemy_id: enemy.id.0,
                        remaining,
                    });
                }
                HitOutcome::Destroyed | HitOutcome::AlreadyDestroyed => {
                    info!("enemy {} destroyed", enemy.id.0);
                    events.push(GameEvent::EnemyDespawned {
                        enemy_id: enemy.id.0,
                        position: enemy.position(),
                        reason: DespawnReason::Destroyed,
                    });
                    enemies.remove(index);
                }
            }
            false
        });
    }

    fn resolve_player_contacts(&mut self, events: &mut Vec<GameEvent>) {
        if self.player.is_destroyed() {
            return;
        }

        let player_position = self.player.position;
        let player_radius = self.controller.config().hit_radius;
        let mut index = 0;
        while index < self.enemies.len() {
            let enemy = &self.enemies[index];
            if !overlaps(player_position, player_radius, enemy.position(), enemy.radius) {
                index += 1;
                continue;
            }

            let enemy = self.enemies.remove(index);
            events.push(GameEvent::EnemyDespawned {
                enemy_id: enemy.id.0,
                position: enemy.position(),
                reason: DespawnReason::Collided,
            });

            match self.player.take_hit(enemy.contact) {
                HitOutcome::Survived { remaining } => {
                    debug!("player hit by enemy {}, {remaining} health left", enemy.id.0);
                    events.push(GameEvent::PlayerDamaged { remaining });
                }
                HitOutcome::Destroyed => {
                    info!("player destroyed at {}", player_position);
                    events.push(GameEvent::PlayerDestroyed {
                        position: player_position,
                    });
                    return;
                }
                HitOutcome::AlreadyDestroyed => return,
            }
        }
    }

    /// Position of the player, or `None` once destroyed.
    pub fn player_position(&self) -> Option<Vec2> {
        (!self.player.is_destroyed()).then_some(self.player.position)
    }
}

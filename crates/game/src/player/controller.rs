use glam::Vec2;
use log::debug;

use crate::error::SimResult;
use crate::input::InputFrame;
use crate::simulation::DeltaTime;
use crate::weapon::SpawnProjectile;

use super::{MoveBounds, PlayerConfig, PlayerState, Viewport};

pub struct PlayerController {
    config: PlayerConfig,
    bounds: MoveBounds,
}

impl PlayerController {
    pub fn new(config: PlayerConfig, viewport: Viewport) -> SimResult<Self> {
        config.validate()?;
        let bounds = MoveBounds::from_viewport(viewport, config.padding)?;
        Ok(Self { config, bounds })
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn bounds(&self) -> &MoveBounds {
        &self.bounds
    }

    pub fn spawn(&self) -> SimResult<PlayerState> {
        PlayerState::new(&self.config, self.bounds.spawn_point())
    }

    /// Runs one tick: movement first, then firing from the new position.
    pub fn process(
        &self,
        input: &InputFrame,
        state: &mut PlayerState,
        dt: DeltaTime,
    ) -> Vec<SpawnProjectile> {
        if state.is_destroyed() {
            return Vec::new();
        }

        state.position = self.next_position(state.position, input, dt);

        let edges = state.input.update(input);
        state.launcher.handle_edges(&edges);
        let shots = state.launcher.step(dt, state.position);
        if !shots.is_empty() {
            debug!("player fired {} at {}", shots.len(), state.position);
        }
        shots
    }

    fn next_position(&self, position: Vec2, input: &InputFrame, dt: DeltaTime) -> Vec2 {
        let delta = input.clamped_axis() * dt.seconds() * self.config.move_speed;
        self.bounds.clamp(position + delta)
    }
}

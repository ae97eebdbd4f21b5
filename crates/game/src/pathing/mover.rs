use glam::Vec2;

use crate::error::{SimResult, require_positive};
use crate::simulation::DeltaTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Moving,
    /// Every waypoint has been visited. The mover no longer moves and the
    /// owner is expected to remove the entity.
    ReachedEnd,
}

impl MoveStatus {
    pub fn reached_end(self) -> bool {
        self == Self::ReachedEnd
    }
}

/// Moves `current` toward `target` by at most `max_delta`, landing exactly on
/// `target` when the remaining distance is within reach.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + offset / distance * max_delta
}

/// Follows an ordered path at constant speed.
///
/// The entity starts on the first waypoint. A waypoint counts as reached only
/// when the position equals it exactly, which the clamp in [`move_towards`]
/// guarantees on the tick that arrives.
#[derive(Debug, Clone)]
pub struct WaypointMover {
    waypoints: Vec<Vec2>,
    position: Vec2,
    target_index: usize,
    speed: f32,
}

impl WaypointMover {
    pub fn new(waypoints: Vec<Vec2>, speed: f32) -> SimResult<Self> {
        let speed = require_positive("move speed", speed)?;
        let position = waypoints.first().copied().unwrap_or(Vec2::ZERO);
        Ok(Self {
            waypoints,
            position,
            target_index: 0,
            speed,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn target(&self) -> Option<Vec2> {
        self.waypoints.get(self.target_index).copied()
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn is_complete(&self) -> bool {
        self.target_index >= self.waypoints.len()
    }

    pub fn advance(&mut self, elapsed: f32) -> SimResult<MoveStatus> {
        Ok(self.step(DeltaTime::new(elapsed)?))
    }

    pub fn step(&mut self, elapsed: DeltaTime) -> MoveStatus {
        // Waypoints the entity already sits on need no motion budget.
        while self.target() == Some(self.position) {
            self.target_index += 1;
        }

        let Some(target) = self.target() else {
            return MoveStatus::ReachedEnd;
        };

        self.position = move_towards(self.position, target, self.speed * elapsed.seconds());
        if self.position == target {
            self.target_index += 1;
        }
        MoveStatus::Moving
    }
}

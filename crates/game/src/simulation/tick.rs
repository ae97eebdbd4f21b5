use crate::error::{SimError, SimResult};
use crate::input::InputFrame;
use crate::event::GameEvent;
use crate::world::World;

/// Elapsed time since the previous tick, in seconds.
///
/// Construction is the single place a tick source's value is checked; a
/// negative or non-finite delta is a driver bug and is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DeltaTime(f32);

impl DeltaTime {
    pub const ZERO: Self = Self(0.0);

    pub fn new(seconds: f32) -> SimResult<Self> {
        if seconds.is_finite() && seconds >= 0.0 {
            Ok(Self(seconds))
        } else {
            Err(SimError::InvalidTick(seconds))
        }
    }

    pub fn seconds(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for DeltaTime {
    type Error = SimError;

    fn try_from(seconds: f32) -> SimResult<Self> {
        Self::new(seconds)
    }
}

pub struct FixedTimestep {
    tick_rate: u32,
    dt: f32,
    accumulator: f32,
}

impl FixedTimestep {
    const MAX_FRAME: f32 = 0.25;

    pub fn new(tick_rate: u32) -> SimResult<Self> {
        if tick_rate == 0 {
            return Err(SimError::InvalidConfiguration {
                what: "tick rate",
                value: 0.0,
            });
        }
        Ok(Self {
            tick_rate,
            dt: 1.0 / tick_rate as f32,
            accumulator: 0.0,
        })
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn dt(&self) -> DeltaTime {
        DeltaTime(self.dt)
    }

    /// Frames longer than a quarter second are truncated so a stalled driver
    /// does not replay a burst of catch-up ticks.
    pub fn accumulate(&mut self, delta: DeltaTime) {
        self.accumulator += delta.seconds().min(Self::MAX_FRAME);
    }

    pub fn should_tick(&self) -> bool {
        self.accumulator >= self.dt
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }
}

pub struct SimulationState {
    pub world: World,
    pub timestep: FixedTimestep,
    tick: u32,
}

impl SimulationState {
    pub fn new(world: World, tick_rate: u32) -> SimResult<Self> {
        Ok(Self {
            world,
            timestep: FixedTimestep::new(tick_rate)?,
            tick: 0,
        })
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Simulated seconds elapsed over all completed ticks.
    pub fn elapsed(&self) -> f32 {
        self.tick as f32 * self.timestep.dt().seconds()
    }
}

/// Drives a [`World`] at a fixed rate from variable-length frames.
///
/// `input_fn` is polled once per fixed tick for that tick's input frame.
pub struct SimulationLoop<F> {
    state: SimulationState,
    input_fn: F,
}

impl<F> SimulationLoop<F>
where
    F: FnMut(&SimulationState) -> InputFrame,
{
    pub fn new(world: World, tick_rate: u32, input_fn: F) -> SimResult<Self> {
        Ok(Self {
            state: SimulationState::new(world, tick_rate)?,
            input_fn,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn into_world(self) -> World {
        self.state.world
    }

    /// Feeds one frame of `delta` seconds and runs every fixed tick it
    /// completes, returning the events those ticks produced in order.
    pub fn update(&mut self, delta: f32) -> SimResult<Vec<GameEvent>> {
        let delta = DeltaTime::new(delta)?;
        self.state.timestep.accumulate(delta);

        let dt = self.state.timestep.dt();
        let mut events = Vec::new();
        while self.state.timestep.consume_tick() {
            let input = (self.input_fn)(&self.state);
            events.extend(self.state.world.step(dt, &input)?);
            self.state.tick = self.state.tick.wrapping_add(1);
        }

        Ok(events)
    }
}

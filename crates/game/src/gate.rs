use log::debug;

use crate::error::{SimResult, require_positive};
use crate::simulation::DeltaTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateState {
    Idle,
    Firing {
        /// Total time spent firing since the start edge.
        since_start: f64,
        /// Periodic actions emitted so far, not counting the entry action.
        fired: u64,
        /// The entry action has been armed by `start` but not yet emitted.
        entry_pending: bool,
    },
}

/// Relative tolerance applied to `since_start / interval` so a duration that
/// is a whole number of intervals in decimal (1.0 over 0.1) counts as one in
/// f32 as well.
const COUNT_TOLERANCE: f64 = 1e-6;

/// Turns a held action into discrete actions spaced `interval` seconds apart.
///
/// `start` arms an immediate action that the next `advance` emits; after
/// that one action is emitted each time the time spent firing crosses another
/// multiple of the interval. The count is derived from the total firing time
/// rather than a per-tick remainder, so it does not depend on how the period
/// is split into ticks and a single huge tick is counted in one step.
#[derive(Debug, Clone)]
pub struct PeriodicActionGate {
    interval: f32,
    state: GateState,
}

impl PeriodicActionGate {
    pub fn new(interval: f32) -> SimResult<Self> {
        Ok(Self {
            interval: require_positive("action interval", interval)?,
            state: GateState::Idle,
        })
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_firing(&self) -> bool {
        matches!(self.state, GateState::Firing { .. })
    }

    /// Start edge. Returns false if the gate was already firing, in which
    /// case its timer is left untouched.
    pub fn start(&mut self) -> bool {
        if self.is_firing() {
            return false;
        }
        debug!("gate start (interval {:.3}s)", self.interval);
        self.state = GateState::Firing {
            since_start: 0.0,
            fired: 0,
            entry_pending: true,
        };
        true
    }

    /// Stop edge. Any partially accumulated time is discarded.
    pub fn stop(&mut self) -> bool {
        if !self.is_firing() {
            return false;
        }
        debug!("gate stop");
        self.state = GateState::Idle;
        true
    }

    pub fn advance(&mut self, elapsed: f32) -> SimResult<u32> {
        Ok(self.step(DeltaTime::new(elapsed)?))
    }

    /// Advances the timer and returns how many actions fire this tick.
    pub fn step(&mut self, elapsed: DeltaTime) -> u32 {
        let interval = f64::from(self.interval);
        let GateState::Firing {
            since_start,
            fired,
            entry_pending,
        } = &mut self.state
        else {
            return 0;
        };

        let entry = u32::from(std::mem::take(entry_pending));
        *since_start += f64::from(elapsed.seconds());
        let ratio = *since_start / interval;
        // Saturating float-to-int cast; `ratio` is finite and non-negative.
        let due = (ratio + ratio * COUNT_TOLERANCE).floor() as u64;
        let fresh = due.saturating_sub(*fired);
        *fired = (*fired).max(due);
        u32::try_from(fresh).unwrap_or(u32::MAX).saturating_add(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn rejects_non_positive_interval() {
        assert!(matches!(
            PeriodicActionGate::new(0.0),
            Err(SimError::InvalidConfiguration { .. })
        ));
        assert!(PeriodicActionGate::new(-0.1).is_err());
    }

    #[test]
    fn idle_never_fires() {
        let mut gate = PeriodicActionGate::new(0.1).unwrap();
        assert_eq!(gate.advance(0.0).unwrap(), 0);
        assert_eq!(gate.advance(100.0).unwrap(), 0);
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[test]
    fn start_fires_immediately_then_accumulates() {
        let mut gate = PeriodicActionGate::new(0.1).unwrap();
        assert!(gate.start());
        assert_eq!(gate.advance(0.35).unwrap(), 4);
    }

    #[test]
    fn entry_action_fires_on_zero_elapsed() {
        let mut gate = PeriodicActionGate::new(0.5).unwrap();
        gate.start();
        assert_eq!(gate.advance(0.0).unwrap(), 1);
        assert_eq!(gate.advance(0.0).unwrap(), 0);
    }

    #[test]
    fn count_is_independent_of_chunking() {
        // Binary-exact durations keep the comparison free of rounding noise.
        let interval = 0.25;
        let duration = 2.0;

        let mut whole = PeriodicActionGate::new(interval).unwrap();
        whole.start();
        let whole_count = whole.advance(duration).unwrap();

        let mut chunked = PeriodicActionGate::new(interval).unwrap();
        chunked.start();
        let mut chunked_count = 0;
        for _ in 0..64 {
            chunked_count += chunked.advance(duration / 64.0).unwrap();
        }

        let mut uneven = PeriodicActionGate::new(interval).unwrap();
        uneven.start();
        let mut uneven_count = 0;
        for step in [0.125, 0.5, 0.0625, 0.3125, 1.0] {
            uneven_count += uneven.advance(step).unwrap();
        }

        let expected = (duration / interval).floor() as u32 + 1;
        assert_eq!(whole_count, expected);
        assert_eq!(chunked_count, expected);
        assert_eq!(uneven_count, expected);
    }

    #[test]
    fn tenth_second_interval_counts_whole_seconds() {
        let interval = 0.1;

        let mut whole = PeriodicActionGate::new(interval).unwrap();
        whole.start();
        let whole_count = whole.advance(1.0).unwrap();

        let mut tenths = PeriodicActionGate::new(interval).unwrap();
        tenths.start();
        let tenths_count: u32 = (0..10).map(|_| tenths.advance(0.1).unwrap()).sum();

        let mut frames = PeriodicActionGate::new(interval).unwrap();
        frames.start();
        let frames_count: u32 = (0..60).map(|_| frames.advance(1.0 / 60.0).unwrap()).sum();

        assert_eq!(whole_count, 11);
        assert_eq!(tenths_count, 11);
        assert_eq!(frames_count, 11);
    }

    #[test]
    fn long_firing_periods_do_not_drift() {
        let mut whole = PeriodicActionGate::new(0.1).unwrap();
        whole.start();
        assert_eq!(whole.advance(10.0).unwrap(), 101);

        let mut frames = PeriodicActionGate::new(0.1).unwrap();
        frames.start();
        let count: u32 = (0..600).map(|_| frames.advance(1.0 / 60.0).unwrap()).sum();
        assert_eq!(count, 101);
    }

    #[test]
    fn huge_elapsed_is_counted_in_one_step() {
        let mut gate = PeriodicActionGate::new(0.1).unwrap();
        gate.start();
        let count = gate.advance(1.0e7).unwrap();
        assert!((99_999_000..=100_000_200).contains(&count), "count {count}");
        assert_eq!(gate.advance(0.0).unwrap(), 0);
    }

    #[test]
    fn count_saturates_instead_of_overflowing() {
        let mut gate = PeriodicActionGate::new(1.0e-30).unwrap();
        gate.start();
        assert_eq!(gate.advance(f32::MAX).unwrap(), u32::MAX);
        assert!(gate.is_firing());
    }

    #[test]
    fn remainder_carries_between_ticks() {
        let mut gate = PeriodicActionGate::new(0.5).unwrap();
        gate.start();
        assert_eq!(gate.advance(0.75).unwrap(), 2);
        // 0.25 carried over, so 0.25 more completes the next interval.
        assert_eq!(gate.advance(0.25).unwrap(), 1);
    }

    #[test]
    fn stop_discards_partial_time() {
        let mut gate = PeriodicActionGate::new(0.5).unwrap();
        gate.start();
        assert_eq!(gate.advance(0.375).unwrap(), 1);
        assert!(gate.stop());
        assert_eq!(gate.advance(1.0).unwrap(), 0);

        gate.start();
        assert_eq!(gate.advance(0.125).unwrap(), 1);
        assert_eq!(gate.advance(0.25).unwrap(), 0);
    }

    #[test]
    fn stop_before_advance_cancels_entry_action() {
        let mut gate = PeriodicActionGate::new(0.1).unwrap();
        gate.start();
        gate.stop();
        assert_eq!(gate.advance(0.05).unwrap(), 0);
    }

    #[test]
    fn repeated_start_keeps_timer() {
        let mut gate = PeriodicActionGate::new(0.5).unwrap();
        assert!(gate.start());
        assert_eq!(gate.advance(0.25).unwrap(), 1);
        assert!(!gate.start());
        assert_eq!(gate.advance(0.25).unwrap(), 1);
    }

    #[test]
    fn negative_elapsed_is_rejected() {
        let mut gate = PeriodicActionGate::new(0.1).unwrap();
        gate.start();
        assert_eq!(gate.advance(-0.1), Err(SimError::InvalidTick(-0.1)));
        assert_eq!(gate.advance(0.0).unwrap(), 1);
    }
}

use glam::Vec2;
use lazer::{Buttons, InputFrame};

/// Deterministic stand-in for a human at the controls.
///
/// Fire is held for `hold` seconds and released for `release` seconds,
/// repeating; the horizontal axis sweeps back and forth.
pub struct ScriptedInput {
    hold: f32,
    release: f32,
    sweep_period: f32,
}

impl ScriptedInput {
    pub fn new(hold: f32, release: f32) -> Self {
        Self {
            hold,
            release,
            sweep_period: 4.0,
        }
    }

    pub fn frame_at(&self, time: f32) -> InputFrame {
        let phase = std::f32::consts::TAU * time / self.sweep_period;
        let axis = Vec2::new(phase.sin(), 0.0);

        let cycle = self.hold + self.release;
        let fire = cycle > 0.0 && time.rem_euclid(cycle) < self.hold;
        let buttons = if fire { Buttons::FIRE } else { Buttons::empty() };

        InputFrame::new(axis, buttons)
    }
}

/// Frame lengths for the driver loop. With jitter enabled the lengths cycle
/// through a fixed pattern around the nominal rate.
pub struct FramePacer {
    nominal: f32,
    jitter: bool,
    frame: usize,
}

impl FramePacer {
    const PATTERN: [f32; 6] = [1.0, 0.5, 1.75, 0.8, 1.2, 0.75];

    pub fn new(tick_rate: u32, jitter: bool) -> Self {
        Self {
            nominal: 1.0 / tick_rate as f32,
            jitter,
            frame: 0,
        }
    }

    pub fn next_frame(&mut self) -> f32 {
        let scale = if self.jitter {
            Self::PATTERN[self.frame % Self::PATTERN.len()]
        } else {
            1.0
        };
        self.frame += 1;
        self.nominal * scale
    }
}

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const FIRE = 1 << 0;
    }
}

/// One tick's worth of polled input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputFrame {
    /// Horizontal/vertical movement axes, each expected in `[-1, 1]`.
    pub axis: Vec2,
    pub buttons: Buttons,
}

impl InputFrame {
    pub fn new(axis: Vec2, buttons: Buttons) -> Self {
        Self { axis, buttons }
    }

    pub fn with_fire(mut self, held: bool) -> Self {
        self.buttons.set(Buttons::FIRE, held);
        self
    }

    pub fn clamped_axis(&self) -> Vec2 {
        self.axis.clamp(Vec2::NEG_ONE, Vec2::ONE)
    }

    pub fn is_held(&self, button: Buttons) -> bool {
        self.buttons.contains(button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges {
    pub pressed: Buttons,
    pub released: Buttons,
}

impl ButtonEdges {
    pub fn was_pressed(&self, button: Buttons) -> bool {
        self.pressed.contains(button)
    }

    pub fn was_released(&self, button: Buttons) -> bool {
        self.released.contains(button)
    }
}

/// Turns successive polled frames into pressed/released edges.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: Buttons,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Buttons {
        self.held
    }

    pub fn update(&mut self, frame: &InputFrame) -> ButtonEdges {
        let edges = ButtonEdges {
            pressed: frame.buttons - self.held,
            released: self.held - frame.buttons,
        };
        self.held = frame.buttons;
        edges
    }

    pub fn reset(&mut self) {
        self.held = Buttons::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_edges() {
        let mut tracker = InputTracker::new();
        let idle = InputFrame::default();
        let firing = idle.with_fire(true);

        let edges = tracker.update(&firing);
        assert!(edges.was_pressed(Buttons::FIRE));
        assert!(!edges.was_released(Buttons::FIRE));

        let edges = tracker.update(&firing);
        assert_eq!(edges, ButtonEdges::default());

        let edges = tracker.update(&idle);
        assert!(edges.was_released(Buttons::FIRE));
        assert!(!edges.was_pressed(Buttons::FIRE));
    }

    #[test]
    fn axis_is_clamped() {
        let frame = InputFrame::new(Vec2::new(3.0, -2.0), Buttons::empty());
        assert_eq!(frame.clamped_axis(), Vec2::new(1.0, -1.0));
    }
}

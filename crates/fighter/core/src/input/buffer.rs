use super::{Controls, InputSnapshot};

/// Turns raw world-relative controls into [`InputSnapshot`]s.
///
/// Keeps the previous capture for edge detection and a step clock for the
/// double-tap-back gesture. Capture exactly once per simulation step.
#[derive(Clone, Debug, PartialEq)]
pub struct InputBuffer {
    prev: Controls,
    since_back_press: Option<f32>,
    double_tap_window: f32,
}

impl InputBuffer {
    pub const DEFAULT_DOUBLE_TAP_WINDOW_SECS: f32 = 0.25;
    // Absorbs accumulated f32 error when taps land exactly on the window edge.
    const WINDOW_EPSILON: f32 = 1e-4;

    pub fn new() -> Self {
        Self::with_double_tap_window(Self::DEFAULT_DOUBLE_TAP_WINDOW_SECS)
    }

    pub fn with_double_tap_window(secs: f32) -> Self {
        Self {
            prev: Controls::empty(),
            since_back_press: None,
            double_tap_window: secs,
        }
    }

    /// Captures one step of input.
    ///
    /// `raw` holds world directions and buttons; any relative bits in it are
    /// ignored and re-derived from `facing_right`.
    pub fn capture(&mut self, raw: Controls, facing_right: bool, dt: f32) -> InputSnapshot {
        let held = Self::resolve(raw, facing_right);
        let pressed = held - self.prev;
        self.prev = held;

        if let Some(elapsed) = self.since_back_press.as_mut() {
            *elapsed += dt;
        }

        let mut double_tap_back = false;
        if pressed.contains(Controls::BACK) {
            match self.since_back_press {
                Some(elapsed) if elapsed <= self.double_tap_window + Self::WINDOW_EPSILON => {
                    double_tap_back = true;
                    self.since_back_press = None;
                }
                _ => self.since_back_press = Some(0.0),
            }
        }

        InputSnapshot {
            held,
            pressed,
            double_tap_back,
        }
    }

    /// Re-seeds edge detection with the controls held right now and drops
    /// any pending back tap. Controls still held on the next capture do not
    /// count as pressed.
    pub fn prime(&mut self, raw: Controls, facing_right: bool) {
        self.prev = Self::resolve(raw, facing_right);
        self.since_back_press = None;
    }

    fn resolve(raw: Controls, facing_right: bool) -> Controls {
        let mut held = raw - Controls::RELATIVE_HORIZONTAL;
        let (toward, away) = if facing_right {
            (Controls::RIGHT, Controls::LEFT)
        } else {
            (Controls::LEFT, Controls::RIGHT)
        };
        if held.contains(toward) {
            held |= Controls::FORWARD;
        }
        if held.contains(away) {
            held |= Controls::BACK;
        }
        held
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

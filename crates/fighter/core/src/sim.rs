//! Headless fighter stepping for tests and tools.
//!
//! The harness plays the round director's per-step duties that the cores do
//! not own: turning fighters to face each other, capturing input, and ticking
//! both cores in a stable order.

use crate::error::{ErrorSeverity, GameError};
use crate::fighter::FighterCore;
use crate::input::{Controls, InputBuffer, InputSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The per-frame check returned false.
    #[error("per-frame check failed at frame {frame}")]
    CheckFailed { frame: usize },
}

impl GameError for SimError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CheckFailed { .. } => "SIM_CHECK_FAILED",
        }
    }
}

/// Turns `a` and `b` toward each other. Ties face `a` right.
pub fn face_each_other(a: &mut FighterCore<'_>, b: &mut FighterCore<'_>) {
    let a_faces_right = a.position().x <= b.position().x;
    a.set_facing(a_faces_right);
    b.set_facing(!a_faces_right);
}

#[derive(Clone, Debug)]
pub struct SimHarness {
    buffers: [InputBuffer; 2],
    /// Re-face the fighters before every step.
    pub auto_face: bool,
}

impl SimHarness {
    pub fn new() -> Self {
        Self {
            buffers: [InputBuffer::new(), InputBuffer::new()],
            auto_face: true,
        }
    }

    pub fn without_auto_face(mut self) -> Self {
        self.auto_face = false;
        self
    }

    /// Re-seeds both input buffers with the controls held at a round reset,
    /// so buttons kept down across the reset do not fire again.
    pub fn prime_inputs(
        &mut self,
        a: &FighterCore<'_>,
        b: &FighterCore<'_>,
        (held_a, held_b): (Controls, Controls),
    ) {
        let [buffer_a, buffer_b] = &mut self.buffers;
        buffer_a.prime(held_a, a.facing_right());
        buffer_b.prime(held_b, b.facing_right());
    }

    /// Steps both fighters `frames` times with prepared snapshots.
    ///
    /// # Errors
    ///
    /// Returns `SimError::CheckFailed` with the first frame whose check fails.
    pub fn run<I, C>(
        &mut self,
        a: &mut FighterCore<'_>,
        b: &mut FighterCore<'_>,
        frames: usize,
        mut inputs: I,
        check: C,
    ) -> Result<usize, SimError>
    where
        I: FnMut(usize) -> (InputSnapshot, InputSnapshot),
        C: FnMut(usize, &FighterCore<'_>, &FighterCore<'_>) -> bool,
    {
        drive(self.auto_face, a, b, frames, |frame, _, _| inputs(frame), check)
    }

    /// Like [`run`](Self::run), but captures raw world-relative controls
    /// through per-fighter [`InputBuffer`]s using each fighter's facing.
    ///
    /// # Errors
    ///
    /// Returns `SimError::CheckFailed` with the first frame whose check fails.
    pub fn run_raw<I, C>(
        &mut self,
        a: &mut FighterCore<'_>,
        b: &mut FighterCore<'_>,
        frames: usize,
        mut raw: I,
        check: C,
    ) -> Result<usize, SimError>
    where
        I: FnMut(usize) -> (Controls, Controls),
        C: FnMut(usize, &FighterCore<'_>, &FighterCore<'_>) -> bool,
    {
        let [buffer_a, buffer_b] = &mut self.buffers;
        drive(
            self.auto_face,
            a,
            b,
            frames,
            |frame, a, b| {
                let (raw_a, raw_b) = raw(frame);
                (
                    buffer_a.capture(raw_a, a.facing_right(), a.config().step_seconds()),
                    buffer_b.capture(raw_b, b.facing_right(), b.config().step_seconds()),
                )
            },
            check,
        )
    }

    /// Steps a single fighter with raw controls; facing is left as is.
    ///
    /// # Errors
    ///
    /// Returns `SimError::CheckFailed` with the first frame whose check fails.
    pub fn run_solo<I, C>(
        &mut self,
        fighter: &mut FighterCore<'_>,
        frames: usize,
        mut raw: I,
        mut check: C,
    ) -> Result<usize, SimError>
    where
        I: FnMut(usize) -> Controls,
        C: FnMut(usize, &FighterCore<'_>) -> bool,
    {
        let buffer = &mut self.buffers[0];
        for frame in 0..frames {
            let input = buffer.capture(
                raw(frame),
                fighter.facing_right(),
                fighter.config().step_seconds(),
            );
            fighter.tick(&input);
            if !check(frame, fighter) {
                tracing::warn!(frame, fighter = ?fighter, "sim check failed");
                return Err(SimError::CheckFailed { frame });
            }
        }
        Ok(frames)
    }
}

impl Default for SimHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn drive<I, C>(
    auto_face: bool,
    a: &mut FighterCore<'_>,
    b: &mut FighterCore<'_>,
    frames: usize,
    mut inputs: I,
    mut check: C,
) -> Result<usize, SimError>
where
    I: FnMut(usize, &FighterCore<'_>, &FighterCore<'_>) -> (InputSnapshot, InputSnapshot),
    C: FnMut(usize, &FighterCore<'_>, &FighterCore<'_>) -> bool,
{
    for frame in 0..frames {
        if auto_face {
            face_each_other(a, b);
        }
        let (input_a, input_b) = inputs(frame, a, b);
        a.tick(&input_a);
        b.tick(&input_b);
        if !check(frame, a, b) {
            tracing::warn!(frame, a = ?a, b = ?b, "sim check failed");
            return Err(SimError::CheckFailed { frame });
        }
    }
    Ok(frames)
}

//! Run meter (stamina) economy.

use crate::config::MeterConfig;
use crate::input::{Controls, InputSnapshot};
use crate::state::FighterState;
use crate::timer::Countdown;

/// Outcome of one meter update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeterChange {
    Unchanged,
    Drained,
    Refilled,
    /// Running emptied the meter; crush lockout and restart latch are set.
    Crushed,
}

/// Stamina resource driving running and, optionally, blocking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunMeter {
    value: f32,
    crush: Countdown,
    must_release_run: bool,
}

impl RunMeter {
    pub fn full(config: &MeterConfig) -> Self {
        Self {
            value: config.capacity,
            crush: Countdown::STOPPED,
            must_release_run: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Remaining crush lockout in seconds.
    pub fn crush_timer(&self) -> f32 {
        self.crush.remaining()
    }

    pub fn is_crushed(&self) -> bool {
        self.crush.is_running()
    }

    pub fn must_release_run(&self) -> bool {
        self.must_release_run
    }

    /// Running needs meter above the threshold, no lockout and a released latch.
    pub fn can_run(&self, config: &MeterConfig) -> bool {
        !self.is_crushed() && !self.must_release_run && self.value > config.run_threshold
    }

    pub fn tick_crush(&mut self, dt: f32) {
        self.crush.advance(dt);
    }

    /// Applies one step of drain or refill for the state the fighter is in.
    pub fn update(
        &mut self,
        config: &MeterConfig,
        state: FighterState,
        input: &InputSnapshot,
        dt: f32,
    ) -> MeterChange {
        if !input.is_held(Controls::RUN) {
            self.must_release_run = false;
        }

        if state == FighterState::Running && input.is_held(Controls::RUN | Controls::FORWARD) {
            self.value = (self.value - config.drain_running * dt).max(0.0);
            if self.value <= config.run_threshold {
                self.value = 0.0;
                self.crush.arm(config.crush_lockout_secs);
                self.must_release_run = true;
                return MeterChange::Crushed;
            }
            return MeterChange::Drained;
        }

        if state.is_blocking() && input.is_held(Controls::BLOCK) {
            if !config.blocking_drains {
                return MeterChange::Unchanged;
            }
            self.value = (self.value - config.drain_blocking * dt).max(0.0);
            return MeterChange::Drained;
        }

        let refills = matches!(
            state,
            FighterState::Idle | FighterState::Walking | FighterState::Crouch
        );
        if refills && !self.is_crushed() && self.value < config.capacity {
            self.value = (self.value + config.refill * dt).min(config.capacity);
            return MeterChange::Refilled;
        }
        MeterChange::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn running() -> InputSnapshot {
        InputSnapshot::NEUTRAL.holding(Controls::RUN | Controls::FORWARD | Controls::RIGHT)
    }

    #[test]
    fn running_drains_until_crushed() {
        let config = MeterConfig::default();
        let mut meter = RunMeter::full(&config);
        let mut steps = 0;
        loop {
            steps += 1;
            match meter.update(&config, FighterState::Running, &running(), DT) {
                MeterChange::Drained => assert!(meter.value() > 0.0),
                MeterChange::Crushed => break,
                other => panic!("unexpected {other:?}"),
            }
            assert!(steps < 200);
        }
        assert_eq!(steps, 128);
        assert_eq!(meter.value(), 0.0);
        assert!(meter.is_crushed());
        assert!((meter.crush_timer() - config.crush_lockout_secs).abs() < 1e-6);
        assert!(!meter.can_run(&config));
    }

    #[test]
    fn oversized_drain_stops_at_empty() {
        let config = MeterConfig {
            drain_running: 10_000.0,
            run_threshold: 0.0,
            ..MeterConfig::default()
        };
        let mut meter = RunMeter::full(&config);
        assert_eq!(
            meter.update(&config, FighterState::Running, &running(), DT),
            MeterChange::Crushed
        );
        assert_eq!(meter.value(), 0.0);
    }

    #[test]
    fn latch_clears_only_when_run_released() {
        let config = MeterConfig::default();
        let mut meter = RunMeter::full(&config);
        meter.value = 0.005;
        meter.update(&config, FighterState::Running, &running(), DT);
        for _ in 0..30 {
            meter.tick_crush(DT);
            meter.update(&config, FighterState::Walking, &running(), DT);
        }
        assert!(!meter.is_crushed());
        assert!(meter.must_release_run());
        assert!(!meter.can_run(&config));

        meter.update(&config, FighterState::Walking, &InputSnapshot::NEUTRAL, DT);
        assert!(!meter.must_release_run());
        assert!(meter.can_run(&config));
    }

    #[test]
    fn blocking_drain_follows_policy() {
        let mut config = MeterConfig::default();
        let block = InputSnapshot::NEUTRAL.holding(Controls::BLOCK);

        let mut meter = RunMeter::full(&config);
        meter.update(&config, FighterState::BlockingHigh, &block, DT);
        assert!(meter.value() < config.capacity);

        config.blocking_drains = false;
        let mut meter = RunMeter::full(&config);
        assert_eq!(
            meter.update(&config, FighterState::BlockingLow, &block, DT),
            MeterChange::Unchanged
        );
        assert_eq!(meter.value(), config.capacity);
    }

    #[test]
    fn refill_only_in_calm_states() {
        let config = MeterConfig::default();
        let mut meter = RunMeter::full(&config);
        meter.value = 10.0;
        meter.update(&config, FighterState::Attacking, &InputSnapshot::NEUTRAL, DT);
        assert_eq!(meter.value(), 10.0);
        meter.update(&config, FighterState::Crouch, &InputSnapshot::NEUTRAL, DT);
        assert!((meter.value() - 11.0).abs() < 1e-4);

        meter.crush.arm(0.1);
        meter.update(&config, FighterState::Idle, &InputSnapshot::NEUTRAL, DT);
        assert!((meter.value() - 11.0).abs() < 1e-4);
    }
}

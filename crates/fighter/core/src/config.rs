//! Fighter configuration constants and tunable parameters.
//!
//! Frame-data tables are authored in frames; everything else that is tuned by
//! feel (speeds, meter rates, lockouts) is authored in seconds or units per
//! second. [`FighterConfig::step_seconds`] bridges the two.

/// Complete per-fighter tuning. One instance is shared by both fighters in a
/// typical match, but nothing prevents asymmetric configs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FighterConfig {
    /// Fixed simulation rate in steps per second.
    pub step_hz: u32,
    pub max_health: u32,
    pub movement: MovementConfig,
    pub meter: MeterConfig,
    pub combat: CombatConfig,
    pub mercy: MercyConfig,
}

impl FighterConfig {
    // ===== compile-time constants used as type parameters =====
    /// Capacity of the per-fighter diagnostics ring.
    pub const MAX_DIAGNOSTICS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STEP_HZ: u32 = 60;
    pub const DEFAULT_MAX_HEALTH: u32 = 1000;

    pub fn new() -> Self {
        Self {
            step_hz: Self::DEFAULT_STEP_HZ,
            max_health: Self::DEFAULT_MAX_HEALTH,
            movement: MovementConfig::default(),
            meter: MeterConfig::default(),
            combat: CombatConfig::default(),
            mercy: MercyConfig::default(),
        }
    }

    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Duration of one simulation step in seconds.
    pub fn step_seconds(&self) -> f32 {
        1.0 / self.step_hz as f32
    }

    pub fn frames_to_seconds(&self, frames: u32) -> f32 {
        frames as f32 * self.step_seconds()
    }

    /// Rounds to the nearest whole step.
    pub fn seconds_to_frames(&self, seconds: f32) -> u32 {
        (seconds * self.step_hz as f32).round().max(0.0) as u32
    }

    /// Checks internal consistency of the tuning values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_hz == 0 {
            return Err(ConfigError::ZeroStepRate);
        }
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if self.meter.capacity.is_nan() || self.meter.capacity <= 0.0 {
            return Err(ConfigError::NonPositiveMeterCapacity(self.meter.capacity));
        }
        let threshold = self.meter.run_threshold;
        if !threshold.is_finite() || threshold < 0.0 || threshold >= self.meter.capacity {
            return Err(ConfigError::RunThresholdOutOfRange(threshold));
        }
        let rates = [
            ("meter.drain_running", self.meter.drain_running),
            ("meter.drain_blocking", self.meter.drain_blocking),
            ("meter.refill", self.meter.refill),
            ("meter.crush_lockout_secs", self.meter.crush_lockout_secs),
            ("movement.gravity", self.movement.gravity),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeRate { field, value });
            }
        }
        if self.mercy.restore_percent == 0 || self.mercy.restore_percent > 100 {
            return Err(ConfigError::RestorePercentOutOfRange(
                self.mercy.restore_percent,
            ));
        }
        if self.mercy.tap_threshold == 0 {
            return Err(ConfigError::ZeroTapThreshold);
        }
        if self.combat.chip_divisor == 0 {
            return Err(ConfigError::ZeroChipDivisor);
        }
        Ok(())
    }
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ground movement, jumping and gravity. Speeds are units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    pub walk_forward_speed: f32,
    pub walk_back_speed: f32,
    pub run_speed: f32,
    pub back_dash_speed: f32,
    pub jump_up_velocity: f32,
    pub jump_forward_velocity: f32,
    pub jump_back_velocity: f32,
    pub jump_startup_frames: u32,
    /// Steps after landing during which a held Up does not re-jump.
    pub land_lock_frames: u32,
    pub gravity: f32,
    pub ground_y: f32,
}

impl MovementConfig {
    pub const DEFAULT_WALK_FORWARD_SPEED: f32 = 3.5;
    pub const DEFAULT_WALK_BACK_SPEED: f32 = 2.5;
    pub const DEFAULT_RUN_SPEED: f32 = 6.0;
    pub const DEFAULT_BACK_DASH_SPEED: f32 = 6.0;
    pub const DEFAULT_JUMP_UP_VELOCITY: f32 = 7.0;
    pub const DEFAULT_JUMP_FORWARD_VELOCITY: f32 = 6.0;
    pub const DEFAULT_JUMP_BACK_VELOCITY: f32 = 5.0;
    pub const DEFAULT_JUMP_STARTUP_FRAMES: u32 = 7;
    pub const DEFAULT_LAND_LOCK_FRAMES: u32 = 4;
    pub const DEFAULT_GRAVITY: f32 = 25.0;
    pub const DEFAULT_GROUND_Y: f32 = 0.0;
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_forward_speed: Self::DEFAULT_WALK_FORWARD_SPEED,
            walk_back_speed: Self::DEFAULT_WALK_BACK_SPEED,
            run_speed: Self::DEFAULT_RUN_SPEED,
            back_dash_speed: Self::DEFAULT_BACK_DASH_SPEED,
            jump_up_velocity: Self::DEFAULT_JUMP_UP_VELOCITY,
            jump_forward_velocity: Self::DEFAULT_JUMP_FORWARD_VELOCITY,
            jump_back_velocity: Self::DEFAULT_JUMP_BACK_VELOCITY,
            jump_startup_frames: Self::DEFAULT_JUMP_STARTUP_FRAMES,
            land_lock_frames: Self::DEFAULT_LAND_LOCK_FRAMES,
            gravity: Self::DEFAULT_GRAVITY,
            ground_y: Self::DEFAULT_GROUND_Y,
        }
    }
}

/// Run meter economy. Rates are meter units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeterConfig {
    pub capacity: f32,
    pub drain_running: f32,
    pub drain_blocking: f32,
    pub refill: f32,
    /// Lockout applied when running empties the meter.
    pub crush_lockout_secs: f32,
    /// Running needs strictly more than this much meter.
    pub run_threshold: f32,
    /// Whether holding a block costs meter.
    pub blocking_drains: bool,
}

impl MeterConfig {
    pub const DEFAULT_CAPACITY: f32 = 128.0;
    pub const DEFAULT_DRAIN_RUNNING: f32 = 60.0;
    pub const DEFAULT_DRAIN_BLOCKING: f32 = 30.0;
    pub const DEFAULT_REFILL: f32 = 60.0;
    pub const DEFAULT_CRUSH_LOCKOUT_SECS: f32 = 0.25;
    pub const DEFAULT_RUN_THRESHOLD: f32 = 0.01;
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            drain_running: Self::DEFAULT_DRAIN_RUNNING,
            drain_blocking: Self::DEFAULT_DRAIN_BLOCKING,
            refill: Self::DEFAULT_REFILL,
            crush_lockout_secs: Self::DEFAULT_CRUSH_LOCKOUT_SECS,
            run_threshold: Self::DEFAULT_RUN_THRESHOLD,
            blocking_drains: true,
        }
    }
}

/// Hit and block resolution tables, indexed by [`AttackPower`](crate::env::AttackPower).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Block-stun frames for Light, Medium, Heavy, Special.
    pub block_stun_frames: [u32; 4],
    /// Push-back distance in units for Light, Medium, Heavy, Special.
    pub block_pushback: [f32; 4],
    pub chip_divisor: u32,
    /// Used when a move references a reaction the table does not know.
    pub fallback_hit_stun_frames: u32,
    /// Knockdown length for a non-lethal knockdown with no reaction delay.
    pub knockdown_frames: u32,
    /// Knockdown length after a lethal hit. Longer than the mercy window.
    pub ko_knockdown_frames: u32,
}

impl CombatConfig {
    pub const DEFAULT_BLOCK_STUN_FRAMES: [u32; 4] = [6, 8, 10, 10];
    pub const DEFAULT_BLOCK_PUSHBACK: [f32; 4] = [1.0, 2.0, 3.0, 3.0];
    pub const DEFAULT_CHIP_DIVISOR: u32 = 4;
    pub const DEFAULT_FALLBACK_HIT_STUN_FRAMES: u32 = 10;
    pub const DEFAULT_KNOCKDOWN_FRAMES: u32 = 24;
    pub const DEFAULT_KO_KNOCKDOWN_FRAMES: u32 = 600;
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            block_stun_frames: Self::DEFAULT_BLOCK_STUN_FRAMES,
            block_pushback: Self::DEFAULT_BLOCK_PUSHBACK,
            chip_divisor: Self::DEFAULT_CHIP_DIVISOR,
            fallback_hit_stun_frames: Self::DEFAULT_FALLBACK_HIT_STUN_FRAMES,
            knockdown_frames: Self::DEFAULT_KNOCKDOWN_FRAMES,
            ko_knockdown_frames: Self::DEFAULT_KO_KNOCKDOWN_FRAMES,
        }
    }
}

/// Mercy window timing and restore amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MercyConfig {
    pub window_frames: u32,
    pub tap_threshold: u32,
    /// Health restored on mercy, as a percentage of max health.
    pub restore_percent: u32,
}

impl MercyConfig {
    pub const DEFAULT_WINDOW_FRAMES: u32 = 180;
    pub const DEFAULT_TAP_THRESHOLD: u32 = 3;
    pub const DEFAULT_RESTORE_PERCENT: u32 = 20;
}

impl Default for MercyConfig {
    fn default() -> Self {
        Self {
            window_frames: Self::DEFAULT_WINDOW_FRAMES,
            tap_threshold: Self::DEFAULT_TAP_THRESHOLD,
            restore_percent: Self::DEFAULT_RESTORE_PERCENT,
        }
    }
}

/// Invalid tuning detected by [`FighterConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("step rate must be non-zero")]
    ZeroStepRate,

    #[error("max health must be non-zero")]
    ZeroMaxHealth,

    #[error("meter capacity must be positive, got {0}")]
    NonPositiveMeterCapacity(f32),

    #[error("run threshold must lie in [0, capacity), got {0}")]
    RunThresholdOutOfRange(f32),

    #[error("{field} must be a finite non-negative value, got {value}")]
    NegativeRate { field: &'static str, value: f32 },

    #[error("mercy restore percent must be in 1..=100, got {0}")]
    RestorePercentOutOfRange(u32),

    #[error("mercy tap threshold must be non-zero")]
    ZeroTapThreshold,

    #[error("chip divisor must be non-zero")]
    ZeroChipDivisor,
}

impl crate::error::GameError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            ZeroStepRate => "CONFIG_ZERO_STEP_RATE",
            ZeroMaxHealth => "CONFIG_ZERO_MAX_HEALTH",
            NonPositiveMeterCapacity(_) => "CONFIG_NON_POSITIVE_METER_CAPACITY",
            RunThresholdOutOfRange(_) => "CONFIG_RUN_THRESHOLD_OUT_OF_RANGE",
            NegativeRate { .. } => "CONFIG_NEGATIVE_RATE",
            RestorePercentOutOfRange(_) => "CONFIG_RESTORE_PERCENT_OUT_OF_RANGE",
            ZeroTapThreshold => "CONFIG_ZERO_TAP_THRESHOLD",
            ZeroChipDivisor => "CONFIG_ZERO_CHIP_DIVISOR",
        }
    }
}

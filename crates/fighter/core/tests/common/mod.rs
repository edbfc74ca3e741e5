#![allow(dead_code)]

use fighter_core::{
    AttackPower, Controls, FighterConfig, FighterCore, FrameDataTables, InputSnapshot,
    MoveFrameData, MoveTable, MoveTag, ReactionFrameData, ReactionTable, ReactionType, ThrowData,
    ThrowTable, ThrowTag, Vec2,
};

pub const DT: f32 = 1.0 / 60.0;

pub fn arcade_moves() -> MoveTable {
    MoveTable::new([
        MoveFrameData::new(MoveTag::HighPunch, 5, 3, 9, 5)
            .with_reaction(ReactionType::HitHigh)
            .with_power(AttackPower::Light),
        MoveFrameData::new(MoveTag::LowPunch, 3, 3, 8, 4)
            .with_reaction(ReactionType::HitLow)
            .with_power(AttackPower::Light),
        MoveFrameData::new(MoveTag::HighKick, 7, 3, 12, 10)
            .with_reaction(ReactionType::HitHigh)
            .with_power(AttackPower::Medium),
        MoveFrameData::new(MoveTag::LowKick, 5, 3, 10, 8)
            .with_reaction(ReactionType::HitLow)
            .with_power(AttackPower::Medium),
        MoveFrameData::new(MoveTag::SweepKick, 9, 4, 18, 12)
            .with_reaction(ReactionType::SweepKnockdown)
            .with_power(AttackPower::Heavy)
            .with_knockdown(),
        MoveFrameData::new(MoveTag::Uppercut, 8, 4, 22, 15)
            .with_reaction(ReactionType::Popup)
            .with_power(AttackPower::Heavy),
        MoveFrameData::new(MoveTag::Roundhouse, 10, 5, 24, 18)
            .with_reaction(ReactionType::Knockback)
            .with_power(AttackPower::Heavy),
        MoveFrameData::new(MoveTag::BackDash, 0, 4, 8, 0)
            .with_unblockable()
            .with_no_chip(),
        MoveFrameData::new(MoveTag::WakeupRoll, 4, 6, 10, 0),
    ])
}

pub fn arcade_reactions() -> ReactionTable {
    ReactionTable::new([
        ReactionFrameData::new(ReactionType::None, 0, 0),
        ReactionFrameData::new(ReactionType::HitHigh, 7, 4),
        ReactionFrameData::new(ReactionType::HitLow, 6, 4),
        ReactionFrameData::new(ReactionType::SweepKnockdown, 10, 0).with_knockdown_delay(24),
        ReactionFrameData::new(ReactionType::Popup, 16, 0).with_air_stun(20),
        ReactionFrameData::new(ReactionType::Knockback, 19, 0),
    ])
}

pub fn throw(tag: ThrowTag, toss_x: f32) -> ThrowData {
    ThrowData {
        tag,
        startup: 4,
        execute: 14,
        recovery: 16,
        damage_full: 18,
        damage_soft: 6,
        knockdown_delay: 24,
        escape_window: 2,
        toss: Vec2::new(toss_x, 0.0),
    }
}

pub fn arcade_throws() -> ThrowTable {
    ThrowTable::new([throw(ThrowTag::Forward, 3.0), throw(ThrowTag::Reverse, -3.0)])
}

pub fn arcade_tables() -> FrameDataTables {
    FrameDataTables::new(arcade_moves(), arcade_reactions(), arcade_throws())
}

pub fn fighter(tables: &FrameDataTables) -> FighterCore<'_> {
    fighter_with(tables, FighterConfig::default())
}

pub fn fighter_with(tables: &FrameDataTables, config: FighterConfig) -> FighterCore<'_> {
    FighterCore::new(tables.env(), config).expect("arcade tables build a fighter")
}

/// Two fighters one unit apart, facing each other.
pub fn pair(tables: &FrameDataTables) -> (FighterCore<'_>, FighterCore<'_>) {
    let mut a = fighter(tables);
    let mut b = fighter(tables);
    a.spawn_at(Vec2::new(0.0, 0.0), true);
    b.spawn_at(Vec2::new(1.0, 0.0), false);
    (a, b)
}

pub fn hold(controls: Controls) -> InputSnapshot {
    InputSnapshot::NEUTRAL.holding(controls)
}

pub fn press(controls: Controls) -> InputSnapshot {
    InputSnapshot::NEUTRAL.pressing(controls)
}

pub fn idle_for(fighter: &mut FighterCore<'_>, steps: usize) {
    for _ in 0..steps {
        fighter.tick(&InputSnapshot::NEUTRAL);
    }
}

pub fn move_data(tag: MoveTag) -> MoveFrameData {
    use fighter_core::MoveOracle;
    arcade_moves()
        .try_get_move(tag)
        .expect("arcade table has every move")
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Routes core logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

mod common;

use common::*;
use fighter_core::{
    Controls, FighterError, FighterState, FrameDataTables, InputSnapshot, MovePhase, MoveTag,
    ThrowTable, ThrowTag, Vec2,
};

#[test]
fn high_punch_runs_its_full_frame_count() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);

    f.tick(&press(Controls::HIGH_PUNCH));
    assert_eq!(f.state(), FighterState::Attacking);
    assert_eq!(f.phase(), Some(MovePhase::Startup));
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::HighPunch));

    for step in 1..=16 {
        f.tick(&InputSnapshot::NEUTRAL);
        assert_eq!(f.state(), FighterState::Attacking, "step {step}");
        assert!(f.is_move_data_valid(), "step {step}");
        let expected = match step {
            1..=4 => MovePhase::Startup,
            5..=7 => MovePhase::Active,
            _ => MovePhase::Recovery,
        };
        assert_eq!(f.phase(), Some(expected), "step {step}");
    }

    f.tick(&InputSnapshot::NEUTRAL);
    assert_eq!(f.state(), FighterState::Idle);
    assert!(f.current_move().is_none());
    assert_eq!(f.phase(), None);
}

#[test]
fn attacks_hold_still_and_ignore_new_presses() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);

    f.tick(&press(Controls::LOW_PUNCH).holding(Controls::FORWARD));
    assert_eq!(f.velocity().x, 0.0);
    f.tick(&press(Controls::HIGH_KICK).holding(Controls::FORWARD));
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::LowPunch));
    assert_eq!(f.velocity().x, 0.0);
    assert_eq!(f.position().x, 0.0);
}

#[test]
fn crouching_high_punch_becomes_uppercut() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);

    f.tick(&press(Controls::HIGH_PUNCH).holding(Controls::DOWN));
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::Uppercut));
}

#[test]
fn back_variants_select_roundhouse_and_sweep() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);
    f.tick(&press(Controls::HIGH_KICK).holding(Controls::BACK));
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::Roundhouse));

    let mut g = fighter(&tables);
    g.tick(&press(Controls::LOW_KICK).holding(Controls::BACK));
    assert_eq!(g.current_move().map(|m| m.tag), Some(MoveTag::SweepKick));
}

#[test]
fn crouching_low_kick_rolls() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);

    f.tick(&press(Controls::LOW_KICK).holding(Controls::DOWN | Controls::BACK));
    assert_eq!(f.state(), FighterState::Attacking);
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::WakeupRoll));

    idle_for(&mut f, 20);
    assert_eq!(f.state(), FighterState::Idle);

    let mut moves = arcade_moves();
    moves.remove(MoveTag::WakeupRoll);
    let tables = FrameDataTables::new(moves, arcade_reactions(), arcade_throws());
    let mut g = fighter(&tables);
    g.tick(&press(Controls::LOW_KICK).holding(Controls::DOWN));
    assert_eq!(g.current_move().map(|m| m.tag), Some(MoveTag::LowKick));
    assert!(g.diagnostics().is_empty());
}

#[test]
fn missing_variant_falls_back_to_base_move() {
    let mut moves = arcade_moves();
    moves.remove(MoveTag::Uppercut);
    let tables = FrameDataTables::new(moves, arcade_reactions(), arcade_throws());
    let mut f = fighter(&tables);

    f.tick(&press(Controls::HIGH_PUNCH).holding(Controls::DOWN));
    assert_eq!(f.state(), FighterState::Attacking);
    assert_eq!(f.current_move().map(|m| m.tag), Some(MoveTag::HighPunch));
    assert!(f.diagnostics().is_empty());
}

#[test]
fn missing_move_data_is_recorded_and_nothing_starts() {
    init_tracing();
    let mut moves = arcade_moves();
    moves.remove(MoveTag::LowKick);
    let tables = FrameDataTables::new(moves, arcade_reactions(), arcade_throws());
    let mut f = fighter(&tables);

    f.tick(&press(Controls::LOW_KICK));
    assert_eq!(f.state(), FighterState::Idle);
    assert!(f.current_move().is_none());
    assert_eq!(f.diagnostics(), &[FighterError::MissingMoveData(MoveTag::LowKick)]);

    // Holding is not a new edge.
    f.tick(&hold(Controls::LOW_KICK));
    assert_eq!(f.diagnostics().len(), 1);

    let drained = f.drain_diagnostics();
    assert_eq!(drained.len(), 1);
    assert!(f.diagnostics().is_empty());
}

#[test]
fn back_dash_moves_away_then_stops() {
    let tables = arcade_tables();
    let mut f = fighter(&tables);

    f.tick(&hold(Controls::BACK).with_double_tap_back());
    assert_eq!(f.state(), FighterState::BackDash);
    assert_eq!(f.phase(), Some(MovePhase::Active));
    assert!(approx(f.velocity().x, -6.0));

    for _ in 0..4 {
        f.tick(&InputSnapshot::NEUTRAL);
    }
    assert_eq!(f.phase(), Some(MovePhase::Recovery));
    assert_eq!(f.velocity().x, 0.0);
    assert!(approx(f.position().x, -0.4));

    idle_for(&mut f, 8);
    assert_eq!(f.state(), FighterState::Idle);
    assert!(approx(f.position().x, -0.4));
}

#[test]
fn forward_throw_slams_after_execute_frames() {
    let tables = arcade_tables();
    let (mut a, mut b) = pair(&tables);

    a.tick(&press(Controls::HIGH_PUNCH | Controls::HIGH_KICK));
    assert_eq!(a.state(), FighterState::ThrowStartup);
    let throw = *a.current_throw().expect("throw in progress");
    assert_eq!(throw.tag, ThrowTag::Forward);

    assert!(b.receive_throw(&throw, &a));
    assert_eq!(b.state(), FighterState::Thrown);

    for _ in 0..13 {
        b.tick(&InputSnapshot::NEUTRAL);
    }
    assert_eq!(b.state(), FighterState::Thrown);
    assert_eq!(b.health(), 1000);

    b.tick(&InputSnapshot::NEUTRAL);
    assert_eq!(b.state(), FighterState::Knockdown);
    assert_eq!(b.health(), 982);
    assert!(approx(b.position().x, 4.0));

    idle_for(&mut b, 24);
    assert_eq!(b.state(), FighterState::Idle);
}

#[test]
fn thrower_cycles_startup_execute_recovery() {
    let tables = arcade_tables();
    let mut a = fighter(&tables);

    a.tick(&press(Controls::HIGH_PUNCH | Controls::HIGH_KICK));
    idle_for(&mut a, 3);
    assert_eq!(a.state(), FighterState::ThrowStartup);
    a.tick(&InputSnapshot::NEUTRAL);
    assert_eq!(a.state(), FighterState::Throwing);
    assert_eq!(a.phase(), Some(MovePhase::Active));

    idle_for(&mut a, 14);
    assert_eq!(a.phase(), Some(MovePhase::Recovery));
    idle_for(&mut a, 15);
    assert_eq!(a.state(), FighterState::Throwing);
    a.tick(&InputSnapshot::NEUTRAL);
    assert_eq!(a.state(), FighterState::Idle);
    assert!(a.current_throw().is_none());
}

#[test]
fn reverse_throw_tosses_the_other_way() {
    let tables = arcade_tables();
    let (mut a, mut b) = pair(&tables);

    a.tick(&press(Controls::HIGH_PUNCH | Controls::HIGH_KICK).holding(Controls::BACK));
    let throw = *a.current_throw().expect("throw in progress");
    assert_eq!(throw.tag, ThrowTag::Reverse);

    assert!(b.receive_throw(&throw, &a));
    idle_for(&mut b, 14);
    assert_eq!(b.state(), FighterState::Knockdown);
    assert!(approx(b.position().x, -2.0));
}

#[test]
fn slam_toss_displaces_and_the_victim_falls_back() {
    let tables = arcade_tables();
    let (a, mut b) = pair(&tables);
    let mut lift = throw(ThrowTag::Forward, 3.0);
    lift.toss = Vec2::new(3.0, 1.0);

    assert!(b.receive_throw(&lift, &a));
    idle_for(&mut b, 14);
    assert_eq!(b.state(), FighterState::Knockdown);
    assert!(b.is_airborne());
    assert!(b.position().y > 0.9);
    assert!(approx(b.position().x, 4.0));

    idle_for(&mut b, 20);
    assert_eq!(b.state(), FighterState::Knockdown);
    assert!(!b.is_airborne());
    assert_eq!(b.position().y, 0.0);
    assert!(approx(b.position().x, 4.0));

    idle_for(&mut b, 4);
    assert_eq!(b.state(), FighterState::Idle);
}

#[test]
fn punch_inside_escape_window_techs() {
    let tables = arcade_tables();
    let (a, mut b) = pair(&tables);
    let throw = throw(ThrowTag::Forward, 3.0);

    assert!(b.receive_throw(&throw, &a));
    b.tick(&InputSnapshot::NEUTRAL);
    b.tick(&press(Controls::LOW_PUNCH));
    assert_eq!(b.state(), FighterState::Idle);
    assert_eq!(b.health(), 994);
    assert!(approx(b.position().x, 1.0));
}

#[test]
fn punch_after_escape_window_is_too_late() {
    let tables = arcade_tables();
    let (a, mut b) = pair(&tables);
    let throw = throw(ThrowTag::Forward, 3.0);

    assert!(b.receive_throw(&throw, &a));
    idle_for(&mut b, 2);
    b.tick(&press(Controls::HIGH_PUNCH));
    assert_eq!(b.state(), FighterState::Thrown);
    assert_eq!(b.health(), 1000);
}

#[test]
fn stunned_or_airborne_fighters_cannot_be_thrown() {
    let tables = arcade_tables();
    let (mut a, mut b) = pair(&tables);
    let throw = throw(ThrowTag::Forward, 3.0);

    b.receive_hit(&move_data(MoveTag::HighPunch), false, &mut a);
    assert_eq!(b.state(), FighterState::HitStun);
    assert!(!b.receive_throw(&throw, &a));
    assert_eq!(b.state(), FighterState::HitStun);

    let mut c = fighter(&tables);
    c.tick(&press(Controls::UP));
    idle_for(&mut c, 7);
    assert_eq!(c.state(), FighterState::Jumping);
    assert!(!c.receive_throw(&throw, &a));
}

#[test]
fn missing_throw_data_is_recorded() {
    init_tracing();
    let tables = FrameDataTables::new(arcade_moves(), arcade_reactions(), ThrowTable::default());
    let mut f = fighter(&tables);

    f.tick(&press(Controls::HIGH_PUNCH | Controls::HIGH_KICK));
    assert_eq!(f.state(), FighterState::Idle);
    assert_eq!(f.diagnostics(), &[FighterError::MissingThrowData(ThrowTag::Forward)]);
}

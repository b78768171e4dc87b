//! Full goal and turn flows driven through the runtime.

use game_core::{AbilityKind, AiConfig, TeamId, TeamKind, UnitId, Vec3};
use goal_stack::{Goal, Status};
use runtime::ai::goals::{
    GoalAttack, GoalAttackTarget, GoalHuntTarget, GoalMoveToPosition, GoalStepFromCover,
    MSG_NO_PATH, MSG_PATH_READY,
};
use runtime::oracle::{LineNavigator, ProximityCoverOracle, WalledField};
use runtime::{BattleState, CoverMap, SenseKind, TurnRunner, UnitEventKind, UnitState};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn unit(id: u32, team: u32, pos: Vec3) -> UnitState {
    UnitState::new(UnitId(id), TeamId(team), TeamKind::Ai, pos)
}

fn walled_state(units: Vec<UnitState>, wall_x: f32) -> BattleState {
    let field = WalledField::new().with_wall(
        Vec3::new(wall_x, 0.0, -50.0),
        Vec3::new(wall_x, 0.0, 50.0),
    );
    BattleState::with_oracles(
        AiConfig::default(),
        units,
        CoverMap::empty(),
        Box::new(field),
        Box::new(LineNavigator::default()),
        Box::new(ProximityCoverOracle::default()),
    )
}

#[test]
fn attack_turn_fires_one_burst_and_finishes() {
    init_tracing();
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    let mut runner = TurnRunner::new(&state);

    let ticks = runner
        .run_turn(&mut state, 1.0, 50)
        .expect("turn should finish");
    assert!(ticks < 20, "attack turn took {ticks} ticks");

    let attacker = state.unit(UnitId(0));
    assert_eq!(state.target_of(UnitId(0)), Some(UnitId(1)));
    assert!(attacker.flags.has_attacked);
    // Exactly one burst left the magazine.
    assert_eq!(
        attacker.weapon.rounds_loaded,
        attacker.weapon.magazine_size - attacker.weapon.fire_rate
    );
    assert!(!attacker.is_attacking);
}

#[test]
fn attack_runs_for_exactly_the_fire_window() {
    let mut state = BattleState::new(
        AiConfig {
            fire_animation_secs: 3.0,
            ..AiConfig::default()
        },
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    state.set_target(UnitId(0), Some(UnitId(1)));

    // The burst leaves on the first tick.
    let mut goal = GoalAttack::new(UnitId(0));
    state.advance(1.0);
    assert_eq!(goal.process(&mut state), Status::Running);
    let after_burst = state.unit(UnitId(0)).weapon.rounds_loaded;

    // Then the goal holds for the 3 second window at 1 second ticks and
    // succeeds on the tick the window elapses, without firing again.
    for _ in 0..2 {
        state.advance(1.0);
        assert_eq!(goal.process(&mut state), Status::Running);
    }
    state.advance(1.0);
    assert_eq!(goal.process(&mut state), Status::Success);
    assert_eq!(state.unit(UnitId(0)).weapon.rounds_loaded, after_burst);
}

#[test]
fn lone_wounded_unit_spends_its_move_exploring() {
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            // Heal-bound so the armor evaluator stays out of the running.
            unit(0, 0, Vec3::ZERO).with_ability(AbilityKind::Heal),
            // Enemy far outside sight range: nothing to fight yet.
            unit(1, 1, Vec3::new(50.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    state.unit_mut(UnitId(0)).stats.health = 10.0;

    let mut runner = TurnRunner::new(&state);
    runner
        .run_turn(&mut state, 1.0, 50)
        .expect("turn should finish");

    let explorer = state.unit(UnitId(0));
    assert!(explorer.flags.has_moved);
    assert!(!explorer.flags.has_attacked);
    // The move budget was spent on actual travel.
    assert!(explorer.position.distance(Vec3::ZERO) > 9.0);
    assert!(!explorer.is_moving);
}

#[test]
fn possessed_unit_finishes_immediately_without_arbitration() {
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO).possessed(),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    let mut runner = TurnRunner::new(&state);

    let ticks = runner.run_turn(&mut state, 1.0, 5).expect("turn finishes");
    assert_eq!(ticks, 1);
    assert_eq!(state.target_of(UnitId(0)), None);
}

#[test]
fn dead_units_are_skipped_in_the_rotation() {
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO).possessed(),
            unit(1, 0, Vec3::new(2.0, 0.0, 0.0)).possessed(),
        ],
        CoverMap::empty(),
    );
    state.unit_mut(UnitId(0)).stats.apply_damage(150.0);

    let mut runner = TurnRunner::new(&state);
    let events = runner.step(&mut state, 1.0);

    assert_eq!(runner.active_unit(), None);
    assert!(events
        .iter()
        .any(|e| e.unit == UnitId(1) && e.kind == UnitEventKind::TurnFinished));
}

#[test]
fn terminating_an_attack_plan_clears_action_state() {
    let mut state = BattleState::new(
        AiConfig {
            fire_animation_secs: 10.0,
            ..AiConfig::default()
        },
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    state.set_target(UnitId(0), Some(UnitId(1)));

    let mut goal = GoalAttackTarget::new(UnitId(0));
    // Tick 1 builds the plan; tick 2 starts the attack proper.
    goal.process(&mut state);
    goal.process(&mut state);
    assert!(state.unit(UnitId(0)).is_attacking);
    assert_eq!(goal.status(), Status::Running);

    goal.terminate(&mut state);
    assert!(!state.unit(UnitId(0)).is_attacking);
    assert!(!state.unit(UnitId(0)).is_moving);
}

#[test]
fn hunting_walks_to_the_last_known_position() {
    let mut state = walled_state(
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(15.0, 0.0, 0.0)),
        ],
        // Wall between the two: the target is remembered, not seen.
        7.0,
    );
    state.set_target(UnitId(0), Some(UnitId(1)));
    state.observe(UnitId(0), UnitId(1), SenseKind::Sight);
    assert!(!state.is_target_visible(UnitId(0)));

    let mut goal = GoalHuntTarget::new(UnitId(0));
    let mut status = Status::Inactive;
    for _ in 0..10 {
        state.advance(1.0);
        status = goal.process(&mut state);
        if status.is_terminal() {
            break;
        }
    }

    assert_eq!(status, Status::Success);
    let hunter = state.unit(UnitId(0));
    assert!(hunter.flags.has_moved);
    // The chase is clipped to the move budget: 10 of the 15 units of
    // distance toward the last known position.
    assert!(hunter.position.distance(Vec3::new(10.0, 0.0, 0.0)) < 0.2);

    goal.terminate(&mut state);
    let events = state.drain_events();
    assert!(events
        .iter()
        .any(|e| e.unit == UnitId(0) && e.kind == UnitEventKind::MoveComplete));
    assert!(!state.unit(UnitId(0)).is_moving);
}

#[test]
fn move_to_position_listens_to_planner_messages() {
    init_tracing();
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![unit(0, 0, Vec3::ZERO)],
        CoverMap::empty(),
    );

    // A planning failure fails the whole move.
    let mut goal = GoalMoveToPosition::new(UnitId(0), Vec3::new(6.0, 0.0, 0.0));
    goal.process(&mut state);
    assert_eq!(goal.status(), Status::Running);
    assert!(!goal.handle_message(&mut state, "unknown_signal"));
    assert!(goal.handle_message(&mut state, MSG_NO_PATH));
    assert_eq!(goal.status(), Status::Failed);
    goal.terminate(&mut state);

    // A ready path hands the walk off; the goal winds down cleanly.
    let mut goal = GoalMoveToPosition::new(UnitId(0), Vec3::new(6.0, 0.0, 0.0));
    goal.process(&mut state);
    assert!(goal.handle_message(&mut state, MSG_PATH_READY));
    assert_eq!(goal.process(&mut state), Status::Success);
    assert!(!state.unit(UnitId(0)).is_moving);
}

#[test]
fn step_from_cover_is_a_no_op_when_the_shot_is_already_clear() {
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    state.set_target(UnitId(0), Some(UnitId(1)));
    assert!(state.is_target_shootable(UnitId(0)));

    let mut goal = GoalStepFromCover::new(UnitId(0));
    assert_eq!(goal.process(&mut state), Status::Success);
    assert!(!state.unit(UnitId(0)).flags.has_attacked);
}

#[test]
fn step_from_cover_fails_without_cover_to_step_from() {
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            // Out past sight range: a target but no shot.
            unit(1, 1, Vec3::new(40.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );
    state.set_target(UnitId(0), Some(UnitId(1)));

    let mut goal = GoalStepFromCover::new(UnitId(0));
    assert_eq!(goal.process(&mut state), Status::Failed);
}

#[test]
fn step_from_cover_completes_in_place_when_no_step_position_exists() {
    // The sidestep resolver has no per-direction cover data to work from
    // and never produces a candidate, so a covered unit with no shot just
    // finishes where it stands.
    let cover = CoverMap::new(vec![game_core::CoverPoint::new(Vec3::new(9.5, 0.0, 0.0))]);
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::new(9.0, 0.0, 0.0)),
            unit(1, 1, Vec3::new(40.0, 0.0, 0.0)),
        ],
        cover,
    );
    state.set_target(UnitId(0), Some(UnitId(1)));
    assert!(!state.is_target_shootable(UnitId(0)));

    let mut goal = GoalStepFromCover::new(UnitId(0));
    assert_eq!(goal.process(&mut state), Status::Success);

    let stander = state.unit(UnitId(0));
    assert!(stander.position.distance(Vec3::new(9.0, 0.0, 0.0)) < f32::EPSILON);
    assert!(!stander.flags.has_moved);
    assert!(!stander.flags.has_attacked);
}

#[test]
fn attack_turn_repositions_into_ideal_range_cover() {
    // Cover point 8 units from the enemy, inside the rifle's ideal band
    // [7, 12.6] and within the attacker's move budget.
    let cover = CoverMap::new(vec![game_core::CoverPoint::new(Vec3::new(4.0, 0.0, 0.0))]);
    let mut state = BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(12.0, 0.0, 0.0)),
        ],
        cover,
    );
    state.set_target(UnitId(0), Some(UnitId(1)));

    let mut runner = TurnRunner::new(&state);
    runner
        .run_turn(&mut state, 1.0, 50)
        .expect("turn should finish");

    let attacker = state.unit(UnitId(0));
    assert!(attacker.flags.has_moved);
    assert!(attacker.flags.has_attacked);
    assert!(attacker.position.distance(Vec3::new(4.0, 0.0, 0.0)) < 0.5);
    // Standing next to the cover point rates as actual cover.
    assert!(attacker.cover_quality > 0.0);
}

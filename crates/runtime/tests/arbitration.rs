//! Evaluator scoring and brain arbitration behavior.

use game_core::{
    AbilityKind, AiConfig, Archetype, Personality, TeamId, TeamKind, UnitId, Vec3, WeaponKind,
};
use goal_stack::Goal;
use runtime::ai::evaluators::{
    ArmorEvaluator, AttackTargetEvaluator, Evaluator, ExploreEvaluator, HealthEvaluator,
    HideEvaluator, ReloadEvaluator,
};
use runtime::ai::{Brain, GoalTag};
use runtime::{BattleState, CoverMap, UnitState};

fn unit(id: u32, team: u32, pos: Vec3) -> UnitState {
    UnitState::new(UnitId(id), TeamId(team), TeamKind::Ai, pos)
}

fn two_sided(distance: f32) -> BattleState {
    BattleState::new(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(distance, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    )
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn health_score_scales_with_missing_health() {
    let mut state = two_sided(10.0);
    state.unit_mut(UnitId(0)).stats.health = 10.0;

    let score = HealthEvaluator::new(1.0).desirability(&state, UnitId(0));
    assert_close(score, 0.18);

    // Spending the move zeroes the score; hiding needs a move.
    state.unit_mut(UnitId(0)).flags.has_moved = true;
    assert_close(HealthEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.0);
}

#[test]
fn attack_score_combines_condition_and_weapon() {
    let mut state = two_sided(10.0);
    state.set_target(UnitId(0), Some(UnitId(1)));

    // Full health, assault rifle strength 7: 1.0 * 0.7.
    let score = AttackTargetEvaluator::new(1.0).desirability(&state, UnitId(0));
    assert_close(score, 0.7);

    state.unit_mut(UnitId(0)).flags.has_attacked = true;
    assert_close(
        AttackTargetEvaluator::new(1.0).desirability(&state, UnitId(0)),
        0.0,
    );
}

#[test]
fn explore_is_silenced_by_engagement_and_by_moving() {
    let mut state = two_sided(10.0);
    assert_close(ExploreEvaluator::new(0.6).desirability(&state, UnitId(0)), 0.6);

    // Shootable target at 10m (inside rifle range): no reason to wander.
    state.set_target(UnitId(0), Some(UnitId(1)));
    assert_close(ExploreEvaluator::new(0.6).desirability(&state, UnitId(0)), 0.0);

    state.set_target(UnitId(0), None);
    state.unit_mut(UnitId(0)).flags.has_moved = true;
    assert_close(ExploreEvaluator::new(0.6).desirability(&state, UnitId(0)), 0.0);
}

#[test]
fn hide_score_needs_a_deficit_on_both_axes() {
    let mut state = two_sided(10.0);
    state.set_target(UnitId(0), Some(UnitId(1)));

    // Evenly matched: no reason to hide.
    assert_close(HideEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.0);

    // Rifle vs sniper, 40 health vs 100: 0.6 * 0.43.
    state.unit_mut(UnitId(0)).stats.health = 40.0;
    state.unit_mut(UnitId(1)).weapon = game_core::Weapon::new(WeaponKind::SniperRifle);
    assert_close(HideEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.258);

    // An edge on one axis floors at zero, it never offsets the other.
    state.unit_mut(UnitId(0)).stats.health = 100.0;
    state.unit_mut(UnitId(1)).stats.health = 40.0;
    assert_close(HideEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.0);

    // Hiding needs the move; it scores nothing once the move is spent.
    state.unit_mut(UnitId(1)).stats.health = 100.0;
    state.unit_mut(UnitId(0)).stats.health = 40.0;
    state.unit_mut(UnitId(0)).flags.has_moved = true;
    assert_close(HideEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.0);
}

#[test]
fn empty_magazine_forces_full_reload_score() {
    let mut state = two_sided(10.0);
    {
        let me = state.unit_mut(UnitId(0));
        me.flags.has_moved = true;
        me.weapon.rounds_loaded = 0;
    }

    assert_close(ReloadEvaluator::new(0.7).desirability(&state, UnitId(0)), 1.0);

    // Attack already spent: reloading is off the table entirely.
    state.unit_mut(UnitId(0)).flags.has_attacked = true;
    assert_close(ReloadEvaluator::new(0.7).desirability(&state, UnitId(0)), 0.0);
}

#[test]
fn partial_magazine_only_competes_when_a_threat_is_near() {
    let mut state = two_sided(10.0);
    {
        let me = state.unit_mut(UnitId(0));
        me.flags.has_moved = true;
        me.weapon.rounds_loaded = 15;
    }

    // No known threat nearby: top up freely.
    assert_close(ReloadEvaluator::new(1.0).desirability(&state, UnitId(0)), 1.0);

    // Remembered enemy inside sight range: score only by magazine deficit.
    state.set_target(UnitId(0), Some(UnitId(1)));
    state.observe(UnitId(0), UnitId(1), runtime::SenseKind::Sight);
    let score = ReloadEvaluator::new(1.0).desirability(&state, UnitId(0));
    assert_close(score, 0.5 * 0.2);
}

#[test]
fn armor_score_tracks_missing_health() {
    let mut state = two_sided(10.0);
    state.unit_mut(UnitId(0)).stats.health = 25.0;
    assert_close(ArmorEvaluator::new(1.0).desirability(&state, UnitId(0)), 0.75);

    // A unit bound to a different ability never proposes armor.
    let healer = unit(2, 0, Vec3::new(1.0, 0.0, 0.0)).with_ability(AbilityKind::Heal);
    let state = BattleState::new(
        AiConfig::default(),
        vec![healer],
        CoverMap::empty(),
    );
    assert_close(ArmorEvaluator::new(1.0).desirability(&state, UnitId(2)), 0.0);
}

#[test]
fn freshly_activated_brain_selects_a_target_first() {
    let mut state = two_sided(10.0);
    let mut brain = Brain::new(UnitId(0), Archetype::Neutral.into());

    brain.process(&mut state);

    assert_eq!(state.target_of(UnitId(0)), Some(UnitId(1)));
    // The finished selection is still at the front, with the requested
    // report queued behind it.
    assert_eq!(brain.front_tag(), Some(GoalTag::SelectTarget));
    assert_eq!(brain.goal_count(), 2);
}

#[test]
fn score_ties_go_to_the_later_registered_evaluator() {
    // Health 50 with these biases scores explore and armor both at 0.5;
    // armor is registered later and must win the tie.
    let personality = Personality {
        health_bias: 1.0,
        hide_bias: 0.5,
        explore_bias: 0.5,
        attack_bias: 0.5,
        reload_bias: 0.7,
    };

    let mut state = BattleState::new(
        AiConfig::default(),
        vec![unit(0, 0, Vec3::new(3.0, 0.0, 3.0))],
        CoverMap::empty(),
    );
    state.unit_mut(UnitId(0)).stats.health = 50.0;

    let mut brain = Brain::new(UnitId(0), personality);
    brain.process(&mut state); // target selection fails, arbitration runs
    brain.process(&mut state); // winner's goal executes

    assert!(state.unit(UnitId(0)).ability.in_use());
    assert!(!state.unit(UnitId(0)).flags.has_moved);
}

//! Memory lifetime and the targeting predicate ladder.

use game_core::{AbilityKind, AiConfig, TeamId, TeamKind, UnitId, Vec3};
use goal_stack::Goal;
use runtime::ai::goals::GoalReportTarget;
use runtime::oracle::{LineNavigator, ProximityCoverOracle, WalledField};
use runtime::{BattleState, CoverMap, SenseKind, UnitState};

fn unit(id: u32, team: u32, pos: Vec3) -> UnitState {
    UnitState::new(UnitId(id), TeamId(team), TeamKind::Ai, pos)
}

fn open_state(units: Vec<UnitState>) -> BattleState {
    BattleState::new(AiConfig::default(), units, CoverMap::empty())
}

#[test]
fn records_expire_after_the_forget_duration() {
    let mut state = BattleState::new(
        AiConfig {
            forget_duration: 10.0,
            ..AiConfig::default()
        },
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(5.0, 0.0, 0.0)),
        ],
        CoverMap::empty(),
    );

    state.observe(UnitId(0), UnitId(1), SenseKind::Sight);
    assert_eq!(
        state.recall_last_position(UnitId(0), UnitId(1)),
        Vec3::new(5.0, 0.0, 0.0)
    );

    state.advance(11.0);
    assert_eq!(state.recall_last_position(UnitId(0), UnitId(1)), Vec3::ZERO);
    assert_eq!(state.nearest_remembered_subject(UnitId(0)), None);
}

#[test]
fn dead_subjects_are_purged_on_recall() {
    let mut state = open_state(vec![
        unit(0, 0, Vec3::ZERO),
        unit(1, 1, Vec3::new(5.0, 0.0, 0.0)),
    ]);

    state.observe(UnitId(0), UnitId(1), SenseKind::Sight);
    state.unit_mut(UnitId(1)).stats.apply_damage(150.0);

    assert_eq!(state.recall_last_position(UnitId(0), UnitId(1)), Vec3::ZERO);
    assert!(state.unit(UnitId(0)).memory.is_empty());
}

#[test]
fn remembered_position_is_where_the_subject_was_seen() {
    let mut state = open_state(vec![
        unit(0, 0, Vec3::ZERO),
        unit(1, 1, Vec3::new(5.0, 0.0, 0.0)),
    ]);

    state.observe(UnitId(0), UnitId(1), SenseKind::Sight);
    // The subject moves after being seen; memory keeps the old position.
    state.unit_mut(UnitId(1)).position = Vec3::new(30.0, 0.0, 0.0);

    assert_eq!(
        state.recall_last_position(UnitId(0), UnitId(1)),
        Vec3::new(5.0, 0.0, 0.0)
    );
}

#[test]
fn gunfire_is_remembered_by_everyone_in_earshot() {
    let mut state = open_state(vec![
        unit(0, 0, Vec3::new(1.0, 0.0, 0.0)),
        unit(1, 1, Vec3::new(30.0, 0.0, 0.0)),
        // Well beyond the 50-unit hearing range.
        unit(2, 1, Vec3::new(200.0, 0.0, 0.0)),
    ]);
    state.advance(3.0);

    state.emit_noise(UnitId(0));

    assert_eq!(
        state.recall_last_position(UnitId(1), UnitId(0)),
        Vec3::new(1.0, 0.0, 0.0)
    );
    assert!(state.unit(UnitId(2)).memory.is_empty());
    // The shooter does not record itself.
    assert!(state.unit(UnitId(0)).memory.is_empty());
}

#[test]
fn target_predicates_form_a_ladder() {
    let mut state = open_state(vec![
        unit(0, 0, Vec3::ZERO),
        unit(1, 1, Vec3::new(18.0, 0.0, 0.0)),
    ]);

    // No target at all.
    assert!(!state.is_target_present(UnitId(0)));
    assert_eq!(state.target_position(UnitId(0)), Vec3::ZERO);

    // Present and visible (18 < sight 20), but outside rifle range 14.
    state.set_target(UnitId(0), Some(UnitId(1)));
    assert!(state.is_target_present(UnitId(0)));
    assert!(state.is_target_visible(UnitId(0)));
    assert!(!state.is_target_shootable(UnitId(0)));
    assert_eq!(
        state.target_position(UnitId(0)),
        Vec3::new(18.0, 0.0, 0.0)
    );

    // In range with rounds loaded: shootable.
    state.unit_mut(UnitId(1)).position = Vec3::new(10.0, 0.0, 0.0);
    assert!(state.is_target_shootable(UnitId(0)));

    // An empty magazine takes shootable away again.
    state.unit_mut(UnitId(0)).weapon.rounds_loaded = 0;
    assert!(state.is_target_visible(UnitId(0)));
    assert!(!state.is_target_shootable(UnitId(0)));

    // A dead target is not even present.
    state.unit_mut(UnitId(1)).stats.apply_damage(150.0);
    assert!(!state.is_target_present(UnitId(0)));
    assert_eq!(state.target_position(UnitId(0)), Vec3::ZERO);
}

#[test]
fn walls_and_stealth_break_visibility() {
    let field = WalledField::new().with_wall(
        Vec3::new(5.0, 0.0, -50.0),
        Vec3::new(5.0, 0.0, 50.0),
    );
    let mut state = BattleState::with_oracles(
        AiConfig::default(),
        vec![
            unit(0, 0, Vec3::ZERO),
            unit(1, 1, Vec3::new(10.0, 0.0, 0.0)),
            unit(2, 1, Vec3::new(0.0, 0.0, 10.0)).with_ability(AbilityKind::Stealth),
        ],
        CoverMap::empty(),
        Box::new(field),
        Box::new(LineNavigator::default()),
        Box::new(ProximityCoverOracle::default()),
    );

    // The wall sits between 0 and 1 but not between 0 and 2.
    assert!(!state.can_see(UnitId(0), UnitId(1)));
    assert!(state.can_see(UnitId(0), UnitId(2)));

    // An active stealth field hides the unit entirely.
    state
        .unit_mut(UnitId(2))
        .ability
        .trigger()
        .expect("stealth available");
    assert!(!state.can_see(UnitId(0), UnitId(2)));
}

#[test]
fn reported_targets_land_in_every_teammates_memory() {
    let mut state = open_state(vec![
        unit(0, 0, Vec3::ZERO),
        unit(1, 0, Vec3::new(2.0, 0.0, 0.0)),
        unit(2, 0, Vec3::new(4.0, 0.0, 0.0)),
        unit(3, 1, Vec3::new(10.0, 0.0, 0.0)),
    ]);
    state.set_target(UnitId(0), Some(UnitId(3)));

    let mut goal = GoalReportTarget::new(UnitId(0));
    let status = goal.process(&mut state);

    assert!(status.is_success());
    for teammate in [UnitId(1), UnitId(2)] {
        assert_eq!(
            state.recall_last_position(teammate, UnitId(3)),
            Vec3::new(10.0, 0.0, 0.0)
        );
    }
    // The reporter itself is not re-written by its own report.
    assert!(state.unit(UnitId(0)).memory.is_empty());
}

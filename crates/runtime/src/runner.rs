//! Cooperative turn scheduling.

use goal_stack::Goal;

use game_core::UnitId;

use crate::ai::Brain;
use crate::battle::{BattleState, UnitEvent, UnitEventKind};
use crate::error::RuntimeError;

/// Single-threaded scheduler driving one unit's brain at a time.
///
/// Each [`TurnRunner::step`] advances the match clock and navigation by one
/// slice, ticks the active unit's brain once, and drains the events goals
/// produced. When the active unit announces `TurnFinished`, the next living
/// unit in roster order is activated on the following step.
pub struct TurnRunner {
    brains: Vec<Brain>,
    active: Option<usize>,
    next_index: usize,
}

impl TurnRunner {
    /// Builds one brain per roster unit, in roster order.
    pub fn new(state: &BattleState) -> Self {
        let brains = state
            .units()
            .iter()
            .map(|u| Brain::new(u.id, u.personality))
            .collect();
        Self {
            brains,
            active: None,
            next_index: 0,
        }
    }

    pub fn active_unit(&self) -> Option<UnitId> {
        self.active.map(|i| self.brains[i].unit())
    }

    pub fn brain(&self, unit: UnitId) -> Option<&Brain> {
        self.brains.iter().find(|b| b.unit() == unit)
    }

    pub fn brain_mut(&mut self, unit: UnitId) -> Option<&mut Brain> {
        self.brains.iter_mut().find(|b| b.unit() == unit)
    }

    /// Advances the match by one tick.
    pub fn step(&mut self, state: &mut BattleState, dt: f32) -> Vec<UnitEvent> {
        state.advance(dt);

        if self.active.is_none() {
            self.rotate(state);
        }

        if let Some(index) = self.active {
            let brain = &mut self.brains[index];
            if state.unit(brain.unit()).is_alive() {
                brain.process(state);
            } else {
                // Died mid-turn; release the slot without a full turn.
                brain.terminate(state);
                state.push_event(brain.unit(), UnitEventKind::TurnFinished);
            }
        }

        let events = state.drain_events();
        for event in &events {
            if event.kind == UnitEventKind::TurnFinished && Some(event.unit) == self.active_unit()
            {
                self.active = None;
            }
        }
        events
    }

    /// Runs ticks until the current (or next) unit finishes its turn.
    ///
    /// Returns the number of ticks consumed, or an error when no unit is
    /// alive or the turn exceeds `max_ticks`.
    pub fn run_turn(
        &mut self,
        state: &mut BattleState,
        dt: f32,
        max_ticks: usize,
    ) -> Result<usize, RuntimeError> {
        if !state.units().iter().any(|u| u.is_alive()) {
            return Err(RuntimeError::NoActiveUnits);
        }

        for tick in 1..=max_ticks {
            let events = self.step(state, dt);
            if events
                .iter()
                .any(|e| e.kind == UnitEventKind::TurnFinished)
            {
                return Ok(tick);
            }
        }

        Err(RuntimeError::TurnStalled {
            unit: self.active_unit().unwrap_or(UnitId(0)),
            ticks: max_ticks,
        })
    }

    /// Activates the next living unit in roster order and resets its turn
    /// state.
    fn rotate(&mut self, state: &mut BattleState) {
        let count = self.brains.len();
        if count == 0 {
            self.active = None;
            return;
        }
        for _ in 0..count {
            let index = self.next_index % count;
            self.next_index = (self.next_index + 1) % count;

            if state.unit(self.brains[index].unit()).is_alive() {
                self.brains[index].begin_turn(state);
                self.active = Some(index);
                return;
            }
        }
        self.active = None;
    }
}

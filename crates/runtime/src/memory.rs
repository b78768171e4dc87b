//! Per-unit memory of other units.
//!
//! A unit does not reason about the live roster directly; it reasons about
//! what it has seen or heard. Each observed subject gets exactly one record
//! that is overwritten on every refresh, so the store never grows past the
//! roster size. Stale records are purged lazily whenever the store is read
//! through a sweeping accessor.

use game_core::{UnitId, Vec3};
use serde::{Deserialize, Serialize};

/// How a subject entered memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenseKind {
    Sight,
    Sound,
}

/// One remembered sighting (or sound) of a subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub subject: UnitId,
    pub position: Vec3,
    /// Match clock time of the observation.
    pub time: f32,
    pub sense: SenseKind,
}

/// A unit's memory of subjects it has perceived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    records: Vec<MemoryRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }

    pub fn contains(&self, subject: UnitId) -> bool {
        self.records.iter().any(|r| r.subject == subject)
    }

    /// Records (or refreshes) the observation of `subject`.
    pub fn update(&mut self, subject: UnitId, position: Vec3, time: f32, sense: SenseKind) {
        match self.records.iter_mut().find(|r| r.subject == subject) {
            Some(record) => {
                record.position = position;
                record.time = time;
                record.sense = sense;
            }
            None => self.records.push(MemoryRecord {
                subject,
                position,
                time,
                sense,
            }),
        }
    }

    /// Drops the record for `subject`, if any.
    pub fn remove(&mut self, subject: UnitId) {
        self.records.retain(|r| r.subject != subject);
    }

    /// Purges records older than `forget_duration` and records whose subject
    /// `is_gone` (dead or removed from the match).
    pub fn sweep(
        &mut self,
        now: f32,
        forget_duration: f32,
        mut is_gone: impl FnMut(UnitId) -> bool,
    ) {
        self.records
            .retain(|r| now - r.time < forget_duration && !is_gone(r.subject));
    }

    /// Last recorded position of `subject`, or [`Vec3::ZERO`] when the
    /// subject is not in memory.
    pub fn last_recorded_position(&self, subject: UnitId) -> Vec3 {
        self.records
            .iter()
            .find(|r| r.subject == subject)
            .map(|r| r.position)
            .unwrap_or(Vec3::ZERO)
    }

    /// Remembered subject closest to `from`, scanning every record.
    pub fn nearest_subject(&self, from: Vec3) -> Option<UnitId> {
        self.records
            .iter()
            .min_by(|a, b| {
                let da = from.distance_squared(a.position);
                let db = from.distance_squared(b.position);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|r| r.subject)
    }

    /// Position of the nearest remembered subject, or [`Vec3::ZERO`] when
    /// memory is empty.
    pub fn nearest_position(&self, from: Vec3) -> Vec3 {
        self.nearest_subject(from)
            .map(|s| self.last_recorded_position(s))
            .unwrap_or(Vec3::ZERO)
    }
}

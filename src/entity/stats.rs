//! Bounded pet stats
//!
//! Every write goes through [`PetStats::set`], which clamps to the
//! configured range, so no out-of-range value is ever observable.

use serde::{Deserialize, Serialize};

/// Inclusive range a stat is kept within
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: f32,
    pub max: f32,
}

impl Default for StatRange {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

impl StatRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Hunger,
    Energy,
    Happiness,
}

/// Hunger, energy and happiness of a single pet
///
/// Hunger rises toward `max` as the pet gets hungrier; energy and
/// happiness are "more is better".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStats {
    hunger: f32,
    energy: f32,
    happiness: f32,
    range: StatRange,
}

impl PetStats {
    pub fn new(hunger: f32, energy: f32, happiness: f32, range: StatRange) -> Self {
        Self {
            hunger: range.clamp(hunger),
            energy: range.clamp(energy),
            happiness: range.clamp(happiness),
            range,
        }
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn happiness(&self) -> f32 {
        self.happiness
    }

    pub fn range(&self) -> StatRange {
        self.range
    }

    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Hunger => self.hunger,
            StatKind::Energy => self.energy,
            StatKind::Happiness => self.happiness,
        }
    }

    /// Set a stat, clamped to the range. Returns the stored value.
    pub fn set(&mut self, kind: StatKind, value: f32) -> f32 {
        let value = self.range.clamp(value);
        match kind {
            StatKind::Hunger => self.hunger = value,
            StatKind::Energy => self.energy = value,
            StatKind::Happiness => self.happiness = value,
        }
        value
    }

    /// Add `delta` (may be negative) to a stat, clamped to the range
    pub fn adjust(&mut self, kind: StatKind, delta: f32) -> f32 {
        self.set(kind, self.get(kind) + delta)
    }

    pub fn in_range(&self) -> bool {
        [self.hunger, self.energy, self.happiness]
            .into_iter()
            .all(|v| self.range.contains(v))
    }
}

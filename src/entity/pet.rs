//! The simulated pet

use serde::{Deserialize, Serialize};

use crate::core::config::PetSpec;
use crate::core::types::Vec2;
use crate::entity::personality::Personality;
use crate::entity::stats::{PetStats, StatRange};
use crate::simulation::decision::Goal;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    /// Unique within a world
    pub name: String,
    pub position: Vec2,
    pub stats: PetStats,
    pub personality: Personality,
    /// Goal chosen on the most recent tick
    pub current_goal: Option<Goal>,
    /// Tricks learned through care actions, in learning order
    pub tricks: Vec<String>,
}

impl Pet {
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        stats: PetStats,
        personality: Personality,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            stats,
            personality,
            current_goal: None,
            tricks: Vec::new(),
        }
    }

    pub fn from_spec(spec: &PetSpec, range: StatRange) -> Self {
        Self::new(
            spec.name.clone(),
            spec.position,
            PetStats::new(spec.hunger, spec.energy, spec.happiness, range),
            spec.personality.clone(),
        )
    }

    pub fn knows_trick(&self, trick: &str) -> bool {
        self.tricks.iter().any(|t| t == trick)
    }
}

//! Personality weights that bias how urgently each need is pursued

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::entity::needs::NeedType;

/// Named personality traits
///
/// The first four weight the matching need urgency. `Helpful` does not
/// weight any urgency; it gates whether a pet will go help a friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Hunger,
    Rest,
    Social,
    HelpOthers,
    Helpful,
}

impl From<NeedType> for PersonalityTrait {
    fn from(need: NeedType) -> Self {
        match need {
            NeedType::Hunger => Self::Hunger,
            NeedType::Rest => Self::Rest,
            NeedType::Social => Self::Social,
            NeedType::HelpOthers => Self::HelpOthers,
        }
    }
}

/// Trait-to-weight mapping, each weight clamped to [0, 1]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "AHashMap<PersonalityTrait, f32>", into = "AHashMap<PersonalityTrait, f32>")]
pub struct Personality {
    weights: AHashMap<PersonalityTrait, f32>,
}

impl Personality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every trait set to the same weight
    pub fn uniform(weight: f32) -> Self {
        [
            PersonalityTrait::Hunger,
            PersonalityTrait::Rest,
            PersonalityTrait::Social,
            PersonalityTrait::HelpOthers,
            PersonalityTrait::Helpful,
        ]
        .into_iter()
        .fold(Self::new(), |p, t| p.with(t, weight))
    }

    pub fn with(mut self, personality_trait: PersonalityTrait, weight: f32) -> Self {
        self.set(personality_trait, weight);
        self
    }

    pub fn set(&mut self, personality_trait: PersonalityTrait, weight: f32) {
        let weight = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
        self.weights.insert(personality_trait, weight);
    }

    pub fn get(&self, personality_trait: PersonalityTrait) -> Option<f32> {
        self.weights.get(&personality_trait).copied()
    }

    /// Weight applied to a need's urgency, `default` if unspecified
    pub fn need_weight(&self, need: NeedType, default: f32) -> f32 {
        self.get(need.into()).unwrap_or(default)
    }

    /// Helpfulness gate; pets without the trait are not helpful at all
    pub fn helpfulness(&self) -> f32 {
        self.get(PersonalityTrait::Helpful).unwrap_or(0.0)
    }
}

impl From<AHashMap<PersonalityTrait, f32>> for Personality {
    fn from(raw: AHashMap<PersonalityTrait, f32>) -> Self {
        raw.into_iter()
            .fold(Self::new(), |p, (t, w)| p.with(t, w))
    }
}

impl From<Personality> for AHashMap<PersonalityTrait, f32> {
    fn from(personality: Personality) -> Self {
        personality.weights
    }
}

//! Need urgencies that drive pet behavior

use serde::{Deserialize, Serialize};

use crate::core::config::DecisionConfig;
use crate::entity::personality::Personality;
use crate::entity::stats::PetStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedType {
    Hunger,
    Rest,
    Social,
    HelpOthers,
}

/// How pressing each need is, roughly on a 0..1 scale
///
/// Values above 1.0 are legal (a starving pet is "more than urgent").
/// `help_others` is a raw count of needy friends and is not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Urgencies {
    pub hunger: f32,
    pub rest: f32,
    pub social: f32,
    pub help_others: f32,
}

impl Urgencies {
    /// Compute urgencies from a pet's own stats and the stats of everyone else
    pub fn compute<'a>(
        own: &PetStats,
        others: impl IntoIterator<Item = &'a PetStats>,
        config: &DecisionConfig,
    ) -> Self {
        let needy = others
            .into_iter()
            .filter(|s| is_needy(s, config))
            .count();

        Self {
            hunger: (own.hunger() - config.hunger_floor).max(0.0) / config.hunger_span,
            rest: (config.energy_ceiling - own.energy()).max(0.0) / config.rest_span,
            social: (config.social_ceiling - own.happiness()).max(0.0) / config.social_span,
            help_others: needy as f32,
        }
    }

    pub fn get(&self, need: NeedType) -> f32 {
        match need {
            NeedType::Hunger => self.hunger,
            NeedType::Rest => self.rest,
            NeedType::Social => self.social,
            NeedType::HelpOthers => self.help_others,
        }
    }

    /// Multiply each urgency by the personality's weight for that need
    pub fn weighted(&self, personality: &Personality, default_weight: f32) -> Self {
        let w = |need| personality.need_weight(need, default_weight);
        Self {
            hunger: self.hunger * w(NeedType::Hunger),
            rest: self.rest * w(NeedType::Rest),
            social: self.social * w(NeedType::Social),
            help_others: self.help_others * w(NeedType::HelpOthers),
        }
    }
}

/// A pet is needy when it is very hungry or very unhappy
pub fn is_needy(stats: &PetStats, config: &DecisionConfig) -> bool {
    stats.hunger() > config.needy_hunger || stats.happiness() < config.needy_happiness
}

//! Goal selection - the heart of autonomous pet behavior
//!
//! Each tick, every pet:
//! 1. Measures how urgent its needs are (hunger, rest, company, friends in trouble)
//! 2. Scales those urgencies by its personality
//! 3. Walks a fixed priority chain and takes the first goal whose threshold is met
//! 4. Turns that goal into a single movement step
//!
//! Decisions only read the world. Every goal has a "stay put" fallback when
//! its target does not exist, so deciding never fails.

use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::DecisionConfig;
use crate::core::types::Vec2;
use crate::ecs::world::WorldSnapshot;
use crate::entity::needs::{is_needy, Urgencies};
use crate::entity::personality::Personality;
use crate::entity::pet::Pet;
use crate::simulation::movement::{explore_offset, move_toward};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    SeekFood,
    Rest,
    HelpFriend,
    Socialize,
    Explore,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::SeekFood => "seek food",
            Goal::Rest => "rest",
            Goal::HelpFriend => "help friend",
            Goal::Socialize => "socialize",
            Goal::Explore => "explore",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one pet's decision for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub goal: Goal,
    /// Displacement to apply this tick (zero when there is nowhere to go)
    pub movement: Vec2,
    /// Where the pet is heading, if the goal has a target
    pub target: Option<Vec2>,
    /// Personality-weighted urgencies the goal was chosen from
    pub urgencies: Urgencies,
}

/// Decide what `pet` does this tick given a read-only snapshot
pub fn decide<R: Rng + ?Sized>(
    pet: &Pet,
    snapshot: &WorldSnapshot,
    config: &DecisionConfig,
    rng: &mut R,
) -> Decision {
    let raw = Urgencies::compute(
        &pet.stats,
        snapshot.others(&pet.name).map(|p| &p.stats),
        config,
    );
    let urgencies = raw.weighted(&pet.personality, config.default_need_weight);
    let goal = select_goal(&urgencies, &pet.personality, config);
    let (target, movement) = plan_movement(goal, pet, snapshot, config, rng);

    Decision {
        goal,
        movement,
        target,
        urgencies,
    }
}

/// First-match priority chain over weighted urgencies
///
/// Ties resolve to the earlier goal; thresholds are strict.
pub fn select_goal(
    weighted: &Urgencies,
    personality: &Personality,
    config: &DecisionConfig,
) -> Goal {
    if weighted.hunger > config.seek_food_threshold {
        Goal::SeekFood
    } else if weighted.rest > config.rest_threshold {
        Goal::Rest
    } else if weighted.help_others > config.help_threshold
        && personality.helpfulness() > config.helpful_threshold
    {
        Goal::HelpFriend
    } else if weighted.social > config.socialize_threshold {
        Goal::Socialize
    } else {
        Goal::Explore
    }
}

/// Carry out `goal` for one tick: the target (if any) and the step taken
///
/// A goal whose target does not exist yields a zero step rather than an
/// error, even if the goal was chosen for a target that is no longer there.
pub fn plan_movement<R: Rng + ?Sized>(
    goal: Goal,
    pet: &Pet,
    snapshot: &WorldSnapshot,
    config: &DecisionConfig,
    rng: &mut R,
) -> (Option<Vec2>, Vec2) {
    let target = goal_target(goal, pet, snapshot, config, rng);
    let movement = match (goal, target) {
        (Goal::Explore, _) => explore_offset(rng, config.explore_step),
        (_, Some(to)) => move_toward(pet.position, to, config.move_speed),
        (_, None) => Vec2::ZERO,
    };
    (target, movement)
}

/// Where a goal sends the pet, or None when there is nothing to go to
pub fn goal_target<R: Rng + ?Sized>(
    goal: Goal,
    pet: &Pet,
    snapshot: &WorldSnapshot,
    config: &DecisionConfig,
    rng: &mut R,
) -> Option<Vec2> {
    match goal {
        Goal::SeekFood => snapshot
            .food
            .iter()
            .min_by_key(|f| OrderedFloat(pet.position.distance(&f.position)))
            .map(|f| f.position),
        Goal::HelpFriend => snapshot
            .others(&pet.name)
            .find(|p| is_needy(&p.stats, config))
            .map(|p| p.position),
        Goal::Socialize => {
            let friends: Vec<&Pet> = snapshot
                .others(&pet.name)
                .filter(|p| p.stats.happiness() > config.friend_happiness)
                .collect();
            friends.choose(rng).map(|p| p.position)
        }
        Goal::Rest => {
            let x = config.quiet_corner_xs.choose(rng)?;
            let y = config.quiet_corner_ys.choose(rng)?;
            Some(Vec2::new(*x, *y))
        }
        Goal::Explore => None,
    }
}

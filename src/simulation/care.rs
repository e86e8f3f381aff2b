//! Player care actions - the "programming blocks" applied to a pet
//!
//! Care happens between ticks. Each action either applies its effect and
//! posts a message, or is refused (with a message) when the pet is not up
//! to it. Refusal is a normal outcome, not an error.
//!
//! After the action itself:
//! 1. Bystander pets may react to a successful feed or play (chance-based)
//! 2. Achievements are checked; each is awarded once

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::{PetError, Result};
use crate::ecs::world::World;
use crate::entity::stats::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareAction {
    Feed,
    Play,
    Nap,
    TeachTrick,
    /// Feed and play in one block
    HappyCombo,
}

impl CareAction {
    /// Whether a reaction listening for `trigger` fires on this action
    pub fn triggers(self, trigger: CareAction) -> bool {
        self == trigger
            || (self == CareAction::HappyCombo
                && matches!(trigger, CareAction::Feed | CareAction::Play))
    }
}

impl FromStr for CareAction {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "nap" | "rest" => Ok(Self::Nap),
            "trick" | "teach" => Ok(Self::TeachTrick),
            "combo" => Ok(Self::HappyCombo),
            other => Err(PetError::UnknownCommand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareOutcome {
    Done(String),
    Refused(String),
}

impl CareOutcome {
    pub fn message(&self) -> &str {
        match self {
            CareOutcome::Done(m) | CareOutcome::Refused(m) => m,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CareOutcome::Done(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstBlock,
    BlockMaster,
    PerfectPetParent,
    TrickMaster,
}

/// An achievement as earned; `pet` is None for player-wide ones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub achievement: Achievement,
    pub pet: Option<String>,
    pub message: String,
}

impl Award {
    fn same_as(&self, other: &Award) -> bool {
        self.achievement == other.achievement && self.pet == other.pet
    }
}

/// Everything a care action did, in the order it was posted
#[derive(Debug, Clone, PartialEq)]
pub struct CareReport {
    pub outcome: CareOutcome,
    /// Bystander reactions, already applied
    pub reactions: Vec<String>,
    /// Achievements earned by this action
    pub awards: Vec<Award>,
}

impl CareReport {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.outcome.message())
            .chain(self.reactions.iter().map(String::as_str))
            .chain(self.awards.iter().map(|a| a.message.as_str()))
    }
}

/// Apply a care action to the named pet
pub fn apply_care(world: &mut World, name: &str, action: CareAction) -> Result<CareReport> {
    let idx = world
        .index_of(name)
        .ok_or_else(|| PetError::PetNotFound(name.to_string()))?;
    world.care_actions += 1;

    let outcome = perform(world, idx, action);
    let reactions = if outcome.is_done() {
        react(world, idx, action)
    } else {
        Vec::new()
    };
    let awards = check_achievements(world, idx);

    tracing::info!(
        pet = %name,
        ?action,
        done = outcome.is_done(),
        reactions = reactions.len(),
        awards = awards.len(),
        "Care action"
    );

    let report = CareReport {
        outcome,
        reactions,
        awards,
    };
    for message in report.messages() {
        world.messages.push(message);
    }
    Ok(report)
}

fn perform(world: &mut World, idx: usize, action: CareAction) -> CareOutcome {
    let care = &world.config.care;
    let pet = &mut world.pets[idx];
    let stats = &mut pet.stats;

    match action {
        CareAction::Feed => {
            stats.adjust(StatKind::Hunger, -care.feed_hunger_relief);
            stats.adjust(StatKind::Happiness, care.feed_happiness);
            CareOutcome::Done(format!("You fed {}! {} is happy!", pet.name, pet.name))
        }
        CareAction::Play if stats.energy() > care.play_min_energy => {
            stats.adjust(StatKind::Happiness, care.play_happiness);
            stats.adjust(StatKind::Energy, -care.play_energy_cost);
            CareOutcome::Done(format!("You played with {}! So much fun!", pet.name))
        }
        CareAction::Play => {
            CareOutcome::Refused(format!("{} is too tired to play right now.", pet.name))
        }
        CareAction::Nap => {
            stats.adjust(StatKind::Energy, care.nap_energy);
            CareOutcome::Done(format!("{} takes a nice nap and feels refreshed!", pet.name))
        }
        CareAction::TeachTrick
            if stats.energy() > care.trick_min_energy
                && stats.happiness() > care.trick_min_happiness =>
        {
            let unknown: Vec<&String> = care
                .tricks
                .iter()
                .filter(|t| !pet.tricks.contains(*t))
                .collect();
            match unknown.choose(&mut world.rng) {
                Some(trick) => {
                    stats.adjust(StatKind::Happiness, care.trick_happiness);
                    stats.adjust(StatKind::Energy, -care.trick_energy_cost);
                    pet.tricks.push((*trick).clone());
                    CareOutcome::Done(format!("{} learned to {}! Great job!", pet.name, trick))
                }
                None => CareOutcome::Refused(format!("{} already knows every trick!", pet.name)),
            }
        }
        CareAction::TeachTrick => CareOutcome::Refused(format!(
            "{} needs more energy and happiness to learn tricks.",
            pet.name
        )),
        CareAction::HappyCombo => {
            stats.adjust(StatKind::Hunger, -care.combo_hunger_relief);
            stats.adjust(StatKind::Energy, -care.combo_energy_cost);
            let max = stats.range().max;
            stats.set(StatKind::Happiness, max);
            CareOutcome::Done(format!("Super combo! {} is super happy!", pet.name))
        }
    }
}

/// Roll each matching bystander reaction; the cared-for pet never reacts to itself
fn react(world: &mut World, idx: usize, action: CareAction) -> Vec<String> {
    let name = world.pets[idx].name.clone();
    let mut lines = Vec::new();

    for reaction in &world.config.care.reactions {
        if !action.triggers(reaction.trigger) || reaction.watcher == name {
            continue;
        }
        let Some(watcher) = world.pets.iter_mut().find(|p| p.name == reaction.watcher) else {
            continue;
        };
        if !world.rng.gen_bool(reaction.chance) {
            continue;
        }
        watcher.stats.adjust(StatKind::Happiness, reaction.happiness);
        lines.push(reaction.message.replace("{pet}", &name));
    }
    lines
}

/// Achievements newly earned after a care action on pet `idx`
fn check_achievements(world: &mut World, idx: usize) -> Vec<Award> {
    let thresholds = &world.config.care.achievements;
    let pet = &world.pets[idx];
    let stats = &pet.stats;
    let mut earned = Vec::new();

    if world.care_actions == 1 {
        earned.push(Award {
            achievement: Achievement::FirstBlock,
            pet: None,
            message: "First Block Award! You used your first programming block!".into(),
        });
    }
    if world.care_actions == thresholds.block_master_actions {
        earned.push(Award {
            achievement: Achievement::BlockMaster,
            pet: None,
            message: format!(
                "Block Master! You've used {} programming blocks!",
                thresholds.block_master_actions
            ),
        });
    }
    if stats.happiness() >= stats.range().max
        && stats.hunger() <= thresholds.perfect_max_hunger
        && stats.energy() >= thresholds.perfect_min_energy
    {
        earned.push(Award {
            achievement: Achievement::PerfectPetParent,
            pet: Some(pet.name.clone()),
            message: format!("Perfect Pet Parent! {} is super happy!", pet.name),
        });
    }
    if pet.tricks.len() >= thresholds.trick_master_tricks {
        earned.push(Award {
            achievement: Achievement::TrickMaster,
            pet: Some(pet.name.clone()),
            message: format!("Trick Master! {} knows so many tricks!", pet.name),
        });
    }

    earned.retain(|award| !world.awards.iter().any(|a| a.same_as(award)));
    world.awards.extend(earned.iter().cloned());
    earned
}

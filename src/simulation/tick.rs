//! Tick system - orchestrates simulation updates
//!
//! Each tick advances the world one fixed step:
//! 1. Maybe spawn food at random
//! 2. Every pet decides from the same pre-tick snapshot, then moves
//! 3. Passive stat drift (hunger up, energy down or up while resting)
//! 4. Pets eat food within reach, in pet creation order
//! 5. Pets close to each other cheer each other up
//! 6. Food lifetimes count down
//! 7. Messages count down
//!
//! Only step 2 reads the snapshot. Steps 4 and 5 see the settled positions,
//! so the order pets are stored in breaks ties over who gets a food item.

use rand::Rng;
use serde::Serialize;

use crate::core::types::{Tick, Vec2};
use crate::ecs::world::{World, WorldSnapshot};
use crate::entity::stats::StatKind;
use crate::simulation::decision::{decide, Decision, Goal};

/// Events generated during a simulation tick, for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SimulationEvent {
    /// A pet picked its goal for this tick
    GoalChosen {
        pet: String,
        tick: Tick,
        decision: Decision,
    },
    /// New food appeared
    FoodSpawned { position: Vec2, manual: bool },
    /// A pet ate a food item
    FoodEaten { pet: String, position: Vec2 },
    /// A food item ran out of time
    FoodExpired { position: Vec2 },
    /// Two pets were close enough to enjoy each other's company
    PetsMingled { first: String, second: String },
}

/// Run a single simulation tick
///
/// Returns the events that occurred, in the order they happened.
pub fn run_simulation_tick(world: &mut World) -> Vec<SimulationEvent> {
    let mut events = Vec::new();

    maybe_spawn_food(world, &mut events);
    let decisions = decide_all(world);
    apply_decisions(world, &decisions, &mut events);
    apply_stat_drift(world);
    resolve_feeding(world, &mut events);
    resolve_company(world, &mut events);
    age_food(world, &mut events);
    world.messages.tick();

    world.tick();
    events
}

/// Random spawn, capped at the configured concurrent maximum
fn maybe_spawn_food(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let food = &world.config.food;
    if world.food.len() >= food.max_items || !world.rng.gen_bool(food.spawn_chance) {
        return;
    }

    let lifetime = food.lifetime;
    let position = world.random_food_position();
    world.add_food(position, lifetime);
    tracing::debug!(x = position.x, y = position.y, "Food appeared");
    events.push(SimulationEvent::FoodSpawned {
        position,
        manual: false,
    });
}

/// Every pet decides from the same snapshot; nobody sees another's move
pub fn decide_all(world: &mut World) -> Vec<Decision> {
    let snapshot = WorldSnapshot {
        pets: &world.pets,
        food: &world.food,
    };
    let config = &world.config.decision;
    let rng = &mut world.rng;
    snapshot
        .pets
        .iter()
        .map(|pet| decide(pet, &snapshot, config, rng))
        .collect()
}

fn apply_decisions(world: &mut World, decisions: &[Decision], events: &mut Vec<SimulationEvent>) {
    let bounds = world.config.world.movement_bounds();
    let tick = world.current_tick;

    for (pet, decision) in world.pets.iter_mut().zip(decisions) {
        pet.position = bounds.clamp(pet.position + decision.movement);
        pet.current_goal = Some(decision.goal);

        tracing::debug!(
            pet = %pet.name,
            goal = %decision.goal,
            dx = decision.movement.x,
            dy = decision.movement.y,
            "Goal chosen"
        );
        events.push(SimulationEvent::GoalChosen {
            pet: pet.name.clone(),
            tick,
            decision: decision.clone(),
        });
    }
}

/// Hunger always rises; energy recovers only while resting
fn apply_stat_drift(world: &mut World) {
    let decay = &world.config.decay;
    for pet in &mut world.pets {
        pet.stats.adjust(StatKind::Hunger, decay.hunger_per_tick);
        let energy = if pet.current_goal == Some(Goal::Rest) {
            decay.rest_recovery_per_tick
        } else {
            -decay.energy_drain_per_tick
        };
        pet.stats.adjust(StatKind::Energy, energy);
    }
}

/// Pets eat every item within reach; an eaten item is gone for later pets
fn resolve_feeding(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let food = &world.config.food;
    let (radius, relief, boost) = (food.capture_radius, food.hunger_relief, food.happiness_boost);

    for pet in &mut world.pets {
        let mut i = 0;
        while i < world.food.len() {
            if !world.food[i].within_reach(pet.position, radius) {
                i += 1;
                continue;
            }

            let item = world.food.remove(i);
            pet.stats.adjust(StatKind::Hunger, -relief);
            pet.stats.adjust(StatKind::Happiness, boost);
            world.messages.push(format!("{} found food!", pet.name));

            tracing::debug!(pet = %pet.name, x = item.position.x, y = item.position.y, "Food eaten");
            events.push(SimulationEvent::FoodEaten {
                pet: pet.name.clone(),
                position: item.position,
            });
        }
    }
}

/// Each unordered pair within range gains happiness once
fn resolve_company(world: &mut World, events: &mut Vec<SimulationEvent>) {
    let social = &world.config.social;
    let (radius, boost) = (social.proximity_radius, social.happiness_boost);

    let mut pairs = Vec::new();
    for i in 0..world.pets.len() {
        for j in (i + 1)..world.pets.len() {
            if world.pets[i].position.distance(&world.pets[j].position) <= radius {
                pairs.push((i, j));
            }
        }
    }

    for (i, j) in pairs {
        world.pets[i].stats.adjust(StatKind::Happiness, boost);
        world.pets[j].stats.adjust(StatKind::Happiness, boost);
        events.push(SimulationEvent::PetsMingled {
            first: world.pets[i].name.clone(),
            second: world.pets[j].name.clone(),
        });
    }
}

fn age_food(world: &mut World, events: &mut Vec<SimulationEvent>) {
    world.food.retain_mut(|item| {
        if item.age() {
            tracing::trace!(x = item.position.x, y = item.position.y, "Food expired");
            events.push(SimulationEvent::FoodExpired {
                position: item.position,
            });
            false
        } else {
            true
        }
    });
}

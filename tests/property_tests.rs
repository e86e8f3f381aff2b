//! Property-based tests using proptest
//!
//! Invariants that must hold for any starting state, not just the default roster.

use proptest::prelude::*;
use pet_academy::core::config::{DecisionConfig, PetSpec, SimulationConfig};
use pet_academy::core::types::Vec2;
use pet_academy::ecs::world::World;
use pet_academy::entity::needs::Urgencies;
use pet_academy::entity::personality::{Personality, PersonalityTrait};
use pet_academy::simulation::decision::{select_goal, Goal};
use pet_academy::simulation::movement::move_toward;
use pet_academy::simulation::tick::{run_simulation_tick, SimulationEvent};

// ============================================================================
// Strategies
// ============================================================================

// Stats deliberately range past the legal bounds to exercise clamping
fn stat_strategy() -> impl Strategy<Value = f32> {
    -50.0f32..150.0f32
}

fn weight_strategy() -> impl Strategy<Value = f32> {
    0.0f32..=1.0f32
}

fn personality_strategy() -> impl Strategy<Value = Personality> {
    prop::collection::vec(weight_strategy(), 5).prop_map(|w| {
        Personality::new()
            .with(PersonalityTrait::Hunger, w[0])
            .with(PersonalityTrait::Rest, w[1])
            .with(PersonalityTrait::Social, w[2])
            .with(PersonalityTrait::HelpOthers, w[3])
            .with(PersonalityTrait::Helpful, w[4])
    })
}

fn pet_strategy() -> impl Strategy<Value = (f32, f32, f32, f32, f32, Personality)> {
    (
        0.0f32..800.0f32,
        0.0f32..600.0f32,
        stat_strategy(),
        stat_strategy(),
        stat_strategy(),
        personality_strategy(),
    )
}

fn urgency_strategy() -> impl Strategy<Value = Urgencies> {
    (0.0f32..2.0f32, 0.0f32..2.0f32, 0.0f32..2.0f32, 0.0f32..3.0f32).prop_map(
        |(hunger, rest, social, help_others)| Urgencies {
            hunger,
            rest,
            social,
            help_others,
        },
    )
}

fn world_with(pets: Vec<(f32, f32, f32, f32, f32, Personality)>, seed: u64) -> World {
    let mut config = SimulationConfig::default();
    config.seed = seed;
    config.food.spawn_chance = 0.2;
    let mut world = World::empty(config).unwrap();
    for (i, (x, y, hunger, energy, happiness, personality)) in pets.into_iter().enumerate() {
        world
            .spawn_pet(&PetSpec {
                name: format!("Pet{}", i),
                position: Vec2::new(x, y),
                hunger,
                energy,
                happiness,
                personality,
            })
            .unwrap();
    }
    world
}

// ============================================================================
// Simulation Invariants
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: every stat and position stays in bounds after every tick
    #[test]
    fn test_stats_and_positions_stay_in_bounds(
        pets in prop::collection::vec(pet_strategy(), 1..6),
        seed in any::<u64>(),
    ) {
        let mut world = world_with(pets, seed);
        let bounds = world.config.world.movement_bounds();

        for _ in 0..200 {
            run_simulation_tick(&mut world);
            for pet in &world.pets {
                prop_assert!(pet.stats.in_range(), "{:?}", pet.stats);
                prop_assert!(bounds.contains(pet.position), "{:?}", pet.position);
            }
            prop_assert!(world.messages.len() <= world.config.messages.capacity);
        }
    }

    // Property: every eaten item existed before it was eaten and is eaten once;
    // each item ends the tick eaten, expired or still on the ground
    #[test]
    fn test_each_item_eaten_at_most_once(
        pets in prop::collection::vec(pet_strategy(), 2..6),
        seed in any::<u64>(),
    ) {
        let mut world = world_with(pets, seed);
        for _ in 0..5 {
            world.spawn_food_now();
        }

        for _ in 0..100 {
            let mut available: Vec<Vec2> = world.food.iter().map(|f| f.position).collect();
            let events = run_simulation_tick(&mut world);
            available.extend(events.iter().filter_map(|e| match e {
                SimulationEvent::FoodSpawned { position, .. } => Some(*position),
                _ => None,
            }));

            for event in &events {
                let position = match event {
                    SimulationEvent::FoodEaten { position, .. }
                    | SimulationEvent::FoodExpired { position } => *position,
                    _ => continue,
                };
                let slot = available.iter().position(|p| *p == position);
                prop_assert!(slot.is_some(), "{:?} consumed but never available", event);
                if let Some(i) = slot {
                    available.swap_remove(i);
                }
            }

            let mut remaining: Vec<Vec2> = world.food.iter().map(|f| f.position).collect();
            prop_assert_eq!(remaining.len(), available.len());
            for position in available {
                let i = remaining.iter().position(|p| *p == position);
                prop_assert!(i.is_some(), "{:?} vanished without an event", position);
                if let Some(i) = i {
                    remaining.swap_remove(i);
                }
            }
        }
    }
}

// ============================================================================
// Decision Invariants
// ============================================================================

proptest! {
    // Property: the priority chain always takes the first satisfied rule
    #[test]
    fn test_goal_follows_priority_chain(
        urgencies in urgency_strategy(),
        personality in personality_strategy(),
    ) {
        let config = DecisionConfig::default();
        let goal = select_goal(&urgencies, &personality, &config);

        let expected = if urgencies.hunger > 0.7 {
            Goal::SeekFood
        } else if urgencies.rest > 0.8 {
            Goal::Rest
        } else if urgencies.help_others > 0.5 && personality.helpfulness() > 0.6 {
            Goal::HelpFriend
        } else if urgencies.social > 0.4 {
            Goal::Socialize
        } else {
            Goal::Explore
        };
        prop_assert_eq!(goal, expected);
    }

    // Property: a single step never overshoots the configured speed
    #[test]
    fn test_move_toward_step_length(
        fx in -1000.0f32..1000.0f32,
        fy in -1000.0f32..1000.0f32,
        tx in -1000.0f32..1000.0f32,
        ty in -1000.0f32..1000.0f32,
        speed in 0.0f32..10.0f32,
    ) {
        let step = move_toward(Vec2::new(fx, fy), Vec2::new(tx, ty), speed);
        prop_assert!(step.x.is_finite() && step.y.is_finite());
        prop_assert!(step.length() <= speed + 1e-3);
    }
}

//! World - owns every pet, food item and message of a session

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::{PetSpec, SimulationConfig};
use crate::core::error::{PetError, Result};
use crate::core::types::{Tick, Vec2};
use crate::entity::pet::Pet;
use crate::simulation::care::Award;
use crate::simulation::food::FoodItem;
use crate::simulation::messages::MessageLog;

/// The simulation world
///
/// Pets are stored in creation order, which is also the order the tick
/// processes them in.
pub struct World {
    pub current_tick: Tick,
    pub pets: Vec<Pet>,
    pub food: Vec<FoodItem>,
    pub messages: MessageLog,
    /// Deterministic random source for spawning and goal execution
    pub rng: ChaCha8Rng,
    /// Whether the front end shows decision reasoning (no simulation effect)
    pub show_reasoning: bool,
    /// Care actions used so far, refused ones included
    pub care_actions: u32,
    pub awards: Vec<Award>,
    pub config: SimulationConfig,
}

/// Read-only view of the world handed to the decision engine
#[derive(Clone, Copy)]
pub struct WorldSnapshot<'a> {
    pub pets: &'a [Pet],
    pub food: &'a [FoodItem],
}

impl<'a> WorldSnapshot<'a> {
    /// Every pet except the named one, in creation order
    pub fn others(&self, name: &'a str) -> impl Iterator<Item = &'a Pet> + 'a {
        let pets = self.pets;
        pets.iter().filter(move |p| p.name != name)
    }
}

impl World {
    /// World with the default config and starting roster
    pub fn new() -> Self {
        Self::build(SimulationConfig::default())
    }

    /// Validate the config and create its starting roster
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// World using `config` but with no pets; the roster is ignored
    pub fn empty(config: SimulationConfig) -> Result<Self> {
        let mut config = config;
        config.pets.clear();
        Self::from_config(config)
    }

    fn build(config: SimulationConfig) -> Self {
        let pets = config
            .pets
            .iter()
            .map(|spec| Pet::from_spec(spec, config.stats))
            .collect();

        Self {
            current_tick: 0,
            pets,
            food: Vec::new(),
            messages: MessageLog::new(config.messages.capacity, config.messages.lifetime),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            show_reasoning: false,
            care_actions: 0,
            awards: Vec::new(),
            config,
        }
    }

    /// Add a pet at the end of the iteration order
    pub fn spawn_pet(&mut self, spec: &PetSpec) -> Result<usize> {
        if self.index_of(&spec.name).is_some() {
            return Err(PetError::DuplicatePet(spec.name.clone()));
        }
        let mut pet = Pet::from_spec(spec, self.config.stats);
        pet.position = self.config.world.movement_bounds().clamp(pet.position);
        self.pets.push(pet);
        tracing::debug!(name = %spec.name, "Spawned pet");
        Ok(self.pets.len() - 1)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.pets.iter().position(|p| p.name == name)
    }

    pub fn pet(&self, name: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.name == name)
    }

    pub fn pet_mut(&mut self, name: &str) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.name == name)
    }

    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot {
            pets: &self.pets,
            food: &self.food,
        }
    }

    /// Random in-bounds spot for new food
    pub fn random_food_position(&mut self) -> Vec2 {
        let area = self.config.world.spawn_bounds();
        Vec2::new(
            self.rng.gen_range(area.min.x..=area.max.x),
            self.rng.gen_range(area.min.y..=area.max.y),
        )
    }

    /// Place food at an exact position, ignoring the concurrent cap
    pub fn add_food(&mut self, position: Vec2, lifetime: u32) {
        self.food.push(FoodItem::new(position, lifetime));
    }

    /// Player-triggered spawn; not limited by the random-spawn cap
    pub fn spawn_food_now(&mut self) -> Vec2 {
        let position = self.random_food_position();
        self.add_food(position, self.config.food.lifetime);
        self.messages.push("Food spawned!");
        tracing::info!(x = position.x, y = position.y, "Food spawned by player");
        position
    }

    pub fn post_message(&mut self, text: impl Into<String>) {
        self.messages.push(text);
    }

    /// Flip the reasoning display flag, returning the new state
    pub fn toggle_reasoning(&mut self) -> bool {
        self.show_reasoning = !self.show_reasoning;
        self.show_reasoning
    }

    pub fn pet_count(&self) -> usize {
        self.pets.len()
    }

    pub fn tick(&mut self) {
        self.current_tick += 1;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

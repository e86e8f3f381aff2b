//! Settled post-tick state for rendering layers
//!
//! A `WorldView` is a plain copy of what a front end needs to draw;
//! it carries no way back into the simulation.

use serde::Serialize;

use crate::core::types::{Tick, Vec2};
use crate::ecs::world::World;
use crate::simulation::decision::Goal;

#[derive(Debug, Clone, Serialize)]
pub struct WorldView {
    pub tick: Tick,
    pub pets: Vec<PetView>,
    pub food: Vec<FoodView>,
    pub messages: Vec<String>,
    pub show_reasoning: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PetView {
    pub name: String,
    pub position: Vec2,
    pub hunger: f32,
    pub energy: f32,
    pub happiness: f32,
    pub goal: Option<Goal>,
    pub tricks: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodView {
    pub position: Vec2,
    pub lifetime: u32,
}

impl WorldView {
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.current_tick,
            pets: world
                .pets
                .iter()
                .map(|p| PetView {
                    name: p.name.clone(),
                    position: p.position,
                    hunger: p.stats.hunger(),
                    energy: p.stats.energy(),
                    happiness: p.stats.happiness(),
                    goal: p.current_goal,
                    tricks: p.tricks.clone(),
                })
                .collect(),
            food: world
                .food
                .iter()
                .map(|f| FoodView {
                    position: f.position,
                    lifetime: f.lifetime,
                })
                .collect(),
            messages: world.messages.iter().map(|m| m.text.clone()).collect(),
            show_reasoning: world.show_reasoning,
        }
    }

    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl World {
    pub fn view(&self) -> WorldView {
        WorldView::capture(self)
    }
}

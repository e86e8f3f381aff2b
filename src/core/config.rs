//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose.
//! The defaults are the hand-tuned values the pet games shipped with;
//! changing them changes observable gameplay.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::core::error::{PetError, Result};
use crate::core::types::{Bounds, Vec2};
use crate::entity::personality::{Personality, PersonalityTrait};
use crate::entity::stats::StatRange;
use crate::simulation::care::CareAction;

/// Top-level configuration for a simulation session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the world's random source
    pub seed: u64,
    /// Ticks per second when driven by a real-time scheduler
    pub tick_rate_hz: u32,
    pub world: WorldConfig,
    pub stats: StatRange,
    pub decision: DecisionConfig,
    pub decay: DecayConfig,
    pub food: FoodConfig,
    pub social: SocialConfig,
    pub messages: MessageConfig,
    pub care: CareConfig,
    /// Pets created at world initialization, in iteration order
    pub pets: Vec<PetSpec>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate_hz: 60,
            world: WorldConfig::default(),
            stats: StatRange::default(),
            decision: DecisionConfig::default(),
            decay: DecayConfig::default(),
            food: FoodConfig::default(),
            social: SocialConfig::default(),
            messages: MessageConfig::default(),
            care: CareConfig::default(),
            pets: default_roster(),
        }
    }
}

/// Canvas geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Pets never get closer than this to the left, right and top edges
    pub edge_margin: f32,
    /// Strip at the bottom of the canvas reserved for the status panel
    pub panel_height: f32,
    /// Inset used when placing new food
    pub spawn_margin: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            edge_margin: 25.0,
            panel_height: 150.0,
            spawn_margin: 50.0,
        }
    }
}

impl WorldConfig {
    /// Interior rectangle pet positions are clamped to
    pub fn movement_bounds(&self) -> Bounds {
        Bounds::new(
            Vec2::new(self.edge_margin, self.edge_margin),
            Vec2::new(self.width - self.edge_margin, self.height - self.panel_height),
        )
    }

    /// Rectangle food may appear in
    pub fn spawn_bounds(&self) -> Bounds {
        Bounds::new(
            Vec2::new(self.spawn_margin, self.spawn_margin),
            Vec2::new(self.width - self.spawn_margin, self.height - self.panel_height),
        )
    }
}

/// Urgency normalizers and goal thresholds for the decision engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Hunger below this level produces no urgency
    pub hunger_floor: f32,
    pub hunger_span: f32,
    /// Energy deficit is measured from this ceiling
    pub energy_ceiling: f32,
    pub rest_span: f32,
    /// Happiness below this level produces social urgency
    pub social_ceiling: f32,
    pub social_span: f32,

    /// Another pet counts as needy above this hunger...
    pub needy_hunger: f32,
    /// ...or below this happiness
    pub needy_happiness: f32,
    /// Pets above this happiness are candidates for socializing
    pub friend_happiness: f32,

    /// Weight used when a personality does not mention a need
    pub default_need_weight: f32,

    pub seek_food_threshold: f32,
    pub rest_threshold: f32,
    pub help_threshold: f32,
    /// Minimum "helpful" trait required before helping is considered
    pub helpful_threshold: f32,
    pub socialize_threshold: f32,

    /// Distance covered per tick by move-toward
    pub move_speed: f32,
    /// Explore picks an integer offset in -step..=step on each axis
    pub explore_step: i32,
    /// Candidate x coordinates of the quiet corners
    pub quiet_corner_xs: Vec<f32>,
    /// Candidate y coordinates of the quiet corners
    pub quiet_corner_ys: Vec<f32>,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            hunger_floor: 30.0,
            hunger_span: 70.0,
            energy_ceiling: 100.0,
            rest_span: 70.0,
            social_ceiling: 50.0,
            social_span: 50.0,

            needy_hunger: 70.0,
            needy_happiness: 30.0,
            friend_happiness: 50.0,

            default_need_weight: 0.5,

            seek_food_threshold: 0.7,
            rest_threshold: 0.8,
            help_threshold: 0.5,
            helpful_threshold: 0.6,
            socialize_threshold: 0.4,

            move_speed: 2.0,
            explore_step: 2,
            quiet_corner_xs: vec![50.0, 750.0],
            quiet_corner_ys: vec![50.0, 550.0],
        }
    }
}

/// Passive per-tick stat drift
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Hunger gained every tick regardless of goal
    pub hunger_per_tick: f32,
    /// Energy lost every tick while not resting
    pub energy_drain_per_tick: f32,
    /// Energy regained every tick while resting
    pub rest_recovery_per_tick: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            hunger_per_tick: 0.1,
            energy_drain_per_tick: 0.05,
            rest_recovery_per_tick: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    /// Chance per tick that a new item appears (if below the cap)
    pub spawn_chance: f64,
    /// Random spawning stops at this many concurrent items
    pub max_items: usize,
    /// Ticks an item stays before it disappears
    pub lifetime: u32,
    /// Pets eat any item at or within this distance
    pub capture_radius: f32,
    pub hunger_relief: f32,
    pub happiness_boost: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.02,
            max_items: 3,
            lifetime: 300,
            capture_radius: 30.0,
            hunger_relief: 30.0,
            happiness_boost: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Pairs of pets at or within this distance cheer each other up
    pub proximity_radius: f32,
    pub happiness_boost: f32,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            proximity_radius: 40.0,
            happiness_boost: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Most recent messages kept
    pub capacity: usize,
    /// Ticks a message stays visible
    pub lifetime: u32,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            lifetime: 180,
        }
    }
}

/// Effects of the user-triggered care blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    pub feed_hunger_relief: f32,
    pub feed_happiness: f32,
    /// Play is refused at or below this energy
    pub play_min_energy: f32,
    pub play_happiness: f32,
    pub play_energy_cost: f32,
    pub nap_energy: f32,
    pub trick_min_energy: f32,
    pub trick_min_happiness: f32,
    pub trick_happiness: f32,
    pub trick_energy_cost: f32,
    pub tricks: Vec<String>,
    /// Feed-and-play combo: smaller meal, some energy, happiness to max
    pub combo_hunger_relief: f32,
    pub combo_energy_cost: f32,
    /// Bystander pets that may cheer up when they watch a care action
    pub reactions: Vec<ReactionSpec>,
    pub achievements: AchievementConfig,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            feed_hunger_relief: 30.0,
            feed_happiness: 10.0,
            play_min_energy: 20.0,
            play_happiness: 15.0,
            play_energy_cost: 15.0,
            nap_energy: 30.0,
            trick_min_energy: 15.0,
            trick_min_happiness: 40.0,
            trick_happiness: 12.0,
            trick_energy_cost: 10.0,
            tricks: ["sit", "roll over", "play dead", "shake hands", "spin"]
                .into_iter()
                .map(String::from)
                .collect(),
            combo_hunger_relief: 20.0,
            combo_energy_cost: 15.0,
            reactions: vec![
                ReactionSpec {
                    watcher: "Buddy".into(),
                    trigger: CareAction::Feed,
                    chance: 0.7,
                    happiness: 5.0,
                    message: "Buddy wags happily watching {pet} eat!".into(),
                },
                ReactionSpec {
                    watcher: "Luna".into(),
                    trigger: CareAction::Play,
                    chance: 0.4,
                    happiness: 3.0,
                    message: "Luna peeks out from her hiding spot, curious about the fun!".into(),
                },
            ],
            achievements: AchievementConfig::default(),
        }
    }
}

/// A bystander's chance-based reaction to a successful care action
///
/// `{pet}` in the message is replaced with the cared-for pet's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionSpec {
    pub watcher: String,
    pub trigger: CareAction,
    pub chance: f64,
    pub happiness: f32,
    pub message: String,
}

/// Thresholds for care achievements
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementConfig {
    /// Care actions used before "Block Master" is awarded
    pub block_master_actions: u32,
    pub trick_master_tricks: usize,
    /// "Perfect Pet Parent": max happiness with hunger at or below this
    pub perfect_max_hunger: f32,
    pub perfect_min_energy: f32,
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            block_master_actions: 5,
            trick_master_tricks: 3,
            perfect_max_hunger: 40.0,
            perfect_min_energy: 60.0,
        }
    }
}

/// Starting state of one pet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSpec {
    pub name: String,
    pub position: Vec2,
    pub hunger: f32,
    pub energy: f32,
    pub happiness: f32,
    #[serde(default)]
    pub personality: Personality,
}

fn default_roster() -> Vec<PetSpec> {
    vec![
        PetSpec {
            name: "Buddy".into(),
            position: Vec2::new(200.0, 200.0),
            hunger: 30.0,
            energy: 80.0,
            happiness: 70.0,
            personality: Personality::new()
                .with(PersonalityTrait::Helpful, 0.8)
                .with(PersonalityTrait::Social, 0.7)
                .with(PersonalityTrait::Hunger, 0.6),
        },
        PetSpec {
            name: "Luna".into(),
            position: Vec2::new(400.0, 300.0),
            hunger: 50.0,
            energy: 60.0,
            happiness: 40.0,
            personality: Personality::new()
                .with(PersonalityTrait::Helpful, 0.4)
                .with(PersonalityTrait::Social, 0.3)
                .with(PersonalityTrait::Hunger, 0.8),
        },
        PetSpec {
            name: "Dash".into(),
            position: Vec2::new(600.0, 150.0),
            hunger: 20.0,
            energy: 90.0,
            happiness: 80.0,
            personality: Personality::new()
                .with(PersonalityTrait::Helpful, 0.6)
                .with(PersonalityTrait::Social, 0.9)
                .with(PersonalityTrait::Hunger, 0.4),
        },
    ]
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing sections fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse_toml(&contents)?;
        tracing::info!(path = %path.display(), pets = config.pets.len(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a config from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.stats.is_valid() {
            return Err(PetError::InvalidConfig(format!(
                "stat range min ({}) must be below max ({})",
                self.stats.min, self.stats.max
            )));
        }

        if !self.world.movement_bounds().is_valid() || !self.world.spawn_bounds().is_valid() {
            return Err(PetError::InvalidConfig(format!(
                "world {}x{} leaves no interior with margin {} and panel {}",
                self.world.width, self.world.height, self.world.edge_margin, self.world.panel_height
            )));
        }

        if !(0.0..=1.0).contains(&self.food.spawn_chance) {
            return Err(PetError::InvalidConfig(format!(
                "food spawn_chance ({}) must be within [0, 1]",
                self.food.spawn_chance
            )));
        }

        if self.messages.capacity == 0 {
            return Err(PetError::InvalidConfig("message capacity must be positive".into()));
        }

        if self.tick_rate_hz == 0 {
            return Err(PetError::InvalidConfig("tick_rate_hz must be positive".into()));
        }

        let spans = [
            self.decision.hunger_span,
            self.decision.rest_span,
            self.decision.social_span,
        ];
        if spans.iter().any(|&s| s <= 0.0) {
            return Err(PetError::InvalidConfig("urgency spans must be positive".into()));
        }

        if self.decision.quiet_corner_xs.is_empty() || self.decision.quiet_corner_ys.is_empty() {
            return Err(PetError::InvalidConfig("at least one quiet corner is required".into()));
        }

        if self.decision.explore_step < 0 {
            return Err(PetError::InvalidConfig("explore_step must not be negative".into()));
        }

        if let Some(r) = self
            .care
            .reactions
            .iter()
            .find(|r| !(0.0..=1.0).contains(&r.chance))
        {
            return Err(PetError::InvalidConfig(format!(
                "reaction chance for {} ({}) must be within [0, 1]",
                r.watcher, r.chance
            )));
        }

        let mut seen = HashSet::new();
        for pet in &self.pets {
            if !seen.insert(pet.name.as_str()) {
                return Err(PetError::DuplicatePet(pet.name.clone()));
            }
        }

        Ok(())
    }
}

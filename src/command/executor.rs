//! Command execution - applies parsed commands to the world

use crate::command::parser::{check_watch_seconds, Command};
use crate::core::error::Result;
use crate::ecs::view::WorldView;
use crate::ecs::world::World;
use crate::simulation::care::apply_care;
use crate::simulation::reasoning::explain;
use crate::simulation::tick::{run_simulation_tick, SimulationEvent};

pub const HELP_TEXT: &str = "tick, run <n>, food, feed/play/nap/trick/combo <pet>, code, status, quit";

/// Executes player commands against a world
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute a command, returning what happened and what to print
    ///
    /// `Watch` is run here without pacing; real-time front ends schedule
    /// its ticks themselves. `Quit` is a no-op.
    pub fn execute(world: &mut World, command: &Command) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::default();

        match command {
            Command::Tick => {
                result.events = run_simulation_tick(world);
                result.lines.push(format!("Tick {} complete.", world.current_tick));
                result.lines.extend(reasoning_lines(world, &result.events));
            }
            Command::Run(n) => {
                result.lines.extend(run_ticks(world, *n, &mut result.events));
            }
            Command::Watch(seconds) => {
                let seconds = check_watch_seconds(*seconds)?;
                let n = (seconds * world.config.tick_rate_hz as f32).round() as u32;
                result.lines.extend(run_ticks(world, n, &mut result.events));
            }
            Command::SpawnFood => {
                let position = world.spawn_food_now();
                result.events.push(SimulationEvent::FoodSpawned {
                    position,
                    manual: true,
                });
                result
                    .lines
                    .push(format!("Food appeared at ({:.0}, {:.0}).", position.x, position.y));
            }
            Command::Care { pet, action } => {
                let report = apply_care(world, pet, *action)?;
                result.lines.extend(report.messages().map(String::from));
            }
            Command::ToggleReasoning => {
                let on = world.toggle_reasoning();
                result.lines.push(format!(
                    "Decision code display {}.",
                    if on { "on" } else { "off" }
                ));
            }
            Command::Help => {
                world.post_message(HELP_TEXT);
                result.lines.push(format!("Commands: {}", HELP_TEXT));
            }
            Command::Status => result.lines.extend(status_lines(world)),
            Command::Json => result.lines.push(WorldView::capture(world).to_json()?),
            Command::Quit => {}
        }

        Ok(result)
    }
}

/// Result of executing a command
#[derive(Debug, Default)]
pub struct ExecutionResult {
    pub events: Vec<SimulationEvent>,
    pub lines: Vec<String>,
}

fn run_ticks(world: &mut World, n: u32, events: &mut Vec<SimulationEvent>) -> Vec<String> {
    let mut last = Vec::new();
    for _ in 0..n {
        last = run_simulation_tick(world);
        events.extend(last.iter().cloned());
    }
    let mut lines = vec![format!(
        "Completed {} ticks. Now at tick {}.",
        n, world.current_tick
    )];
    lines.extend(reasoning_lines(world, &last));
    lines
}

/// Run `n` ticks, collecting every tick's reasoning while the display is on
pub fn run_traced(world: &mut World, n: u32) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..n {
        let events = run_simulation_tick(world);
        if world.show_reasoning {
            lines.push(format!("--- Tick {} ---", world.current_tick));
            lines.extend(reasoning_lines(world, &events));
        }
    }
    lines
}

/// Decision reasoning for one tick's events, when the display is on
pub fn reasoning_lines(world: &World, events: &[SimulationEvent]) -> Vec<String> {
    if !world.show_reasoning {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(|event| match event {
            SimulationEvent::GoalChosen { pet, decision, .. } => {
                Some(explain(pet, decision, &world.config.decision))
            }
            _ => None,
        })
        .flatten()
        .collect()
}

/// One line per pet plus the food count and live messages
pub fn status_lines(world: &World) -> Vec<String> {
    let mut lines = vec![format!(
        "--- Tick {} | Pets: {} | Food: {} ---",
        world.current_tick,
        world.pet_count(),
        world.food.len()
    )];

    for pet in &world.pets {
        let goal = pet
            .current_goal
            .map(|g| g.label())
            .unwrap_or("thinking");
        let mut line = format!(
            "  {} at ({:.0}, {:.0}) - Hunger: {:.0}, Energy: {:.0}, Happiness: {:.0}, Goal: {}",
            pet.name,
            pet.position.x,
            pet.position.y,
            pet.stats.hunger(),
            pet.stats.energy(),
            pet.stats.happiness(),
            goal
        );
        if !pet.tricks.is_empty() {
            line.push_str(&format!(", Tricks: {}", pet.tricks.join(", ")));
        }
        lines.push(line);
    }

    for message in world.messages.iter() {
        lines.push(format!("  > {}", message.text));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parser::parse;
    use crate::core::error::PetError;

    #[test]
    fn test_execute_tick() {
        let mut world = World::new();
        let result = CommandExecutor::execute(&mut world, &Command::Tick).unwrap();
        assert_eq!(world.current_tick, 1);
        assert_eq!(result.lines[0], "Tick 1 complete.");
    }

    #[test]
    fn test_execute_run() {
        let mut world = World::new();
        let result = CommandExecutor::execute(&mut world, &parse("run 10").unwrap()).unwrap();
        assert_eq!(world.current_tick, 10);
        let chosen = result
            .events
            .iter()
            .filter(|e| matches!(e, SimulationEvent::GoalChosen { .. }))
            .count();
        assert_eq!(chosen, 30);
    }

    #[test]
    fn test_execute_rejects_unbounded_watch() {
        let mut world = World::new();
        for seconds in [f32::INFINITY, f32::NAN, 1e30, -2.0] {
            let err = CommandExecutor::execute(&mut world, &Command::Watch(seconds)).unwrap_err();
            assert!(matches!(err, PetError::InvalidArgument(_)));
        }
        assert_eq!(world.current_tick, 0);
    }

    #[test]
    fn test_execute_spawn_food() {
        let mut world = World::new();
        let result = CommandExecutor::execute(&mut world, &Command::SpawnFood).unwrap();
        assert_eq!(world.food.len(), 1);
        assert!(matches!(
            result.events[0],
            SimulationEvent::FoodSpawned { manual: true, .. }
        ));
        assert_eq!(world.messages.iter().next().unwrap().text, "Food spawned!");
    }

    #[test]
    fn test_execute_care_unknown_pet() {
        let mut world = World::new();
        let err = CommandExecutor::execute(&mut world, &parse("feed Rex").unwrap()).unwrap_err();
        assert!(matches!(err, PetError::PetNotFound(_)));
    }

    #[test]
    fn test_reasoning_only_when_enabled() {
        let mut world = World::new();
        let quiet = CommandExecutor::execute(&mut world, &Command::Tick).unwrap();
        assert_eq!(quiet.lines.len(), 1);

        CommandExecutor::execute(&mut world, &Command::ToggleReasoning).unwrap();
        let loud = CommandExecutor::execute(&mut world, &Command::Tick).unwrap();
        assert!(loud.lines.iter().any(|l| l == "# Buddy's decision"));
    }

    #[test]
    fn test_run_traced_reports_every_tick() {
        let mut world = World::new();
        assert!(run_traced(&mut world, 2).is_empty());

        world.toggle_reasoning();
        let lines = run_traced(&mut world, 3);
        let headers: Vec<_> = lines.iter().filter(|l| l.starts_with("--- Tick")).collect();
        assert_eq!(headers, ["--- Tick 3 ---", "--- Tick 4 ---", "--- Tick 5 ---"]);
        assert_eq!(lines.iter().filter(|l| l.ends_with("'s decision")).count(), 9);
        assert_eq!(world.current_tick, 5);
    }

    #[test]
    fn test_help_posts_message() {
        let mut world = World::new();
        CommandExecutor::execute(&mut world, &Command::Help).unwrap();
        assert_eq!(world.messages.iter().next().unwrap().text, HELP_TEXT);
    }

    #[test]
    fn test_status_lists_pets() {
        let world = World::new();
        let lines = status_lines(&world);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("  Luna at (400, 300)"));
    }
}

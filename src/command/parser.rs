//! Text commands understood by the front end

use crate::core::error::{PetError, Result};
use crate::simulation::care::CareAction;

/// Longest real-time watch accepted in one command
pub const MAX_WATCH_SECONDS: f32 = 3600.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Advance one tick
    Tick,
    /// Advance `n` ticks back to back
    Run(u32),
    /// Run in real time at the configured rate for this many seconds
    Watch(f32),
    SpawnFood,
    Care { pet: String, action: CareAction },
    ToggleReasoning,
    Help,
    Status,
    /// Print the current world view as JSON
    Json,
    Quit,
}

/// Parse one line of player input
///
/// Keywords are case-insensitive; pet names are matched exactly later.
pub fn parse(input: &str) -> Result<Command> {
    let mut words = input.split_whitespace();
    let Some(head) = words.next() else {
        return Err(PetError::UnknownCommand(String::new()));
    };
    let head = head.to_ascii_lowercase();
    let arg = words.next();

    let command = match head.as_str() {
        "tick" | "t" => Command::Tick,
        "run" => Command::Run(parse_arg(&head, arg)?),
        "watch" | "w" => Command::Watch(check_watch_seconds(parse_arg(&head, arg)?)?),
        "food" | "f" => Command::SpawnFood,
        "code" | "c" => Command::ToggleReasoning,
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "json" => Command::Json,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            let action: CareAction = other.parse()?;
            let pet = arg.ok_or_else(|| {
                PetError::InvalidArgument(format!("'{}' needs a pet name", other))
            })?;
            Command::Care {
                pet: pet.to_string(),
                action,
            }
        }
    };
    Ok(command)
}

/// Reject watch durations that are not a finite number of seconds in range
pub fn check_watch_seconds(seconds: f32) -> Result<f32> {
    if seconds.is_finite() && (0.0..=MAX_WATCH_SECONDS).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(PetError::InvalidArgument(format!(
            "watch takes 0 to {} seconds, got {}",
            MAX_WATCH_SECONDS, seconds
        )))
    }
}

fn parse_arg<T: std::str::FromStr>(command: &str, arg: Option<&str>) -> Result<T> {
    arg.and_then(|a| a.parse::<T>().ok()).ok_or_else(|| {
        PetError::InvalidArgument(format!("usage: {} <number>", command))
    })
}

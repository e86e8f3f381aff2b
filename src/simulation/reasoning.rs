//! Readable explanation of why a pet chose its goal
//!
//! This is the "show me the code" panel: it prints the rule that fired in
//! a form a learner can map back onto the priority chain. Display only.

use crate::core::config::DecisionConfig;
use crate::simulation::decision::{Decision, Goal};

/// Lines describing the rule behind `decision`
pub fn explain(name: &str, decision: &Decision, config: &DecisionConfig) -> Vec<String> {
    let u = &decision.urgencies;
    let (rule, action, says) = match decision.goal {
        Goal::SeekFood => (
            format!("if hunger {:.2} > {:.2}:", u.hunger, config.seek_food_threshold),
            "move_toward(closest_food)",
            "I need food!",
        ),
        Goal::Rest => (
            format!("elif tiredness {:.2} > {:.2}:", u.rest, config.rest_threshold),
            "move_toward(quiet_corner)",
            "I need to rest...",
        ),
        Goal::HelpFriend => (
            format!(
                "elif friends_in_trouble {:.2} > {:.2} and helpful:",
                u.help_others, config.help_threshold
            ),
            "move_toward(friend)",
            "My friend needs help!",
        ),
        Goal::Socialize => (
            format!("elif loneliness {:.2} > {:.2}:", u.social, config.socialize_threshold),
            "move_toward(happy_friend)",
            "Time to make friends!",
        ),
        Goal::Explore => (
            "else:".to_string(),
            "wander()",
            "Let's look around!",
        ),
    };

    let mut lines = vec![format!("# {}'s decision", name), rule];
    lines.push(format!("    goal = '{}'", decision.goal));
    lines.push(format!("    {}", action));
    if decision.goal != Goal::Explore && decision.movement.is_zero() {
        lines.push("    # nothing to move toward, staying put".to_string());
    }
    lines.push(format!("    say('{}')", says));
    lines
}

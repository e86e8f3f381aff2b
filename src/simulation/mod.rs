pub mod care;
pub mod decision;
pub mod food;
pub mod messages;
pub mod movement;
pub mod reasoning;
pub mod schedule;
pub mod tick;

pub use care::{apply_care, Achievement, Award, CareAction, CareOutcome, CareReport};
pub use decision::{decide, plan_movement, select_goal, Decision, Goal};
pub use food::FoodItem;
pub use messages::{Message, MessageLog};
pub use movement::move_toward;
pub use schedule::FixedRate;
pub use tick::{run_simulation_tick, SimulationEvent};

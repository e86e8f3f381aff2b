pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::SimulationConfig;
pub use error::{PetError, Result};
pub use types::{Bounds, Tick, Vec2};

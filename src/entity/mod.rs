pub mod needs;
pub mod personality;
pub mod pet;
pub mod stats;

pub use needs::{NeedType, Urgencies};
pub use personality::{Personality, PersonalityTrait};
pub use pet::Pet;
pub use stats::{PetStats, StatKind, StatRange};

pub mod view;
pub mod world;

pub use view::WorldView;
pub use world::{World, WorldSnapshot};

//! Pet Academy - autonomous virtual pets driven by readable decision rules

pub mod command;
pub mod core;
pub mod ecs;
pub mod entity;
pub mod simulation;

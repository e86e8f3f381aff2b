//! Player command pipeline
//!
//! Converts typed input into world changes:
//! text -> parse -> Command -> CommandExecutor -> ExecutionResult

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, ExecutionResult};
pub use parser::{check_watch_seconds, parse, Command, MAX_WATCH_SECONDS};

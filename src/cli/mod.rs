pub mod commands;
pub mod run;
pub mod check;
pub mod serve;
pub mod progress;

pub use commands::{Cli, Commands};

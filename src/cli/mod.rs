pub mod commands;
pub mod compare;

pub use commands::Cli;

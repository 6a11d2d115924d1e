#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SAUNTER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod character;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod direction;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod object;
pub mod reaction;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use config::{EngineConfig, load_config};
pub use error::ConfigError;
pub use loader::{load_world, load_world_from};
pub use reaction::{Outcome, Reaction};
pub use repl::{execute, run_repl};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::World;

//! Loader utilities for building a `World` from serialized data.
//!
//! World content comes from `world.ron` (a `WorldDef`); engine settings come from
//! `config.toml` and are loaded separately through [`crate::config::load_config`].

pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use saunter_data::WorldDef;

use crate::config::EngineConfig;
use crate::data_paths::data_path;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::World;

/// Load the `World` from `world.ron` in the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation, or configuration errors.
pub fn load_world(config: &EngineConfig) -> Result<World> {
    load_world_from(&data_path("world.ron"), config)
}

/// Load, validate and build a `World` from a specific RON file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation, or configuration errors.
pub fn load_world_from(world_ron_path: &Path, config: &EngineConfig) -> Result<World> {
    let worlddef = load_worlddef(world_ron_path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let world = build_world_from_def(&worlddef, config).context("while building world from worlddef")?;
    info!("{} rooms added to World", world.rooms.len());
    info!("{} objects added to World", world.objects.len());
    info!("{} actions added to World", world.actions.lexicon().len());
    info!("{} directions added to World", world.directions.lexicon().len());
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = saunter_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into the engine's registries.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use saunter_data::{ActionDef, CharacterDef, ObjectDef, WorldDef};

use crate::config::EngineConfig;
use crate::object::GameObject;
use crate::reaction::Reaction;
use crate::room::Room;
use crate::world::World;

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid world RON
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a `WorldDef` into a populated `World`, with the character placed in its
/// starting room.
///
/// # Errors
/// - on any configuration error: duplicate names, unknown rooms/objects/directions,
///   missing opposites, or reactions naming unknown predicates or side effects
pub fn build_world_from_def(def: &WorldDef, config: &EngineConfig) -> Result<World> {
    let mut world = World::new_empty();
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);
    world.verbs = config.verbs.clone();

    for dir in &def.directions {
        world.directions.direction(&dir.name, &dir.aliases);
    }
    for (a, b) in &def.opposites {
        world
            .directions
            .opposite(a, b)
            .with_context(|| format!("declaring {a} and {b} opposites"))?;
    }

    world.actions.stop_words(&def.stop_words);
    for action in &def.actions {
        add_action(&mut world, action)?;
    }
    for verb in world.verbs.all() {
        if !world.actions.contains(verb) {
            warn!("builtin verb '{verb}' is not a registered action; players can't use it");
        }
    }

    for object in &def.objects {
        let built = object_from_def(&world, object)?;
        world
            .objects
            .register(built, &object.aliases)
            .with_context(|| format!("registering object '{}'", object.name))?;
    }
    for pair in &def.pairs {
        let reaction = Reaction::try_from(&pair.reaction)
            .with_context(|| format!("building use reaction for ({}, {})", pair.source, pair.target))?;
        world
            .objects
            .on_use(&pair.source, &pair.target, reaction, pair.bidirectional)?;
    }

    for room in &def.rooms {
        world
            .rooms
            .add_new(Room::new(&room.name, &room.description, &room.objects))?;
    }
    for edge in &def.edges {
        world
            .rooms
            .map(&edge.from, &edge.direction, &edge.to, edge.bidirectional, &world.directions)
            .with_context(|| format!("mapping {} -{}-> {}", edge.from, edge.direction, edge.to))?;
    }

    place_character(&mut world, &def.character)?;
    Ok(world)
}

fn add_action(world: &mut World, def: &ActionDef) -> Result<()> {
    world.actions.action(&def.name, &def.aliases);
    if let Some(reaction) = &def.reaction {
        let reaction =
            Reaction::try_from(reaction).with_context(|| format!("building reaction for action '{}'", def.name))?;
        world.actions.on(&def.name, reaction)?;
    }
    Ok(())
}

fn object_from_def(world: &World, def: &ObjectDef) -> Result<GameObject> {
    // permitted actions may be written as aliases; store canonical names
    let canonical = |action: &str| {
        world
            .actions
            .canonicalize(action)
            .map_or_else(|| action.to_string(), str::to_string)
    };
    let actions: Vec<String> = def.actions.iter().map(|a| canonical(a)).collect();
    let mut object = GameObject::new(&def.name, &def.description, &actions);
    for callback in &def.callbacks {
        let reaction = Reaction::try_from(&callback.reaction)
            .with_context(|| format!("building '{}' reaction for object '{}'", callback.action, def.name))?;
        object.on(&canonical(&callback.action), reaction);
    }
    Ok(object)
}

fn place_character(world: &mut World, def: &CharacterDef) -> Result<()> {
    world.character.capacity = def.capacity;
    for object in &def.inventory {
        world.character.add_item(object);
    }
    for hook in &def.on_enter {
        let reaction = Reaction::try_from(&hook.reaction)
            .with_context(|| format!("building enter hook for '{}'", hook.room))?;
        world.character.on_enter(&hook.room, reaction);
    }
    for hook in &def.on_exit {
        let reaction = Reaction::try_from(&hook.reaction)
            .with_context(|| format!("building exit hook for '{}'", hook.room))?;
        world.character.on_exit(&hook.room, reaction);
    }
    world
        .start_in(&def.start_room)
        .context("placing character in its starting room")?;
    info!(
        "character starts in '{}' holding {} object(s)",
        def.start_room,
        world.character.inventory.len()
    );
    Ok(())
}

//! `repl::look` module
//!
//! Room and object descriptions.

use anyhow::Result;

use crate::reaction::Outcome;
use crate::view::{View, ViewItem};
use crate::world::World;

use super::denied;

/// Push the current room's name, description, exits and contents to the view.
///
/// # Errors
/// - if the character's room can't be found
pub fn describe_room(world: &World, view: &mut View) -> Result<()> {
    let room = world.current_room()?;
    view.push(ViewItem::RoomName(room.name.clone()));
    view.push(ViewItem::RoomDescription(room.description.clone()));
    for edge in world.rooms.adjacent(&room.name) {
        view.push(ViewItem::Exit {
            direction: edge.direction.clone(),
            room: edge.to.clone(),
        });
    }
    if !room.objects.is_empty() {
        view.push(ViewItem::RoomContents(room.objects.clone()));
    }
    Ok(())
}

/// Describe the room, or a single object that is within reach.
///
/// # Errors
/// - if the character's room can't be found
pub fn look_handler(world: &World, view: &mut View, object: Option<&str>) -> Result<Outcome> {
    let Some(name) = object else {
        describe_room(world, view)?;
        return Ok(Outcome::success(""));
    };
    match world.objects.get(name) {
        Some(object) if world.within_reach(name) => {
            view.push(ViewItem::ObjectDescription {
                name: object.name.clone(),
                description: object.description.clone(),
            });
            Ok(Outcome::success(object.description.clone()))
        },
        _ => Ok(denied(view, format!("You don't see the {name} here."))),
    }
}

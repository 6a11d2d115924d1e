//! `repl::inventory` module
//!
//! Handlers for commands that move objects between the room and the character:
//! take, drop, and listing the inventory.

use anyhow::Result;
use log::info;

use crate::reaction::Outcome;
use crate::view::{View, ViewItem};
use crate::world::World;

use super::{denied, done};

/// Pick an object up from the current room, if there is room to carry it.
///
/// # Errors
/// - if the character's room can't be found
pub fn take_handler(world: &mut World, view: &mut View, object: Option<&str>) -> Result<Outcome> {
    let Some(object) = object else {
        return Ok(denied(view, "Take what?".to_string()));
    };
    if !world.current_room()?.contains(object) {
        let message = if world.character.holds(object) {
            format!("You already have the {object}.")
        } else {
            format!("You don't see the {object} here.")
        };
        return Ok(denied(view, message));
    }
    if !world.character.has_room_for_one_more() {
        info!("'{object}' not taken: inventory full ({:?})", world.character.capacity);
        return Ok(denied(view, "You can't carry any more.".to_string()));
    }

    world.current_room_mut()?.remove_object(object);
    world.character.add_item(object);
    info!("'{object}' moved from '{}' to inventory", world.character.room);
    Ok(done(view, format!("You pick up the {object}.")))
}

/// Put one held copy of an object down in the current room.
///
/// # Errors
/// - if the character's room can't be found
pub fn drop_handler(world: &mut World, view: &mut View, object: Option<&str>) -> Result<Outcome> {
    let Some(object) = object else {
        return Ok(denied(view, "Drop what?".to_string()));
    };
    if !world.character.holds(object) {
        return Ok(denied(view, format!("You don't have the {object}.")));
    }

    world.current_room_mut()?.add_object(object);
    world.character.remove_item(object);
    info!("'{object}' moved from inventory to '{}'", world.character.room);
    Ok(done(view, format!("You drop the {object}.")))
}

pub fn inventory_handler(world: &World, view: &mut View) -> Outcome {
    view.push(ViewItem::Inventory(world.character.inventory.clone()));
    Outcome::success("")
}

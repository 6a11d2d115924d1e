//! `repl::movement` module
//!
//! Contains the handler for commands that change the character's room.

use anyhow::Result;
use log::info;

use crate::reaction::{Outcome, Scope};
use crate::view::View;
use crate::world::World;

use super::{denied, describe_room};

/// Move the character through `direction`, if there is an exit that way and neither
/// the destination's enter hook nor the origin's exit hook objects.
///
/// # Errors
/// - if a hook's side effect or the room description can't find the current room
pub fn go_handler(world: &mut World, view: &mut View, direction: Option<&str>) -> Result<Outcome> {
    let Some(direction) = direction else {
        return Ok(denied(view, "You must give a valid direction to go.".to_string()));
    };
    let origin = world.character.room.clone();
    let Some(destination) = world.rooms.go(&origin, direction).map(str::to_string) else {
        info!("no exit {direction} from '{origin}'");
        return Ok(denied(view, format!("You cannot go {direction}")));
    };

    let enter_hook = world.character.enter_hook(&destination).cloned();
    let exit_hook = world.character.exit_hook(&origin).cloned();
    for hook in [enter_hook, exit_hook].into_iter().flatten() {
        if let Some(outcome) = hook.evaluate(world, &Scope::default())? {
            view.push_outcome(&outcome);
            if !outcome.succeeded {
                info!("move from '{origin}' to '{destination}' blocked by hook");
                return Ok(outcome);
            }
        }
    }

    world.character.room.clone_from(&destination);
    world.session.visit(&destination);
    info!("character moved from '{origin}' to '{destination}'");
    describe_room(world, view)?;
    Ok(Outcome::success(""))
}

//! `repl::item` module
//!
//! The builtin `use` verb. Object and pair reactions do the interesting work; this
//! handler only reports what happens when none of them claimed the command.

use crate::reaction::Outcome;
use crate::view::{NOTHING_HAPPENS, View};
use crate::world::World;

use super::denied;

/// Use an object, optionally on another. At least one of the two must be held.
///
/// `notified` tells whether a reaction already handled the command. The resolver
/// narrates for it if the reaction stayed quiet.
pub fn use_handler(
    world: &World,
    view: &mut View,
    source: Option<&str>,
    target: Option<&str>,
    notified: bool,
) -> Outcome {
    let Some(source) = source else {
        return denied(view, "Use what?".to_string());
    };
    let holding = world.character.holds(source) || target.is_some_and(|t| world.character.holds(t));
    if !holding {
        return denied(view, format!("You aren't holding the {source}."));
    }
    if notified {
        Outcome::success("")
    } else {
        denied(view, NOTHING_HAPPENS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn using_requires_holding_either_object() {
        let mut world = World::new_empty();
        let mut view = View::new();
        let outcome = use_handler(&world, &mut view, Some("key"), Some("door"), false);
        assert_eq!(outcome, Outcome::failure("You aren't holding the key."));

        world.character.add_item("key");
        let outcome = use_handler(&world, &mut view, Some("door"), Some("key"), false);
        assert_eq!(outcome, Outcome::failure("Nothing happens."));
        let outcome = use_handler(&world, &mut view, Some("key"), None, true);
        assert!(outcome.succeeded);
    }

    #[test]
    fn using_nothing_asks_what() {
        let world = World::new_empty();
        let mut view = View::new();
        use_handler(&world, &mut view, None, None, false);
        assert_eq!(view.lines(), vec!["Use what?"]);
    }
}

//! Command module
//!
//! Turns a line of player input into a [`ParsedCommand`] by running the registries'
//! matchers over the tokens in a fixed order: action, source object, stop words,
//! target object, direction. Each stage only consumes its own tokens.

use log::debug;

use crate::lexicon::{Cursor, tokenize};
use crate::world::World;

/// Everything extracted from one line of input. Names are canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub action: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub direction: Option<String>,
    /// Tokens no stage could consume.
    pub leftover: Vec<String>,
}

impl ParsedCommand {
    /// True if every token was consumed and an action was found.
    pub fn is_complete(&self) -> bool {
        self.action.is_some() && self.leftover.is_empty()
    }
}

/// Parse one line of input against the world's vocabulary.
pub fn parse_command(world: &World, input: &str) -> ParsedCommand {
    let tokens = tokenize(input);
    let cursor = Cursor::new(&tokens);

    let (action, cursor) = world.actions.eat(cursor);
    let (source, cursor) = world.objects.eat(cursor);
    // "use key on door": drop "on" so the door can be found
    let cursor = world.actions.skip_stop_words(cursor);
    let (target, cursor) = world.objects.eat(cursor);
    let (direction, cursor) = world.directions.eat(cursor);

    let parsed = ParsedCommand {
        action: action.map(str::to_string),
        source: source.map(str::to_string),
        target: target.map(str::to_string),
        direction: direction.map(str::to_string),
        leftover: cursor.remaining().to_vec(),
    };
    debug!("parsed {input:?} -> {parsed:?}");
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::GameObject;

    fn world() -> World {
        let mut world = World::new_empty();
        world
            .actions
            .action("take", &["take", "pick up", "grab"])
            .action("use", &["use"])
            .action("go", &["go", "walk"]);
        world.directions.direction("up", &["up", "u"]).direction("east", &["east", "e"]);
        world
            .objects
            .register(GameObject::new("bathroom key", "A small key.", &["take", "use"]), &["bathroom key", "key"])
            .expect("key")
            .register(GameObject::new("towel", "Fluffy.", &["take", "use"]), &["towel"])
            .expect("towel");
        world
    }

    #[test]
    fn longest_action_alias_beats_direction_prefix() {
        let parsed = parse_command(&world(), "pick up the key");
        assert_eq!(parsed.action.as_deref(), Some("take"));
        assert_eq!(parsed.source.as_deref(), Some("bathroom key"));
        assert_eq!(parsed.direction, None);
        assert!(parsed.is_complete());
    }

    #[test]
    fn stop_words_separate_source_and_target() {
        let parsed = parse_command(&world(), "use key on the towel");
        assert_eq!(parsed.action.as_deref(), Some("use"));
        assert_eq!(parsed.source.as_deref(), Some("bathroom key"));
        assert_eq!(parsed.target.as_deref(), Some("towel"));
        assert!(parsed.leftover.is_empty());
    }

    #[test]
    fn direction_comes_last() {
        let parsed = parse_command(&world(), "walk e");
        assert_eq!(parsed.action.as_deref(), Some("go"));
        assert_eq!(parsed.direction.as_deref(), Some("east"));
        assert_eq!(parsed.source, None);
    }

    #[test]
    fn unmatched_tokens_are_left_over() {
        let parsed = parse_command(&world(), "take key quickly");
        assert_eq!(parsed.source.as_deref(), Some("bathroom key"));
        assert_eq!(parsed.leftover, vec!["quickly".to_string()]);
        assert!(!parsed.is_complete());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let parsed = parse_command(&world(), "TAKE key");
        assert_eq!(parsed.action, None);
        assert_eq!(parsed.leftover, vec!["TAKE".to_string(), "key".to_string()]);
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        assert_eq!(parse_command(&world(), "   "), ParsedCommand::default());
    }
}

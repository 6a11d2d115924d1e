//! `ViewItem` module
//!
//! A `ViewItem` is one piece of narration sent to the `View`. Variants carry the raw
//! facts (names, descriptions, lists) and know how to phrase themselves as plain
//! text; styling is applied by the `View` when the turn is flushed.

use variantly::Variantly;

use crate::room::title_case;

/// Narration for an outcome that failed without saying why.
pub const GENERIC_FAILURE: &str = "That didn't work.";
/// Narration for input that couldn't be resolved to a command.
pub const UNRECOGNIZED: &str = "I don't understand.";
/// Said when a reaction changed the world without narrating it.
pub const GENERIC_SUCCESS: &str = "Done.";
pub const NOTHING_HAPPENS: &str = "Nothing happens.";

#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    /// Room heading; the raw room name.
    RoomName(String),
    RoomDescription(String),
    Exit {
        direction: String,
        room: String,
    },
    /// Objects lying in the room, in placement order.
    RoomContents(Vec<String>),
    ObjectDescription {
        name: String,
        description: String,
    },
    Inventory(Vec<String>),
    /// Message produced by a reaction tree.
    Reaction(String),
    ActionSuccess(String),
    ActionFailure(String),
    /// Notices from the engine itself rather than the story.
    EngineMessage(String),
    Unrecognized,
}

impl ViewItem {
    /// Plain-text lines for this item.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ViewItem::RoomName(name) => vec![title_case(name)],
            ViewItem::RoomDescription(description) => vec![format!("    {description}"), String::new()],
            ViewItem::Exit { direction, room } => vec![format!("{} is to the {direction}.", title_case(room))],
            ViewItem::RoomContents(objects) => vec![format!("There is {} here.", with_articles(objects))],
            ViewItem::ObjectDescription { description, .. } => vec![description.clone()],
            ViewItem::Inventory(objects) => {
                if objects.is_empty() {
                    vec!["Your inventory is empty.".to_string()]
                } else {
                    let listed = objects.iter().map(|o| format!("a {o}")).collect::<Vec<_>>().join(", ");
                    vec![format!("You have {listed}.")]
                }
            },
            ViewItem::Reaction(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::ActionFailure(msg)
            | ViewItem::EngineMessage(msg) => {
                vec![msg.clone()]
            },
            ViewItem::Unrecognized => vec![UNRECOGNIZED.to_string()],
        }
    }
}

/// "a X", "a X and a Y", "a X, a Y, and a Z".
fn with_articles(objects: &[String]) -> String {
    let named: Vec<String> = objects.iter().map(|o| format!("a {o}")).collect();
    match named.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

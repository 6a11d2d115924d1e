//! Configuration errors.
//!
//! These are content-authoring mistakes (a duplicated object, a hook on a room that
//! doesn't exist, a reaction naming an unknown predicate). They abort world setup and
//! are never shown to the player as part of the story.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("more than one object named \"{0}\"")]
    DuplicateObject(String),
    #[error("more than one room named \"{0}\"")]
    DuplicateRoom(String),
    #[error("no object named \"{0}\"")]
    UnknownObject(String),
    #[error("no room named \"{0}\"")]
    UnknownRoom(String),
    #[error("no action named \"{0}\"")]
    UnknownAction(String),
    #[error("no direction named \"{0}\"")]
    UnknownDirection(String),
    #[error("direction \"{0}\" has no registered opposite")]
    MissingOpposite(String),
    #[error("unknown predicate \"{0}\"")]
    UnknownPredicate(String),
    #[error("unknown side effect \"{0}\"")]
    UnknownSideEffect(String),
    #[error("side effect \"{name}\" takes at most {max} argument(s), got {got}")]
    TooManyArguments { name: String, max: usize, got: usize },
}

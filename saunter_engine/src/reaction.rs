//! Reaction module --
//!
//! Content authors customize behavior with small reaction trees: a terminal
//! [`Outcome`], a conditional branch on a [`Predicate`], a sequence of statements, or a
//! [`SideEffect`] that changes the world. Trees are built once at load time and
//! evaluated fresh every time the callback owning them fires.
//!
//! ```
//! use saunter_engine::reaction::{add_to_inventory, cond, fail, has_visited, progn, succeed};
//!
//! // "eat the taco": only works once the bathroom has been found
//! let reaction = cond(
//!     has_visited("bathroom"),
//!     progn(vec![add_to_inventory(Some("empty wrapper")), succeed("Delicious.")]),
//!     fail(""),
//! );
//! # let _ = reaction;
//! ```

pub mod effect;
pub mod predicate;

pub use effect::*;
pub use predicate::*;

use anyhow::Result;
use log::debug;
use saunter_data::ReactionDef;

use crate::error::ConfigError;
use crate::world::World;

/// Result of evaluating a reaction or a builtin verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub message: String,
    /// Suppress any further narration this turn.
    pub silence: bool,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            silence: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            silence: false,
        }
    }
}

/// A reaction tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Outcome(Outcome),
    Cond {
        predicate: Predicate,
        then: Box<Reaction>,
        otherwise: Box<Reaction>,
    },
    Progn(Vec<Reaction>),
    Effect(SideEffect),
}

/// What a reaction is evaluated on behalf of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// Object used by side effects whose target was left out.
    pub subject: Option<String>,
}

impl Scope {
    pub fn of(subject: &str) -> Self {
        Self {
            subject: Some(subject.to_string()),
        }
    }
}

impl Reaction {
    /// Evaluate against the world, performing side effects as they are reached.
    ///
    /// Returns `None` when evaluation ends on a side effect rather than an outcome.
    ///
    /// # Errors
    /// - if a side effect finds the world inconsistent (e.g. the character's room is missing)
    pub fn evaluate(&self, world: &mut World, scope: &Scope) -> Result<Option<Outcome>> {
        match self {
            Reaction::Outcome(outcome) => Ok(Some(outcome.clone())),
            Reaction::Cond {
                predicate,
                then,
                otherwise,
            } => {
                let holds = predicate.holds(world);
                debug!("condition {predicate:?} -> {holds}");
                if holds {
                    then.evaluate(world, scope)
                } else {
                    otherwise.evaluate(world, scope)
                }
            },
            Reaction::Progn(statements) => {
                let mut last = None;
                for statement in statements {
                    last = statement.evaluate(world, scope)?;
                }
                Ok(last)
            },
            Reaction::Effect(effect) => {
                effect.apply(world, scope)?;
                Ok(None)
            },
        }
    }

    /// Set the silence flag on a terminal outcome. Other nodes are returned unchanged.
    #[must_use]
    pub fn silenced(mut self) -> Self {
        if let Reaction::Outcome(outcome) = &mut self {
            outcome.silence = true;
        }
        self
    }
}

/// Succeed and let normal processing of the command continue.
pub fn succeed(message: impl Into<String>) -> Reaction {
    Reaction::Outcome(Outcome::success(message))
}

/// Fail and stop processing of the command.
pub fn fail(message: impl Into<String>) -> Reaction {
    Reaction::Outcome(Outcome::failure(message))
}

/// Narrate without changing how the command proceeds.
pub fn info(message: impl Into<String>) -> Reaction {
    Reaction::Outcome(Outcome::success(message))
}

pub fn cond(predicate: Predicate, then: Reaction, otherwise: Reaction) -> Reaction {
    Reaction::Cond {
        predicate,
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    }
}

pub fn progn(statements: Vec<Reaction>) -> Reaction {
    Reaction::Progn(statements)
}

impl TryFrom<&ReactionDef> for Reaction {
    type Error = ConfigError;

    fn try_from(def: &ReactionDef) -> Result<Self, Self::Error> {
        let outcome = |succeeded: bool, message: &str, silence: bool| {
            Reaction::Outcome(Outcome {
                succeeded,
                message: message.to_string(),
                silence,
            })
        };
        Ok(match def {
            ReactionDef::Succeed { message, silence } | ReactionDef::Info { message, silence } => {
                outcome(true, message, *silence)
            },
            ReactionDef::Fail { message, silence } => outcome(false, message, *silence),
            ReactionDef::Cond {
                predicate,
                then,
                otherwise,
            } => Reaction::Cond {
                predicate: Predicate::try_from(predicate)?,
                then: Box::new(Reaction::try_from(then.as_ref())?),
                otherwise: Box::new(Reaction::try_from(otherwise.as_ref())?),
            },
            ReactionDef::Progn(statements) => Reaction::Progn(
                statements
                    .iter()
                    .map(Reaction::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            ReactionDef::Effect(effect) => Reaction::Effect(SideEffect::try_from(effect)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;
    use saunter_data::{EffectDef, PredicateDef};

    fn world() -> World {
        let mut world = World::new_empty();
        world.rooms.add(Room::new("kitchen", "A greasy kitchen.", &["taco"]));
        world.rooms.add(Room::new("bathroom", "A well kept bathroom.", &[] as &[&str]));
        world.start_in("kitchen").expect("start room");
        world
    }

    #[test]
    fn outcome_is_returned_as_is() {
        let mut world = world();
        let result = succeed("Yum.").silenced().evaluate(&mut world, &Scope::default());
        assert_eq!(
            result.expect("eval"),
            Some(Outcome {
                succeeded: true,
                message: "Yum.".into(),
                silence: true,
            })
        );
    }

    #[test]
    fn cond_picks_branch_from_world_state() {
        let mut world = world();
        let reaction = cond(in_room("kitchen"), succeed("here"), fail("elsewhere"));
        let outcome = reaction.evaluate(&mut world, &Scope::default()).expect("eval");
        assert_eq!(outcome, Some(Outcome::success("here")));

        world.character.room = "bathroom".into();
        let outcome = reaction.evaluate(&mut world, &Scope::default()).expect("eval");
        assert_eq!(outcome, Some(Outcome::failure("elsewhere")));
    }

    #[test]
    fn progn_runs_every_statement_and_returns_the_last_result() {
        let mut world = world();
        let reaction = progn(vec![
            fail("discarded"),
            add_to_inventory(Some("taco")),
            succeed("kept"),
        ]);
        let outcome = reaction.evaluate(&mut world, &Scope::default()).expect("eval");
        assert_eq!(outcome, Some(Outcome::success("kept")));
        assert_eq!(world.character.inventory, vec!["taco".to_string()]);
    }

    #[test]
    fn lone_side_effect_has_no_outcome() {
        let mut world = world();
        let outcome = add_to_inventory(None)
            .evaluate(&mut world, &Scope::of("taco"))
            .expect("eval");
        assert_eq!(outcome, None);
        assert!(world.character.holds("taco"));
    }

    #[test]
    fn progn_ending_in_an_effect_has_no_outcome() {
        let mut world = world();
        let reaction = progn(vec![succeed("ignored"), destroy(Some("taco"))]);
        assert_eq!(reaction.evaluate(&mut world, &Scope::default()).expect("eval"), None);
        assert!(!world.current_room().expect("room").contains("taco"));
    }

    #[test]
    fn defs_convert_by_name() {
        let def = ReactionDef::Cond {
            predicate: PredicateDef {
                name: "inventory_has".into(),
                arg: "key".into(),
            },
            then: Box::new(ReactionDef::Progn(vec![
                ReactionDef::Effect(EffectDef {
                    name: "remove_from_inventory".into(),
                    args: Vec::new(),
                }),
                ReactionDef::Info {
                    message: "Click.".into(),
                    silence: true,
                },
            ])),
            otherwise: Box::new(ReactionDef::Fail {
                message: String::new(),
                silence: false,
            }),
        };
        let expected = cond(
            inventory_has("key"),
            progn(vec![remove_from_inventory(None), info("Click.").silenced()]),
            fail(""),
        );
        assert_eq!(Reaction::try_from(&def), Ok(expected));
    }

    #[test]
    fn unknown_names_are_configuration_errors() {
        let def = ReactionDef::Cond {
            predicate: PredicateDef {
                name: "is_raining".into(),
                arg: String::new(),
            },
            then: Box::new(ReactionDef::Progn(Vec::new())),
            otherwise: Box::new(ReactionDef::Progn(Vec::new())),
        };
        assert_eq!(
            Reaction::try_from(&def),
            Err(ConfigError::UnknownPredicate("is_raining".into()))
        );

        let def = ReactionDef::Effect(EffectDef {
            name: "explode".into(),
            args: Vec::new(),
        });
        assert_eq!(
            Reaction::try_from(&def),
            Err(ConfigError::UnknownSideEffect("explode".into()))
        );
    }
}

//! REPL and command resolution.
//!
//! The game runs in a read-eval-print loop. [`execute`] resolves a single line of
//! input against the [`World`]: it parses the command, gives object and pair
//! reactions first claim on the turn, then falls back to the builtin verbs whose
//! handlers live in the submodules.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;

use anyhow::Result;
use log::{debug, info, warn};

use crate::command::{ParsedCommand, parse_command};
use crate::config::EngineConfig;
use crate::reaction::{Outcome, Reaction, Scope};
use crate::style::GameStyle;
use crate::view::{GENERIC_SUCCESS, NOTHING_HAPPENS, UNRECOGNIZED, View, ViewItem};
use crate::world::World;

use input::{InputEvent, InputManager, vocabulary_terms};

/// Words that end the session instead of being resolved as commands.
const QUIT_WORDS: &[&str] = &["quit", "exit"];

/// Run the main read–eval–print loop until the player quits or input ends.
///
/// # Errors
/// - Propagates failures from command resolution, such as a missing room for the character.
pub fn run_repl(world: &mut World, config: &EngineConfig) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new(vocabulary_terms(world), config.history_file.clone());
    let prompt = config.prompt.prompt_style().to_string();

    loop {
        let line = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => {
                info!("end of input; leaving the game");
                break;
            },
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::EngineMessage("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        let line = if config.normalize_case { line.to_lowercase() } else { line };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line) {
            info!("player quit after {} turns", world.session.turn_count);
            break;
        }

        execute(world, &mut view, line)?;
        view.flush();
    }
    Ok(())
}

/// Resolve one line of input: parse it, notify object reactions, then fall back to
/// the action's own reaction or a builtin verb. Narration goes to `view`.
///
/// Input that can't be fully understood is reported without touching world state.
///
/// # Errors
/// - if a reaction or builtin verb finds the world inconsistent (e.g. a missing room)
pub fn execute(world: &mut World, view: &mut View, input: &str) -> Result<Outcome> {
    view.begin_turn();
    world.session.turn_count += 1;
    info!("================> BEGIN TURN {} <================", world.session.turn_count);

    let mark = view.items.len();
    let command = parse_command(world, input);
    let Some(action) = command.action.clone().filter(|_| command.is_complete()) else {
        return Ok(unrecognized(view));
    };

    // Notify: a pair reaction for `use`, else the source's, else the target's
    let notification = match find_callback(world, &command, &action) {
        Some((reaction, scope)) => {
            let outcome = reaction.evaluate(world, &scope)?;
            debug!("notified {:?} for '{action}' -> {outcome:?}", scope.subject);
            if let Some(outcome) = &outcome {
                view.push_outcome(outcome);
                if !outcome.succeeded {
                    return Ok(outcome.clone());
                }
            }
            Some(outcome)
        },
        None => None,
    };
    let notified = notification.is_some();
    let fallback = if action == world.verbs.use_verb {
        NOTHING_HAPPENS
    } else {
        GENERIC_SUCCESS
    };

    if let Some(reaction) = world.actions.reaction(&action).cloned() {
        let scope = command.source.as_deref().map(Scope::of).unwrap_or_default();
        return action_reaction(world, view, &reaction, &scope);
    }

    if let Some(source) = command.source.as_deref()
        && let Some(object) = world.objects.get(source)
        && !object.permits(&action)
    {
        if notified {
            // the callback stood in for the verb
            let outcome = notification.flatten().unwrap_or_else(|| Outcome::success(""));
            return Ok(ensure_narration(view, mark, outcome, fallback));
        }
        let message = if world.within_reach(source) {
            format!("You can't {action} the {source}.")
        } else {
            format!("You don't see the {source} here.")
        };
        return Ok(denied(view, message));
    }

    if let Some(outcome) = dispatch_builtin(world, view, &command, &action, notified)? {
        return Ok(if notified {
            ensure_narration(view, mark, outcome, fallback)
        } else {
            outcome
        });
    }

    if notified {
        let outcome = notification.flatten().unwrap_or_else(|| Outcome::success(""));
        Ok(ensure_narration(view, mark, outcome, fallback))
    } else {
        Ok(unrecognized(view))
    }
}

/// The first reaction with a claim on this command, and the scope to run it in.
fn find_callback(world: &World, command: &ParsedCommand, action: &str) -> Option<(Reaction, Scope)> {
    let source = command.source.as_deref();
    let target = command.target.as_deref();

    if action == world.verbs.use_verb
        && let (Some(source), Some(target)) = (source, target)
        && let Some(reaction) = world.objects.pair(source, target)
    {
        return Some((reaction.clone(), Scope::of(source)));
    }

    [source, target].into_iter().flatten().find_map(|name| {
        world
            .objects
            .get(name)?
            .callback(action)
            .map(|reaction| (reaction.clone(), Scope::of(name)))
    })
}

/// Run an action-level reaction. Anything short of a narrated success is reported as
/// a failure.
fn action_reaction(world: &mut World, view: &mut View, reaction: &Reaction, scope: &Scope) -> Result<Outcome> {
    let outcome = match reaction.evaluate(world, scope)? {
        Some(outcome) if outcome.succeeded && outcome.message.is_empty() => Outcome {
            succeeded: false,
            ..outcome
        },
        Some(outcome) => outcome,
        None => Outcome::failure(""),
    };
    view.push_outcome(&outcome);
    Ok(outcome)
}

fn dispatch_builtin(
    world: &mut World,
    view: &mut View,
    command: &ParsedCommand,
    action: &str,
    notified: bool,
) -> Result<Option<Outcome>> {
    let verbs = world.verbs.clone();
    let source = command.source.as_deref();

    let outcome = if action == verbs.use_verb {
        use_handler(world, view, source, command.target.as_deref(), notified)
    } else if action == verbs.go {
        go_handler(world, view, command.direction.as_deref())?
    } else if action == verbs.look {
        look_handler(world, view, source)?
    } else if action == verbs.take {
        take_handler(world, view, source)?
    } else if action == verbs.drop {
        drop_handler(world, view, source)?
    } else if action == verbs.inventory {
        inventory_handler(world, view)
    } else {
        return Ok(None);
    };
    Ok(Some(outcome))
}

/// A successful turn that narrated nothing (and wasn't silenced) still gets a line.
fn ensure_narration(view: &mut View, mark: usize, outcome: Outcome, fallback: &str) -> Outcome {
    if !outcome.succeeded || view.is_silenced() || view.items.len() > mark {
        return outcome;
    }
    debug!("turn produced no narration, using '{fallback}'");
    done(view, fallback.to_string())
}

fn unrecognized(view: &mut View) -> Outcome {
    view.push(ViewItem::Unrecognized);
    Outcome::failure(UNRECOGNIZED)
}

/// Report a builtin verb that couldn't be carried out.
pub(crate) fn denied(view: &mut View, message: String) -> Outcome {
    view.push(ViewItem::ActionFailure(message.clone()));
    Outcome::failure(message)
}

/// Report a builtin verb that was carried out.
pub(crate) fn done(view: &mut View, message: String) -> Outcome {
    view.push(ViewItem::ActionSuccess(message.clone()));
    Outcome::success(message)
}

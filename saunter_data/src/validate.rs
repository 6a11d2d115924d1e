use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateName { kind: &'static str, name: String },
    MissingReference { kind: &'static str, name: String, context: String },
    MissingOpposite { direction: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name '{name}'")
            },
            ValidationError::MissingReference { kind, name, context } => {
                write!(f, "missing {kind} '{name}' ({context})")
            },
            ValidationError::MissingOpposite { direction, context } => {
                write!(f, "direction '{direction}' has no opposite ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use saunter_data::{CharacterDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     rooms: vec![RoomDef {
///         name: "hall".into(),
///         description: "A drafty hall.".into(),
///         objects: Vec::new(),
///     }],
///     character: CharacterDef {
///         start_room: "hall".into(),
///         ..CharacterDef::default()
///     },
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut objects = HashSet::new();
    let mut actions = HashSet::new();
    let mut directions = HashSet::new();

    track_names(
        "room",
        world.rooms.iter().map(|r| r.name.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_names(
        "object",
        world.objects.iter().map(|o| o.name.as_str()),
        &mut objects,
        &mut errors,
    );
    track_names(
        "action",
        world.actions.iter().map(|a| a.name.as_str()),
        &mut actions,
        &mut errors,
    );
    track_names(
        "direction",
        world.directions.iter().map(|d| d.name.as_str()),
        &mut directions,
        &mut errors,
    );

    // aliases count as direction names for opposites and edges
    let direction_aliases: HashSet<String> = world
        .directions
        .iter()
        .flat_map(|d| std::iter::once(&d.name).chain(d.aliases.iter()))
        .cloned()
        .collect();

    let names = NameSets {
        rooms: &rooms,
        objects: &objects,
        directions: &direction_aliases,
    };

    for (a, b) in &world.opposites {
        check_ref("direction", a, names.directions, "opposite pair".to_string(), &mut errors);
        check_ref("direction", b, names.directions, "opposite pair".to_string(), &mut errors);
    }

    let has_opposite: HashSet<&str> = world
        .opposites
        .iter()
        .flat_map(|(a, b)| [a.as_str(), b.as_str()])
        .collect();

    for room in &world.rooms {
        for object in &room.objects {
            check_ref(
                "object",
                object,
                names.objects,
                format!("contents of room '{}'", room.name),
                &mut errors,
            );
        }
    }

    for edge in &world.edges {
        let context = format!("edge '{}' -{}-> '{}'", edge.from, edge.direction, edge.to);
        check_ref("room", &edge.from, names.rooms, context.clone(), &mut errors);
        check_ref("room", &edge.to, names.rooms, context.clone(), &mut errors);
        check_ref("direction", &edge.direction, names.directions, context.clone(), &mut errors);
        if edge.bidirectional && !opposite_known(world, &edge.direction, &has_opposite) {
            errors.push(ValidationError::MissingOpposite {
                direction: edge.direction.clone(),
                context,
            });
        }
    }

    for action in &world.actions {
        if let Some(reaction) = &action.reaction {
            validate_reaction(reaction, &names, &mut errors, &format!("action '{}'", action.name));
        }
    }

    for object in &world.objects {
        for callback in &object.callbacks {
            let context = format!("object '{}' on '{}'", object.name, callback.action);
            validate_reaction(&callback.reaction, &names, &mut errors, &context);
        }
    }

    for pair in &world.pairs {
        let context = format!("pair '{}' / '{}'", pair.source, pair.target);
        check_ref("object", &pair.source, names.objects, context.clone(), &mut errors);
        check_ref("object", &pair.target, names.objects, context.clone(), &mut errors);
        validate_reaction(&pair.reaction, &names, &mut errors, &context);
    }

    let character = &world.character;
    if character.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "character start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &character.start_room,
            names.rooms,
            "character start room".to_string(),
            &mut errors,
        );
    }
    if character.capacity == Some(0) {
        errors.push(ValidationError::InvalidValue {
            context: "character capacity must be at least 1".to_string(),
        });
    }
    for object in &character.inventory {
        check_ref(
            "object",
            object,
            names.objects,
            "character starting inventory".to_string(),
            &mut errors,
        );
    }
    for (kind, hooks) in [("enter", &character.on_enter), ("exit", &character.on_exit)] {
        for hook in hooks {
            let context = format!("{kind} hook for '{}'", hook.room);
            check_ref("room", &hook.room, names.rooms, context.clone(), &mut errors);
            validate_reaction(&hook.reaction, &names, &mut errors, &context);
        }
    }

    errors
}

/// Name sets gathered once so cross-references can be checked cheaply.
struct NameSets<'a> {
    rooms: &'a HashSet<String>,
    objects: &'a HashSet<String>,
    directions: &'a HashSet<String>,
}

fn opposite_known(world: &WorldDef, direction: &str, has_opposite: &HashSet<&str>) -> bool {
    // an edge may use any alias of a direction, while opposites may be declared with another one
    world
        .directions
        .iter()
        .find(|d| d.name == direction || d.aliases.iter().any(|a| a == direction))
        .map_or(has_opposite.contains(direction), |d| {
            std::iter::once(&d.name)
                .chain(d.aliases.iter())
                .any(|alias| has_opposite.contains(alias.as_str()))
        })
}

fn track_names<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for name in names {
        if !set.insert(name.to_string()) {
            errors.push(ValidationError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, name: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(name) {
        errors.push(ValidationError::MissingReference {
            kind,
            name: name.to_string(),
            context,
        });
    }
}

/// Check references made by known predicates and side effects. Unknown names are left
/// for the engine, which refuses to build a world containing them.
fn validate_reaction(reaction: &ReactionDef, names: &NameSets<'_>, errors: &mut Vec<ValidationError>, context: &str) {
    match reaction {
        ReactionDef::Succeed { .. } | ReactionDef::Fail { .. } | ReactionDef::Info { .. } => {},
        ReactionDef::Cond {
            predicate,
            then,
            otherwise,
        } => {
            match predicate.name.as_str() {
                "inventory_has" => check_ref("object", &predicate.arg, names.objects, context.to_string(), errors),
                "in_room" | "has_visited" => check_ref("room", &predicate.arg, names.rooms, context.to_string(), errors),
                _ => {},
            }
            validate_reaction(then, names, errors, context);
            validate_reaction(otherwise, names, errors, context);
        },
        ReactionDef::Progn(statements) => {
            for statement in statements {
                validate_reaction(statement, names, errors, context);
            }
        },
        ReactionDef::Effect(effect) => {
            if matches!(
                effect.name.as_str(),
                "add_to_inventory" | "remove_from_inventory" | "destroy"
            ) {
                for arg in &effect.args {
                    check_ref("object", arg, names.objects, context.to_string(), errors);
                }
            }
        },
    }
}

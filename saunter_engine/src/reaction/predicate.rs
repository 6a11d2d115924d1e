//! predicate.rs -- world-state checks used by `cond` reactions.

use saunter_data::PredicateDef;

use crate::error::ConfigError;
use crate::world::World;

/// Game states a reaction can branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The character carries at least one of the named object.
    InventoryHas(String),
    /// The character is currently in the named room.
    InRoom(String),
    /// The named room has been entered at some point this session.
    HasVisited(String),
}

impl Predicate {
    pub fn holds(&self, world: &World) -> bool {
        match self {
            Self::InventoryHas(object) => world.character.holds(object),
            Self::InRoom(room) => world.character.room == *room,
            Self::HasVisited(room) => world.session.has_visited(room),
        }
    }
}

pub fn inventory_has(object: &str) -> Predicate {
    Predicate::InventoryHas(object.to_string())
}

pub fn in_room(room: &str) -> Predicate {
    Predicate::InRoom(room.to_string())
}

pub fn has_visited(room: &str) -> Predicate {
    Predicate::HasVisited(room.to_string())
}

impl TryFrom<&PredicateDef> for Predicate {
    type Error = ConfigError;

    fn try_from(def: &PredicateDef) -> Result<Self, Self::Error> {
        let arg = def.arg.clone();
        match def.name.as_str() {
            "inventory_has" => Ok(Self::InventoryHas(arg)),
            "in_room" => Ok(Self::InRoom(arg)),
            "has_visited" => Ok(Self::HasVisited(arg)),
            other => Err(ConfigError::UnknownPredicate(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    fn world() -> World {
        let mut world = World::new_empty();
        world.rooms.add(Room::new("living room", "Smells clean.", &[] as &[&str]));
        world.rooms.add(Room::new("bathroom", "A well kept bathroom.", &[] as &[&str]));
        world.start_in("living room").expect("start room");
        world
    }

    #[test]
    fn inventory_has_checks_held_objects() {
        let mut world = world();
        assert!(!inventory_has("towel").holds(&world));
        world.character.add_item("towel");
        assert!(inventory_has("towel").holds(&world));
    }

    #[test]
    fn in_room_tracks_the_current_room() {
        let world = world();
        assert!(in_room("living room").holds(&world));
        assert!(!in_room("bathroom").holds(&world));
    }

    #[test]
    fn has_visited_includes_the_starting_room() {
        let mut world = world();
        assert!(has_visited("living room").holds(&world));
        assert!(!has_visited("bathroom").holds(&world));
        world.session.visit("bathroom");
        assert!(has_visited("bathroom").holds(&world));
    }
}

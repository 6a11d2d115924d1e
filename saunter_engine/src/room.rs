//! Room definitions and the map connecting them.
//!
//! Any location the character can stand in is a "Room". Rooms hold an ordered list
//! of object names; [`Rooms`] also keeps the directed, direction-labeled edges
//! between rooms.

use std::collections::HashMap;

use log::info;

use crate::direction::Directions;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Object names, in the order they were placed here.
    pub objects: Vec<String>,
}

impl Room {
    pub fn new<S: AsRef<str>>(name: &str, description: &str, objects: &[S]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            objects: objects.iter().map(|o| o.as_ref().to_string()).collect(),
        }
    }

    pub fn contains(&self, object: &str) -> bool {
        self.objects.iter().any(|o| o == object)
    }

    pub fn add_object(&mut self, object: &str) {
        self.objects.push(object.to_string());
    }

    /// Remove the first copy of `object`. Returns false if it wasn't here.
    pub fn remove_object(&mut self, object: &str) -> bool {
        if let Some(index) = self.objects.iter().position(|o| o == object) {
            self.objects.remove(index);
            true
        } else {
            false
        }
    }

    /// Room name with each word capitalized, for headings.
    pub fn title(&self) -> String {
        title_case(&self.name)
    }
}

/// Capitalize the first letter of every word.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A one-way connection out of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub direction: String,
    pub to: String,
}

/// Every room plus the adjacency map between them.
#[derive(Debug, Clone, Default)]
pub struct Rooms {
    rooms: HashMap<String, Room>,
    edges: HashMap<String, Vec<Edge>>,
}

impl Rooms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room, replacing any room of the same name.
    pub fn add(&mut self, room: Room) -> &mut Self {
        self.rooms.insert(room.name.clone(), room);
        self
    }

    /// Add a room that must not already exist.
    ///
    /// # Errors
    /// - if a room with the same name is already registered
    pub fn add_new(&mut self, room: Room) -> Result<&mut Self, ConfigError> {
        if self.rooms.contains_key(&room.name) {
            return Err(ConfigError::DuplicateRoom(room.name));
        }
        Ok(self.add(room))
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// Connect `from` to `to` through `direction`. A bidirectional connection also links
    /// `to` back to `from` through the opposite direction. Directions may be given by alias;
    /// edges are always labeled with the canonical name.
    ///
    /// # Errors
    /// - if either room or the direction is unknown
    /// - if `bidirectional` and the direction has no registered opposite
    pub fn map(
        &mut self,
        from: &str,
        direction: &str,
        to: &str,
        bidirectional: bool,
        directions: &Directions,
    ) -> Result<&mut Self, ConfigError> {
        for room in [from, to] {
            if !self.contains(room) {
                return Err(ConfigError::UnknownRoom(room.to_string()));
            }
        }
        let forward = directions
            .canonicalize(direction)
            .ok_or_else(|| ConfigError::UnknownDirection(direction.to_string()))?;
        let reverse = if bidirectional {
            Some(directions.get_opposite(forward)?)
        } else {
            None
        };

        self.edges.entry(from.to_string()).or_default().push(Edge {
            direction: forward.to_string(),
            to: to.to_string(),
        });
        if let Some(reverse) = reverse {
            self.edges.entry(to.to_string()).or_default().push(Edge {
                direction: reverse.to_string(),
                to: from.to_string(),
            });
        }
        info!("mapped {from} -{forward}-> {to} (bidirectional: {bidirectional})");
        Ok(self)
    }

    /// Destination reached by leaving `from` through `direction`. The first matching edge
    /// wins if a room has several for the same direction.
    pub fn go(&self, from: &str, direction: &str) -> Option<&str> {
        self.adjacent(from)
            .iter()
            .find(|edge| edge.direction == direction)
            .map(|edge| edge.to.as_str())
    }

    /// Outgoing edges from a room, in the order they were mapped.
    pub fn adjacent(&self, from: &str) -> &[Edge] {
        self.edges.get(from).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directions() -> Directions {
        let mut dirs = Directions::new();
        dirs.direction("east", &["e"])
            .direction("west", &["w"])
            .direction("up", &["upstairs"]);
        dirs.opposite("east", "west").expect("opposites");
        dirs
    }

    fn rooms() -> Rooms {
        let mut rooms = Rooms::new();
        rooms
            .add(Room::new("bathroom", "A well kept bathroom.", &["towel"]))
            .add(Room::new("basement", "A dark, creepy room.", &["bathroom key"]))
            .add(Room::new("living room", "Smells clean.", &[] as &[&str]));
        rooms
    }

    #[test]
    fn bidirectional_map_adds_the_reverse_edge() {
        let dirs = directions();
        let mut rooms = rooms();
        rooms.map("living room", "w", "bathroom", true, &dirs).expect("map");
        assert_eq!(rooms.go("living room", "west"), Some("bathroom"));
        assert_eq!(rooms.go("bathroom", "east"), Some("living room"));
    }

    #[test]
    fn one_way_map_needs_no_opposite() {
        let dirs = directions();
        let mut rooms = rooms();
        rooms.map("basement", "upstairs", "bathroom", false, &dirs).expect("map");
        assert_eq!(rooms.go("basement", "up"), Some("bathroom"));
        assert!(rooms.adjacent("bathroom").is_empty());
    }

    #[test]
    fn bidirectional_map_without_opposite_fails() {
        let dirs = directions();
        let mut rooms = rooms();
        let result = rooms.map("basement", "up", "bathroom", true, &dirs).map(|_| ());
        assert_eq!(result, Err(ConfigError::MissingOpposite("up".into())));
        assert!(rooms.adjacent("basement").is_empty());
    }

    #[test]
    fn missing_edge_yields_no_destination() {
        let rooms = rooms();
        assert_eq!(rooms.go("bathroom", "east"), None);
    }

    #[test]
    fn first_duplicate_edge_wins() {
        let dirs = directions();
        let mut rooms = rooms();
        rooms
            .map("basement", "east", "bathroom", false, &dirs)
            .expect("map")
            .map("basement", "east", "living room", false, &dirs)
            .expect("map");
        assert_eq!(rooms.go("basement", "east"), Some("bathroom"));
    }

    #[test]
    fn remove_object_takes_first_copy_only() {
        let mut room = Room::new("den", "", &["coin", "coin"]);
        assert!(room.remove_object("coin"));
        assert_eq!(room.objects, vec!["coin".to_string()]);
        assert!(room.remove_object("coin"));
        assert!(!room.remove_object("coin"));
    }

    #[test]
    fn titles_capitalize_each_word() {
        assert_eq!(title_case("living room"), "Living Room");
        assert_eq!(Room::new("attic", "", &[] as &[&str]).title(), "Attic");
    }
}

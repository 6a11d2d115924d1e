//! Data structures representing the game world.
//!
//! This module defines [`World`], which owns every registry (actions, objects,
//! directions, rooms), the character, and the per-session state mutated as the
//! game is played.

use std::collections::HashSet;

use anyhow::{Result, anyhow};
use log::info;

use crate::action::Actions;
use crate::character::Character;
use crate::config::BuiltinVerbs;
use crate::direction::Directions;
use crate::error::ConfigError;
use crate::object::Objects;
use crate::reaction::Reaction;
use crate::room::{Room, Rooms};

/// State that only exists while a game is being played.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Rooms entered so far. Only ever grows.
    visited: HashSet<String>,
    pub turn_count: usize,
}

impl Session {
    pub fn visit(&mut self, room: &str) {
        if self.visited.insert(room.to_string()) {
            info!("first visit to '{room}'");
        }
    }

    pub fn has_visited(&self, room: &str) -> bool {
        self.visited.contains(room)
    }
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub actions: Actions,
    pub objects: Objects,
    pub directions: Directions,
    pub rooms: Rooms,
    pub character: Character,
    pub verbs: BuiltinVerbs,
    pub session: Session,
}

impl World {
    /// Create a new empty world with default verbs and stop words.
    pub fn new_empty() -> World {
        let world = Self::default();
        info!("new, empty 'World' created");
        world
    }

    /// Place the character in its starting room and mark that room visited.
    ///
    /// # Errors
    /// - if the room doesn't exist
    pub fn start_in(&mut self, room: &str) -> Result<(), ConfigError> {
        if !self.rooms.contains(room) {
            return Err(ConfigError::UnknownRoom(room.to_string()));
        }
        self.character.room = room.to_string();
        self.session.visit(room);
        Ok(())
    }

    /// Obtain a reference to the room the character occupies.
    ///
    /// # Errors
    /// - if the character's room is not found
    pub fn current_room(&self) -> Result<&Room> {
        self.rooms
            .get(&self.character.room)
            .ok_or_else(|| anyhow!("character's room ({}) not found in world", self.character.room))
    }

    /// Obtain a mutable reference to the room the character occupies.
    ///
    /// # Errors
    /// - if the character's room is not found
    pub fn current_room_mut(&mut self) -> Result<&mut Room> {
        let name = self.character.room.clone();
        self.rooms
            .get_mut(&name)
            .ok_or_else(|| anyhow!("character's room ({name}) not found in world"))
    }

    /// Attach a reaction to `action` on the named object. `action` may be any alias
    /// of a registered action; the callback is stored under its canonical name.
    ///
    /// # Errors
    /// - if the action was never registered
    /// - if no object has that name
    pub fn on_object(&mut self, object: &str, action: &str, reaction: Reaction) -> Result<&mut Self, ConfigError> {
        let action = self
            .actions
            .canonicalize(action)
            .ok_or_else(|| ConfigError::UnknownAction(action.to_string()))?
            .to_string();
        self.objects.on(object, &action, reaction)?;
        Ok(self)
    }

    /// True if the object is in the current room or in the inventory.
    pub fn within_reach(&self, object: &str) -> bool {
        self.character.holds(object) || self.current_room().is_ok_and(|room| room.contains(object))
    }
}

//! Character -- the player's presence in the world.

use log::info;

use crate::reaction::Reaction;

#[derive(Debug, Clone, Default)]
pub struct Character {
    /// Name of the room the character stands in.
    pub room: String,
    /// Held object names, oldest first. The same object may appear more than once.
    pub inventory: Vec<String>,
    /// Most objects the character can carry; `None` means unlimited.
    pub capacity: Option<usize>,
    enter_hooks: Vec<(String, Reaction)>,
    exit_hooks: Vec<(String, Reaction)>,
}

impl Character {
    pub fn new(room: &str) -> Self {
        Self {
            room: room.to_string(),
            ..Self::default()
        }
    }

    pub fn holds(&self, object: &str) -> bool {
        self.inventory.iter().any(|o| o == object)
    }

    pub fn add_item(&mut self, object: &str) {
        self.inventory.push(object.to_string());
    }

    /// Remove the first held copy of `object`. Returns false if none was held.
    pub fn remove_item(&mut self, object: &str) -> bool {
        if let Some(index) = self.inventory.iter().position(|o| o == object) {
            self.inventory.remove(index);
            true
        } else {
            false
        }
    }

    /// True if picking up one more object stays within capacity.
    pub fn has_room_for_one_more(&self) -> bool {
        self.capacity.is_none_or(|max| self.inventory.len() < max)
    }

    /// Fire `reaction` whenever the character enters `room`.
    pub fn on_enter(&mut self, room: &str, reaction: Reaction) -> &mut Self {
        info!("enter hook registered for '{room}'");
        self.enter_hooks.push((room.to_string(), reaction));
        self
    }

    /// Fire `reaction` whenever the character leaves `room`.
    pub fn on_exit(&mut self, room: &str, reaction: Reaction) -> &mut Self {
        info!("exit hook registered for '{room}'");
        self.exit_hooks.push((room.to_string(), reaction));
        self
    }

    /// The first enter hook registered for `room`.
    pub fn enter_hook(&self, room: &str) -> Option<&Reaction> {
        first_hook(&self.enter_hooks, room)
    }

    /// The first exit hook registered for `room`.
    pub fn exit_hook(&self, room: &str) -> Option<&Reaction> {
        first_hook(&self.exit_hooks, room)
    }
}

fn first_hook<'a>(hooks: &'a [(String, Reaction)], room: &str) -> Option<&'a Reaction> {
    hooks.iter().find(|(key, _)| key == room).map(|(_, reaction)| reaction)
}

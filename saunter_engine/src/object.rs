//! Objects module
//!
//! Things in the world the player can name: a key, a towel, a taco. Each object lists
//! the actions it supports and may carry custom reactions for some of them. Pairs of
//! objects may also carry a reaction for `use <source> on <target>`.

use std::collections::HashMap;

use log::info;

use crate::error::ConfigError;
use crate::lexicon::{Cursor, Lexicon};
use crate::reaction::Reaction;

/// A named object and its per-action behavior.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub name: String,
    pub description: String,
    /// Canonical action names this object supports.
    pub actions: Vec<String>,
    callbacks: HashMap<String, Reaction>,
}

impl GameObject {
    pub fn new<S: AsRef<str>>(name: &str, description: &str, actions: &[S]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            actions: actions.iter().map(|a| a.as_ref().to_string()).collect(),
            callbacks: HashMap::new(),
        }
    }

    /// True if the object lists `action` among its supported actions.
    pub fn permits(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    pub fn callback(&self, action: &str) -> Option<&Reaction> {
        self.callbacks.get(action)
    }

    /// Attach a reaction to `action`, which must be a canonical action name.
    /// [`World::on_object`](crate::world::World::on_object) accepts aliases.
    pub fn on(&mut self, action: &str, reaction: Reaction) {
        self.callbacks.insert(action.to_string(), reaction);
    }
}

/// Registry of every object in the world.
#[derive(Debug, Clone, Default)]
pub struct Objects {
    objects: HashMap<String, GameObject>,
    lexicon: Lexicon,
    pairs: HashMap<(String, String), Reaction>,
}

impl Objects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under its name and any extra aliases.
    ///
    /// # Errors
    /// - if an object with the same name is already registered
    pub fn register<S: AsRef<str>>(&mut self, object: GameObject, aliases: &[S]) -> Result<&mut Self, ConfigError> {
        if self.objects.contains_key(&object.name) {
            return Err(ConfigError::DuplicateObject(object.name));
        }
        self.lexicon.insert(&object.name, aliases);
        self.objects.insert(object.name.clone(), object);
        Ok(self)
    }

    /// Shorthand for registering an object with no extra aliases.
    ///
    /// # Errors
    /// - if an object with the same name is already registered
    pub fn object<S: AsRef<str>>(
        &mut self,
        name: &str,
        description: &str,
        actions: &[S],
    ) -> Result<&mut Self, ConfigError> {
        self.register(GameObject::new(name, description, actions), &[] as &[&str])
    }

    /// Look up an object by name. An absent object is not an error.
    pub fn get(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    /// Match an object name or alias at the cursor.
    pub fn eat<'t>(&self, cursor: Cursor<'t>) -> (Option<&str>, Cursor<'t>) {
        self.lexicon.eat(cursor)
    }

    /// Attach a reaction to `action` on the named object. `action` must be the
    /// canonical name; use [`World::on_object`](crate::world::World::on_object) to
    /// register by alias.
    ///
    /// # Errors
    /// - if no object has that name
    pub fn on(&mut self, object: &str, action: &str, reaction: Reaction) -> Result<&mut Self, ConfigError> {
        self.objects
            .get_mut(object)
            .ok_or_else(|| ConfigError::UnknownObject(object.to_string()))?
            .on(action, reaction);
        Ok(self)
    }

    /// Attach a reaction to `use <source> on <target>`, and to the reverse order too
    /// when `bidirectional` is set.
    ///
    /// # Errors
    /// - if either object is unknown
    pub fn on_use(
        &mut self,
        source: &str,
        target: &str,
        reaction: Reaction,
        bidirectional: bool,
    ) -> Result<&mut Self, ConfigError> {
        for name in [source, target] {
            if !self.contains(name) {
                return Err(ConfigError::UnknownObject(name.to_string()));
            }
        }
        if bidirectional {
            self.pairs
                .insert((target.to_string(), source.to_string()), reaction.clone());
        }
        self.pairs.insert((source.to_string(), target.to_string()), reaction);
        info!("use reaction registered for ({source}, {target}), bidirectional: {bidirectional}");
        Ok(self)
    }

    /// The reaction for the ordered pair (`source`, `target`), if any.
    pub fn pair(&self, source: &str, target: &str) -> Option<&Reaction> {
        self.pairs.get(&(source.to_string(), target.to_string()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

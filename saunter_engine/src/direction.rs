//! Direction vocabulary and the opposite-direction table used for two-way exits.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::lexicon::{Cursor, Lexicon};

#[derive(Debug, Clone, Default)]
pub struct Directions {
    lexicon: Lexicon,
    opposites: HashMap<String, String>,
}

impl Directions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction<S: AsRef<str>>(&mut self, name: &str, aliases: &[S]) -> &mut Self {
        self.lexicon.insert(name, aliases);
        self
    }

    /// Declare `a` and `b` opposite each other. Either may be given by alias.
    ///
    /// # Errors
    /// - if either direction is unknown
    pub fn opposite(&mut self, a: &str, b: &str) -> Result<&mut Self, ConfigError> {
        let a = self.canonical_or_err(a)?;
        let b = self.canonical_or_err(b)?;
        self.opposites.insert(a.clone(), b.clone());
        self.opposites.insert(b, a);
        Ok(self)
    }

    /// The opposite of a direction (given by name or alias).
    ///
    /// # Errors
    /// - if the direction is unknown or has no declared opposite
    pub fn get_opposite(&self, name: &str) -> Result<&str, ConfigError> {
        let name = self.canonical_or_err(name)?;
        self.opposites
            .get(&name)
            .map(String::as_str)
            .ok_or(ConfigError::MissingOpposite(name))
    }

    fn canonical_or_err(&self, name: &str) -> Result<String, ConfigError> {
        self.lexicon
            .canonicalize(name)
            .map(ToString::to_string)
            .ok_or_else(|| ConfigError::UnknownDirection(name.to_string()))
    }

    pub fn canonicalize(&self, alias: &str) -> Option<&str> {
        self.lexicon.canonicalize(alias)
    }

    pub fn eat<'t>(&self, cursor: Cursor<'t>) -> (Option<&str>, Cursor<'t>) {
        self.lexicon.eat(cursor)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

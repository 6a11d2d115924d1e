//! Action vocabulary.
//!
//! Verbs the player can type, the stop words ignored around them, and optional
//! reactions that run for an action no matter which objects were mentioned.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::lexicon::{Cursor, Lexicon};
use crate::reaction::Reaction;

#[derive(Debug, Clone)]
pub struct Actions {
    lexicon: Lexicon,
    stop_words: Vec<String>,
    reactions: HashMap<String, Reaction>,
}

impl Default for Actions {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::new(),
            stop_words: vec!["in".into(), "on".into(), "the".into()],
            reactions: HashMap::new(),
        }
    }
}

impl Actions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. The first name is the canonical one.
    pub fn action<S: AsRef<str>>(&mut self, name: &str, aliases: &[S]) -> &mut Self {
        self.lexicon.insert(name, aliases);
        self
    }

    /// Replace the stop word list.
    pub fn stop_words<S: AsRef<str>>(&mut self, words: &[S]) -> &mut Self {
        self.stop_words = words.iter().map(|w| w.as_ref().to_string()).collect();
        self
    }

    /// Attach a reaction that runs whenever `action` is used.
    ///
    /// # Errors
    /// - if `action` was never registered
    pub fn on(&mut self, action: &str, reaction: Reaction) -> Result<&mut Self, ConfigError> {
        let name = self
            .lexicon
            .canonicalize(action)
            .ok_or_else(|| ConfigError::UnknownAction(action.to_string()))?
            .to_string();
        self.reactions.insert(name, reaction);
        Ok(self)
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }

    /// Skip any run of stop words at the cursor.
    pub fn skip_stop_words<'t>(&self, cursor: Cursor<'t>) -> Cursor<'t> {
        cursor.skip_while(|t| self.is_stop_word(t))
    }

    /// Match an action at the cursor, ignoring stop words before it and consuming
    /// stop words after it. Leading stop words are consumed even when nothing matches.
    pub fn eat<'t>(&self, cursor: Cursor<'t>) -> (Option<&str>, Cursor<'t>) {
        let cursor = self.skip_stop_words(cursor);
        match self.lexicon.eat(cursor) {
            (Some(name), after) => (Some(name), self.skip_stop_words(after)),
            (None, cursor) => (None, cursor),
        }
    }

    pub fn canonicalize(&self, alias: &str) -> Option<&str> {
        self.lexicon.canonicalize(alias)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lexicon.contains(name)
    }

    /// The action-level reaction for a canonical action name.
    pub fn reaction(&self, name: &str) -> Option<&Reaction> {
        self.reactions.get(name)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

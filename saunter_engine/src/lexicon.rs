//! Lexicon module
//!
//! Greedy longest-alias-first matching of player input against a vocabulary. Actions,
//! objects and directions each keep a [`Lexicon`] and consume their words from the
//! front of the same token array, one after another.
//!
//! Input is never mutated. A [`Cursor`] marks how far into the tokens the previous
//! stages got, and each `eat` hands back an advanced cursor.

use std::cmp::Reverse;

/// Split a line of input into whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(ToString::to_string).collect()
}

/// A read position in an immutable slice of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'t> {
    tokens: &'t [String],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'t [String] {
        &self.tokens[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move past `n` tokens (clamped to the end of input).
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        Self {
            tokens: self.tokens,
            pos: (self.pos + n).min(self.tokens.len()),
        }
    }

    /// Move past every leading token for which `skip` returns true.
    #[must_use]
    pub fn skip_while(self, mut skip: impl FnMut(&str) -> bool) -> Self {
        let skipped = self.remaining().iter().take_while(|t| skip(t)).count();
        self.advance(skipped)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    canonical: String,
    /// The canonical name's own tokens come first.
    aliases: Vec<Vec<String>>,
}

/// Maps multi-word aliases back to canonical names.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<Entry>,
    /// (entry, alias) indices, longest alias first; ties keep registration order.
    order: Vec<(usize, usize)>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with any extra aliases. Registering an existing name adds the
    /// aliases to it.
    pub fn insert<S: AsRef<str>>(&mut self, name: &str, aliases: &[S]) {
        let index = if let Some(index) = self.entries.iter().position(|e| e.canonical == name) {
            index
        } else {
            self.entries.push(Entry {
                canonical: name.to_string(),
                aliases: vec![tokenize(name)],
            });
            self.entries.len() - 1
        };
        for alias in aliases {
            let tokens = tokenize(alias.as_ref());
            if !tokens.is_empty() && !self.entries[index].aliases.contains(&tokens) {
                self.entries[index].aliases.push(tokens);
            }
        }
        self.reorder();
    }

    fn reorder(&mut self) {
        let mut order: Vec<(usize, usize)> = self
            .entries
            .iter()
            .enumerate()
            .flat_map(|(e, entry)| (0..entry.aliases.len()).map(move |a| (e, a)))
            .filter(|&(e, a)| !self.entries[e].aliases[a].is_empty())
            .collect();
        // stable: equal lengths keep registration order
        order.sort_by_key(|&(e, a)| Reverse(self.entries[e].aliases[a].len()));
        self.order = order;
    }

    /// Match the longest alias that is a prefix of the remaining tokens.
    ///
    /// On a match, returns the canonical name and a cursor past the matched tokens.
    /// Otherwise returns `None` and the cursor unchanged.
    pub fn eat<'t>(&self, cursor: Cursor<'t>) -> (Option<&str>, Cursor<'t>) {
        let remaining = cursor.remaining();
        for &(e, a) in &self.order {
            let alias = &self.entries[e].aliases[a];
            if remaining.starts_with(alias) {
                return (Some(self.entries[e].canonical.as_str()), cursor.advance(alias.len()));
            }
        }
        (None, cursor)
    }

    /// Canonical name for a full alias, if any.
    pub fn canonicalize(&self, alias: &str) -> Option<&str> {
        let tokens = tokenize(alias);
        self.entries
            .iter()
            .find(|e| e.aliases.contains(&tokens))
            .map(|e| e.canonical.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.canonical == name)
    }

    /// Canonical names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.canonical.as_str())
    }

    /// Every alias (canonical names included) as a space-joined phrase.
    pub fn phrases(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().flat_map(|e| e.aliases.iter().map(|a| a.join(" ")))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

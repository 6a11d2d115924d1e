//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate narration
//! for the turn and display it all at the end.

pub mod view_item;

pub use view_item::*;

use colored::Colorize;
use log::{debug, info};
use textwrap::{fill, termwidth};

use crate::reaction::Outcome;
use crate::style::{GameStyle, indented_block, normal_block};

/// View aggregates narration produced during a turn and displays it on `flush`.
///
/// The view also owns the turn's silence flag: once silenced, anything else pushed
/// during the same turn is dropped.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
    silenced: bool,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            silenced: false,
        }
    }

    /// Reset per-turn state. Called at the start of every turn.
    pub fn begin_turn(&mut self) {
        self.silenced = false;
    }

    pub fn push(&mut self, item: ViewItem) {
        if self.silenced {
            debug!("silenced, dropping {item:?}");
        } else {
            self.items.push(item);
        }
    }

    /// Suppress narration for the rest of the turn.
    pub fn silence(&mut self) {
        info!("narration silenced for the rest of the turn");
        self.silenced = true;
    }

    pub fn is_silenced(&self) -> bool {
        self.silenced
    }

    /// Narrate a reaction outcome, then apply its silence flag.
    ///
    /// An outcome that failed without a message gets the generic failure line.
    pub fn push_outcome(&mut self, outcome: &Outcome) {
        if !outcome.message.is_empty() {
            self.push(ViewItem::Reaction(outcome.message.clone()));
        } else if !outcome.succeeded {
            self.push(ViewItem::Reaction(GENERIC_FAILURE.to_string()));
        }
        if outcome.silence {
            self.silence();
        }
    }

    /// Plain, unstyled text of everything pending, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().flat_map(ViewItem::lines).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Style and display all pending narration, then clear it for the next turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in &self.items {
            println!("{}", self.render(item));
        }
        self.items.clear();
    }

    fn render(&self, item: &ViewItem) -> String {
        let plain = item.lines().join("\n");
        match item {
            ViewItem::RoomName(_) => plain.room_titlebar_style().to_string(),
            ViewItem::RoomDescription(description) => {
                format!("{}\n", fill(description, indented_block()).description_style())
            },
            ViewItem::Exit { .. } => plain.exit_style().to_string(),
            ViewItem::RoomContents(_) | ViewItem::Inventory(_) => fill(&plain, normal_block()).object_style().to_string(),
            ViewItem::ObjectDescription { .. } => fill(&plain, normal_block()).description_style().to_string(),
            ViewItem::Reaction(_) => fill(&plain, normal_block()).reaction_style().to_string(),
            ViewItem::ActionSuccess(_) => fill(&plain, normal_block()).success_style().to_string(),
            ViewItem::EngineMessage(_) => plain.dimmed().to_string(),
            ViewItem::ActionFailure(_) | ViewItem::Unrecognized => fill(&plain, normal_block()).denied_style().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_drops_later_items_until_next_turn() {
        let mut view = View::new();
        view.push_outcome(&Outcome {
            succeeded: true,
            message: "The lights go out.".into(),
            silence: true,
        });
        view.push(ViewItem::ActionSuccess("You pick up the lamp.".into()));
        assert_eq!(view.lines(), vec!["The lights go out.".to_string()]);

        view.begin_turn();
        view.push(ViewItem::Unrecognized);
        assert_eq!(view.lines().last().map(String::as_str), Some(UNRECOGNIZED));
    }

    #[test]
    fn silent_failure_gets_generic_narration() {
        let mut view = View::new();
        view.push_outcome(&Outcome::failure(""));
        view.push_outcome(&Outcome::success(""));
        assert_eq!(view.lines(), vec![GENERIC_FAILURE.to_string()]);
    }
}

use serde::{Deserialize, Serialize};

/// Names are the identities of rooms, objects, actions and directions.
pub type Name = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub directions: Vec<VocabDef>,
    #[serde(default)]
    pub opposites: Vec<(Name, Name)>,
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ActionDef>,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub pairs: Vec<PairDef>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    pub character: CharacterDef,
}

/// Stop words used when no list is given in the world file.
pub fn default_stop_words() -> Vec<String> {
    ["in", "on", "the"].iter().map(ToString::to_string).collect()
}

/// Game-level metadata shown when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
}

/// A canonical name plus any number of (possibly multi-word) aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabDef {
    pub name: Name,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// An action the player can type, optionally with a reaction that runs whenever it is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    pub name: Name,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub reaction: Option<ReactionDef>,
}

/// An object that may sit in a room or in the character's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: Name,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub description: String,
    /// Action names the object supports.
    #[serde(default)]
    pub actions: Vec<Name>,
    #[serde(default)]
    pub callbacks: Vec<CallbackDef>,
}

/// Custom behavior for one action on one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackDef {
    pub action: Name,
    pub reaction: ReactionDef,
}

/// Reaction fired by `use <source> on <target>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairDef {
    pub source: Name,
    pub target: Name,
    /// Also register the reaction for `use <target> on <source>`.
    #[serde(default)]
    pub bidirectional: bool,
    pub reaction: ReactionDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub name: Name,
    pub description: String,
    #[serde(default)]
    pub objects: Vec<Name>,
}

/// A directed connection between two rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDef {
    pub from: Name,
    pub direction: Name,
    pub to: Name,
    /// Also connect `to` back to `from` through the opposite direction.
    #[serde(default = "default_true")]
    pub bidirectional: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CharacterDef {
    pub start_room: Name,
    #[serde(default)]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub inventory: Vec<Name>,
    #[serde(default)]
    pub on_enter: Vec<HookDef>,
    #[serde(default)]
    pub on_exit: Vec<HookDef>,
}

/// Reaction keyed by a room name, fired when the character enters or leaves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookDef {
    pub room: Name,
    pub reaction: ReactionDef,
}

/// Serialized reaction tree. Predicates and side effects are referenced by name
/// and resolved by the engine when the world is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReactionDef {
    Succeed {
        #[serde(default)]
        message: String,
        #[serde(default)]
        silence: bool,
    },
    Fail {
        #[serde(default)]
        message: String,
        #[serde(default)]
        silence: bool,
    },
    Info {
        #[serde(default)]
        message: String,
        #[serde(default)]
        silence: bool,
    },
    Cond {
        predicate: PredicateDef,
        then: Box<ReactionDef>,
        otherwise: Box<ReactionDef>,
    },
    Progn(Vec<ReactionDef>),
    Effect(EffectDef),
}

/// A named predicate such as `inventory_has("key")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateDef {
    pub name: String,
    pub arg: String,
}

/// A named side effect such as `add_to_inventory("taco")`. Omitting the argument
/// lets the engine pick the object that triggered the reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

//! Side effects that reactions perform on the world.
//!
//! Every effect that names an object may leave it out, in which case the object the
//! reaction was fired for is used (see [`Scope`]). This lets one reaction serve both
//! orders of a two-way `use` pair.
//!
//! All effects log their execution in a consistent format:
//! ```text
//! └─ effect: EffectName(object)
//! ```

use anyhow::Result;
use log::{info, warn};
use saunter_data::EffectDef;

use crate::error::ConfigError;
use crate::reaction::{Reaction, Scope};
use crate::world::World;

/// Changes to world state a reaction can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Put an object in the character's inventory, ignoring capacity.
    AddToInventory(Option<String>),
    /// Take one copy of an object out of the character's inventory.
    RemoveFromInventory(Option<String>),
    /// Remove an object from the inventory and from the current room.
    Destroy(Option<String>),
}

impl SideEffect {
    /// Perform the effect.
    ///
    /// # Errors
    /// - if the character's current room cannot be found
    pub fn apply(&self, world: &mut World, scope: &Scope) -> Result<()> {
        let Some(object) = self.object(scope) else {
            warn!("└─ effect: {self:?} has no object to act on; skipped");
            return Ok(());
        };
        match self {
            Self::AddToInventory(_) => add_to_inventory_effect(world, &object),
            Self::RemoveFromInventory(_) => remove_from_inventory_effect(world, &object),
            Self::Destroy(_) => destroy_effect(world, &object)?,
        }
        Ok(())
    }

    /// The named object, or the scope's subject when none was named.
    fn object(&self, scope: &Scope) -> Option<String> {
        let (Self::AddToInventory(named) | Self::RemoveFromInventory(named) | Self::Destroy(named)) = self;
        named.clone().or_else(|| scope.subject.clone())
    }
}

fn add_to_inventory_effect(world: &mut World, object: &str) {
    world.character.add_item(object);
    info!("└─ effect: AddToInventory({object})");
}

fn remove_from_inventory_effect(world: &mut World, object: &str) {
    if world.character.remove_item(object) {
        info!("└─ effect: RemoveFromInventory({object})");
    } else {
        warn!("└─ effect: RemoveFromInventory({object}) -- not in inventory");
    }
}

fn destroy_effect(world: &mut World, object: &str) -> Result<()> {
    let from_inventory = world.character.remove_item(object);
    let from_room = world.current_room_mut()?.remove_object(object);
    info!("└─ effect: Destroy({object}) [inventory: {from_inventory}, room: {from_room}]");
    Ok(())
}

pub fn add_to_inventory(object: Option<&str>) -> Reaction {
    effect(SideEffect::AddToInventory(object.map(ToString::to_string)))
}

pub fn remove_from_inventory(object: Option<&str>) -> Reaction {
    effect(SideEffect::RemoveFromInventory(object.map(ToString::to_string)))
}

pub fn destroy(object: Option<&str>) -> Reaction {
    effect(SideEffect::Destroy(object.map(ToString::to_string)))
}

fn effect(side_effect: SideEffect) -> Reaction {
    Reaction::Effect(side_effect)
}

impl TryFrom<&EffectDef> for SideEffect {
    type Error = ConfigError;

    fn try_from(def: &EffectDef) -> Result<Self, Self::Error> {
        let constructor: fn(Option<String>) -> SideEffect = match def.name.as_str() {
            "add_to_inventory" => SideEffect::AddToInventory,
            "remove_from_inventory" => SideEffect::RemoveFromInventory,
            "destroy" => SideEffect::Destroy,
            other => return Err(ConfigError::UnknownSideEffect(other.to_string())),
        };
        match def.args.as_slice() {
            [] => Ok(constructor(None)),
            [object] => Ok(constructor(Some(object.clone()))),
            args => Err(ConfigError::TooManyArguments {
                name: def.name.clone(),
                max: 1,
                got: args.len(),
            }),
        }
    }
}

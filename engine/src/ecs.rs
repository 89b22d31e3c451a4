//! Component types for game characters.
//!
//! Capabilities like flight and lootability are components attached
//! per variant and checked by presence, not a type hierarchy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
pub struct Name(pub String);

/// Category tag used for kind-based character lookup.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    #[default]
    Player,
    Goblin,
    Kobold,
    Drake,
}

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize,
)]
pub struct Level(pub i32);

/// Hit points. Zero current health means the character is dead; dead
/// characters stay in their room's occupant set.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize,
)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Health {
        Health { current: max, max }
    }
}

/// Cosmetic movement flavor, the character moves by flying.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize,
)]
pub struct Flying(pub bool);

/// Treasure carried by a lootable character. Empty means not lootable.
#[derive(
    Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize,
)]
pub struct Loot(pub String);

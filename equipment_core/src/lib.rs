//! equipment_core - Weapon and armor data for hero duels
//!
//! This library provides:
//! - Weapon: damage range plus per-hit stamina cost
//! - Armor: flat defence plus per-turn stamina upkeep
//! - EquipmentCatalog: name-indexed lookup over fixed collections
//!
//! Equipment values are immutable once a catalog accepts them. Combatants
//! reference catalog entries; they never own or mutate them.

mod catalog;
mod types;

pub use catalog::EquipmentCatalog;
pub use types::{round1, Armor, Weapon};

use thiserror::Error;

/// Kind of equipment involved in a catalog operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentKind {
    Weapon,
    Armor,
}

impl std::fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquipmentKind::Weapon => write!(f, "weapon"),
            EquipmentKind::Armor => write!(f, "armor"),
        }
    }
}

/// Error from catalog construction or lookup
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No entry with the requested name. Lookups fail only with this variant.
    #[error("no {kind} named '{name}' in catalog")]
    NotFound { kind: EquipmentKind, name: String },
    /// An entry violated its invariants at catalog construction.
    #[error("invalid {kind} '{name}': {message}")]
    Invalid {
        kind: EquipmentKind,
        name: String,
        message: String,
    },
}

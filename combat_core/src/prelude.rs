//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::class::{CharacterClass, Skill};
pub use crate::combatant::Combatant;
pub use crate::tactics::Tactics;

// Config
pub use crate::config::{constants, init_constants, init_constants_default};

// Re-exports from equipment_core
pub use equipment_core::{round1, Armor, CatalogError, EquipmentCatalog, Weapon};

//! combat_core - Combat resolution for one-on-one hero duels
//!
//! This library provides:
//! - CharacterClass: immutable stat template with a one-shot skill
//! - Combatant: mutable per-match state over class and equipment references
//! - Combat resolution: hit, take_hit, use_skill, regenerate_stamina
//! - Tactics: manual vs autonomous attack control
//!
//! The core computes damage; it never applies it. An external orchestrator
//! drives each round: call `hit` on the attacker, feed any returned damage
//! into the target's `take_hit`, call `regenerate_stamina` on both sides,
//! then check `is_alive`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use combat_core::prelude::*;
//!
//! init_constants_default().unwrap();
//!
//! let catalog = EquipmentCatalog::new(weapons, armors)?;
//! let sword = catalog.find_weapon("shortsword")?;
//! let mail = catalog.find_armor("chainmail")?;
//!
//! let mut player = Combatant::new("player", &knight, sword, mail, Tactics::Manual);
//! let mut enemy = Combatant::new("goblin", &brute, sword, mail, Tactics::Autonomous);
//!
//! let mut rng = rand::thread_rng();
//! if let Some(damage) = player.hit(&enemy, &mut rng) {
//!     enemy.take_hit(damage);
//! }
//! player.regenerate_stamina();
//! enemy.regenerate_stamina();
//! ```

pub mod class;
pub mod combatant;
pub mod config;
pub mod prelude;
pub mod tactics;

// Core API - what most users need
pub use class::{CharacterClass, Skill};
pub use combatant::Combatant;
pub use tactics::Tactics;

// Configuration
pub use config::{constants, init_constants, init_constants_default, ConfigError};

// Re-export commonly needed equipment_core types
pub use equipment_core::{Armor, CatalogError, EquipmentCatalog, Weapon};

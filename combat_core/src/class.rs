//! Character class stat blocks
//!
//! A class is an immutable stat template shared by possibly many combatants.
//! The combat core only reads these values; construction and storage belong
//! to external collaborators.

use serde::{Deserialize, Serialize};

/// A one-time-per-match bonus damage action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Stamina threshold required to fire the skill
    pub stamina_cost: f64,
    /// Fixed damage value the skill produces
    pub damage: f64,
}

/// Immutable stat template: multipliers, maxima and the class skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub max_health: f64,
    pub max_stamina: f64,
    pub attack_multiplier: f64,
    pub armor_multiplier: f64,
    pub stamina_multiplier: f64,
    pub skill: Skill,
}

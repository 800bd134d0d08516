//! Weapon and armor value types

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Round to one decimal place.
///
/// Every externally observable combat value (damage rolls, health, stamina)
/// is reported at this precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A weapon: uniform damage range and a stamina cost per swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    pub min_damage: f64,
    pub max_damage: f64,
    pub stamina_per_hit: f64,
}

impl Weapon {
    /// Roll this weapon's damage: uniform in `[min_damage, max_damage]`,
    /// rounded to one decimal. Each call draws independently.
    pub fn roll_damage(&self, rng: &mut impl Rng) -> f64 {
        let rolled = if self.min_damage >= self.max_damage {
            self.max_damage
        } else {
            rng.gen_range(self.min_damage..=self.max_damage)
        };
        round1(rolled)
    }
}

/// Armor: flat defence value and a stamina upkeep cost per turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub id: u32,
    pub name: String,
    pub defence: f64,
    pub stamina_per_turn: f64,
}

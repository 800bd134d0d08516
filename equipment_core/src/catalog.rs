//! Name-indexed catalog over fixed weapon and armor collections

use crate::types::{Armor, Weapon};
use crate::{CatalogError, EquipmentKind};

/// Read-only catalog of weapons and armors, queried by exact name
#[derive(Debug, Default, Clone)]
pub struct EquipmentCatalog {
    weapons: Vec<Weapon>,
    armors: Vec<Armor>,
}

impl EquipmentCatalog {
    /// Build a catalog from pre-constructed collections, validating every
    /// entry's invariants. Entry order is preserved.
    pub fn new(weapons: Vec<Weapon>, armors: Vec<Armor>) -> Result<Self, CatalogError> {
        for weapon in &weapons {
            validate_weapon(weapon)?;
        }
        for armor in &armors {
            validate_armor(armor)?;
        }
        Ok(EquipmentCatalog { weapons, armors })
    }

    /// Find a weapon by exact name.
    ///
    /// Linear scan; fails with `CatalogError::NotFound` when no entry
    /// matches. Never returns a partial or default match.
    pub fn find_weapon(&self, name: &str) -> Result<&Weapon, CatalogError> {
        self.weapons
            .iter()
            .find(|w| w.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                kind: EquipmentKind::Weapon,
                name: name.to_string(),
            })
    }

    /// Find an armor by exact name. Same contract as `find_weapon`.
    pub fn find_armor(&self, name: &str) -> Result<&Armor, CatalogError> {
        self.armors
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                kind: EquipmentKind::Armor,
                name: name.to_string(),
            })
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Armor] {
        &self.armors
    }
}

fn validate_weapon(weapon: &Weapon) -> Result<(), CatalogError> {
    let fail = |message: &str| CatalogError::Invalid {
        kind: EquipmentKind::Weapon,
        name: weapon.name.clone(),
        message: message.to_string(),
    };
    if weapon.min_damage < 0.0 {
        return Err(fail("min_damage must be non-negative"));
    }
    if weapon.min_damage > weapon.max_damage {
        return Err(fail("min_damage must not exceed max_damage"));
    }
    if weapon.stamina_per_hit < 0.0 {
        return Err(fail("stamina_per_hit must be non-negative"));
    }
    Ok(())
}

fn validate_armor(armor: &Armor) -> Result<(), CatalogError> {
    let fail = |message: &str| CatalogError::Invalid {
        kind: EquipmentKind::Armor,
        name: armor.name.clone(),
        message: message.to_string(),
    };
    if armor.defence < 0.0 {
        return Err(fail("defence must be non-negative"));
    }
    if armor.stamina_per_turn < 0.0 {
        return Err(fail("stamina_per_turn must be non-negative"));
    }
    Ok(())
}

//! Tunable combat constants
//!
//! Stored in a process-wide `OnceLock`, optionally loaded from a TOML file.
//! Defaults reproduce the reference duel rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Global combat constants instance
static COMBAT_CONSTANTS: OnceLock<CombatConstants> = OnceLock::new();

/// Error loading combat constants
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading constants: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error in constants file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Initialize the global combat constants from a TOML file
///
/// Must be called once at startup before any combat resolution.
/// Returns an error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = CombatConstants::load_from_path(path)?;
    COMBAT_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("CombatConstants already initialized".to_string()))
}

/// Initialize the global combat constants with default values
///
/// Useful for tests or when no config file is available.
pub fn init_constants_default() -> Result<(), ConfigError> {
    COMBAT_CONSTANTS
        .set(CombatConstants::default())
        .map_err(|_| ConfigError::ValidationError("CombatConstants already initialized".to_string()))
}

/// Get a reference to the global combat constants
///
/// Panics if constants have not been initialized via `init_constants()` or
/// `init_constants_default()`.
pub fn constants() -> &'static CombatConstants {
    COMBAT_CONSTANTS
        .get()
        .expect("CombatConstants not initialized - call init_constants() or init_constants_default() first")
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
pub fn ensure_constants_initialized() {
    COMBAT_CONSTANTS.get_or_init(CombatConstants::default);
}

/// Tunable combat constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub stamina: StaminaConstants,
    #[serde(default)]
    pub tactics: TacticsConstants,
}

impl CombatConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let constants: CombatConstants = toml::from_str(&content)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tactics.skill_trigger_chance > 100 {
            return Err(ConfigError::ValidationError(
                "tactics.skill_trigger_chance must be at most 100".to_string(),
            ));
        }
        if self.stamina.base_regen_per_round < 0.0 {
            return Err(ConfigError::ValidationError(
                "stamina.base_regen_per_round must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaminaConstants {
    /// Stamina regained per round before the class multiplier applies
    #[serde(default = "default_base_regen")]
    pub base_regen_per_round: f64,
}

impl Default for StaminaConstants {
    fn default() -> Self {
        StaminaConstants {
            base_regen_per_round: 0.4,
        }
    }
}

fn default_base_regen() -> f64 {
    0.4
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticsConstants {
    /// Percent chance (0-100) that an autonomous combatant attempts its
    /// skill before attacking
    #[serde(default = "default_skill_chance")]
    pub skill_trigger_chance: u32,
}

impl Default for TacticsConstants {
    fn default() -> Self {
        TacticsConstants {
            skill_trigger_chance: 10,
        }
    }
}

fn default_skill_chance() -> u32 {
    10
}

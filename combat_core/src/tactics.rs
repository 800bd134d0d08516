//! Combatant control variants

use serde::{Deserialize, Serialize};

/// How a combatant's attacks are driven
///
/// `Manual` leaves every decision (including skill timing) to the external
/// caller. `Autonomous` rolls a 0-99 integer before each attack; when the
/// roll lands under the configured trigger chance and the skill is both
/// affordable and unused, the combatant fires its skill on its own. The
/// skill's damage value is discarded in that path - autonomous skill use
/// burns the once-per-match charge without dealing its damage to anyone,
/// matching the reference rules. The normal attack always follows,
/// whether or not the skill fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tactics {
    Manual,
    Autonomous,
}

//! Combatant state and combat resolution
//!
//! A combatant binds one equipment loadout and one character class to the
//! mutable per-match state: current health, current stamina and the
//! once-per-match skill flag. All externally observable values are rounded
//! to one decimal; mutators round the current value before applying a
//! change so repeated operations stay at display precision.
//!
//! `hit` only computes damage - applying it to the target's health is the
//! caller's job via `take_hit`, so an orchestrator can log or modify the
//! value before it lands.

use crate::class::CharacterClass;
use crate::config::constants;
use crate::tactics::Tactics;
use equipment_core::{round1, Armor, Weapon};
use rand::Rng;

/// One participant in a duel
#[derive(Debug, Clone)]
pub struct Combatant<'a> {
    name: String,
    class: &'a CharacterClass,
    weapon: &'a Weapon,
    armor: &'a Armor,
    current_health: f64,
    current_stamina: f64,
    skill_used: bool,
    tactics: Tactics,
}

impl<'a> Combatant<'a> {
    /// Create a combatant at full health and stamina with its skill unused
    pub fn new(
        name: impl Into<String>,
        class: &'a CharacterClass,
        weapon: &'a Weapon,
        armor: &'a Armor,
        tactics: Tactics,
    ) -> Self {
        Combatant {
            name: name.into(),
            class,
            weapon,
            armor,
            current_health: class.max_health,
            current_stamina: class.max_stamina,
            skill_used: false,
            tactics,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health, rounded to one decimal
    pub fn health(&self) -> f64 {
        round1(self.current_health)
    }

    /// Current stamina, rounded to one decimal
    pub fn stamina(&self) -> f64 {
        round1(self.current_stamina)
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    pub fn is_alive(&self) -> bool {
        self.health() > 0.0
    }

    /// Damage mitigation this combatant currently provides
    ///
    /// Armor only protects while its upkeep is affordable: if stamina does
    /// not cover `armor.stamina_per_turn`, the armor grants nothing. This
    /// is a query - it never spends stamina.
    pub fn effective_armor(&self) -> f64 {
        if self.stamina() - self.armor.stamina_per_turn >= 0.0 {
            self.armor.defence * self.class.armor_multiplier
        } else {
            0.0
        }
    }

    /// Attack the target, returning the damage dealt
    ///
    /// `None` means the attacker could not afford the weapon's stamina cost;
    /// nothing changes in that case. `Some(0.0)` means the attack connected
    /// but the target's armor absorbed all of it - the weapon cost is still
    /// paid. The target is never mutated here; apply the returned damage
    /// with [`take_hit`](Self::take_hit).
    ///
    /// An `Autonomous` combatant first rolls for its skill (see
    /// [`Tactics`]); a `Manual` combatant attacks on command only.
    pub fn hit(&mut self, target: &Combatant<'_>, rng: &mut impl Rng) -> Option<f64> {
        if self.tactics == Tactics::Autonomous {
            let chance = constants().tactics.skill_trigger_chance;
            if rng.gen_range(0..100u32) < chance
                && self.stamina() >= self.class.skill.stamina_cost
                && !self.skill_used
            {
                // Skill damage is discarded on the autonomous path; only
                // the once-per-match charge is consumed.
                let _ = self.use_skill();
            }
        }
        self.attack(target, rng)
    }

    fn attack(&mut self, target: &Combatant<'_>, rng: &mut impl Rng) -> Option<f64> {
        let roll = self.weapon.roll_damage(rng);
        if self.stamina() - self.weapon.stamina_per_hit < 0.0 {
            return None;
        }
        let raw_damage = roll * self.class.attack_multiplier;
        let total_damage = raw_damage - target.effective_armor();
        // Cost is paid whenever the attack goes through, even when armor
        // absorbs all of it.
        self.current_stamina = self.stamina() - self.weapon.stamina_per_hit;
        if total_damage < 0.0 {
            return Some(0.0);
        }
        Some(round1(total_damage))
    }

    /// Apply incoming damage, flooring health at zero
    pub fn take_hit(&mut self, damage: f64) {
        let health = self.health() - damage;
        self.current_health = if health < 0.0 { 0.0 } else { health };
    }

    /// Fire the class skill, at most once per match
    ///
    /// Succeeds only while stamina meets the skill's threshold and the
    /// skill is unused; returns the skill's fixed damage. The threshold is
    /// checked but the cost is never deducted - the skill is gated by the
    /// once-per-match flag instead. This matches the reference rules and
    /// is deliberate; deducting would change game balance.
    pub fn use_skill(&mut self) -> Option<f64> {
        if self.skill_used || self.stamina() < self.class.skill.stamina_cost {
            return None;
        }
        self.skill_used = true;
        Some(round1(self.class.skill.damage))
    }

    /// Regain the per-round stamina amount, capped at the class maximum
    pub fn regenerate_stamina(&mut self) {
        let delta = constants().stamina.base_regen_per_round * self.class.stamina_multiplier;
        let stamina = self.stamina() + delta;
        self.current_stamina = if stamina > self.class.max_stamina {
            self.class.max_stamina
        } else {
            stamina
        };
    }
}

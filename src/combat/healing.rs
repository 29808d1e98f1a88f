//! Healing resolution: flat or percent-of-max, with an overheal clamp

use serde::{Deserialize, Serialize};

/// Modifiers applied to one healing effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealingModifiers {
    pub heal_mult: f64,
    pub max_hp: f64,
    pub current_hp: f64,
    /// When set, base healing is a percentage of `max_hp`.
    pub is_percent: bool,
}

impl Default for HealingModifiers {
    fn default() -> Self {
        Self {
            heal_mult: 1.0,
            max_hp: 100.0,
            current_hp: 0.0,
            is_percent: false,
        }
    }
}

/// Hit points restored, rounded to nearest. Overheal is never permitted:
/// the result is clamped to the missing HP, so a full-health target heals
/// 0. `current_hp > max_hp` is unvalidated input and also clamps to 0.
pub fn calculate_healing(base_healing: f64, mods: &HealingModifiers) -> u32 {
    let raw = if mods.is_percent {
        base_healing / 100.0 * mods.max_hp
    } else {
        base_healing
    };
    let scaled = raw * mods.heal_mult;
    let missing = (mods.max_hp - mods.current_hp).max(0.0);
    scaled.min(missing).round().max(0.0) as u32
}

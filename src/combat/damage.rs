//! Damage resolution: an ordered multiplicative pipeline
//!
//! Stage order matters: the combo bonus scales the boosted base, a crit
//! scales the combo result, and the two reductions come last. Rounding
//! happens once, at the end.

use serde::{Deserialize, Serialize};

use crate::core::config::{
    COMBO_CAP, COMBO_STEP, DEFAULT_BLOCK_REDUCTION, DEFAULT_CRIT_MULTIPLIER, MAX_DAMAGE_REDUCTION,
};

/// Modifiers applied to one damage roll. Every field has a neutral default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DamageModifiers {
    pub damage_mult: f64,
    /// Consecutive-hit count; each hit adds 5%, capped at the 10-hit combo.
    pub combo_bonus: f64,
    pub critical_hit: bool,
    pub crit_multiplier: f64,
    pub blocking: bool,
    pub block_reduction: f64,
    /// Equipment reduction, capped at 75% regardless of input.
    pub damage_reduction: f64,
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self {
            damage_mult: 1.0,
            combo_bonus: 0.0,
            critical_hit: false,
            crit_multiplier: DEFAULT_CRIT_MULTIPLIER,
            blocking: false,
            block_reduction: DEFAULT_BLOCK_REDUCTION,
            damage_reduction: 0.0,
        }
    }
}

/// Final damage dealt, rounded to nearest and never negative.
pub fn calculate_damage(base_damage: f64, mods: &DamageModifiers) -> u32 {
    let mut damage = base_damage * mods.damage_mult;

    let combo = (mods.combo_bonus * COMBO_STEP).min(COMBO_CAP);
    damage *= 1.0 + combo;

    if mods.critical_hit {
        damage *= mods.crit_multiplier;
    }
    if mods.blocking {
        damage *= 1.0 - mods.block_reduction;
    }
    damage *= 1.0 - mods.damage_reduction.min(MAX_DAMAGE_REDUCTION);

    damage.round().max(0.0) as u32
}

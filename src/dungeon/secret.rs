//! Hidden passages and the probabilistic checks that reveal them

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{
    ITEM_BASE_CHANCE, ITEM_HINT_STEP, PASSIVE_CHANCE, SECRET_SENSE_BONUS, STRONG_HINT_LEVEL,
    TAP_BASE_CHANCE, TAP_HINT_STEP, TAP_STRONG_HINT_CHANCE,
};
use crate::core::types::{Direction, Inventory, ITEM_SECRET_SENSE};
use crate::dungeon::cell::{Cell, CellFeature};

/// A concealed passage in one wall of a cell.
///
/// Passages are never destroyed; discovery flips `revealed` in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretPassage {
    pub direction: Direction,
    /// 0-3+; higher means the passage is easier to find
    pub hint_level: u8,
    pub revealed: bool,
}

/// How the agent is probing for the passage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryMethod {
    /// Deliberately tapping the wall
    Tap,
    /// Using a detection item
    Item,
    /// Walking past; only strongly-hinted passages reveal themselves
    Passive,
}

/// Outcome of one discovery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// Passage found; `revealed` has been flipped on the cell.
    Found,
    /// Tap missed, but the passage is close enough to surface a clue.
    Hint { hint_level: u8 },
    Nothing,
}

/// Probability of revealing a passage with the given method and hints.
pub fn discovery_chance(method: DiscoveryMethod, hint_level: u8, inventory: &Inventory) -> f64 {
    let base = match method {
        DiscoveryMethod::Tap if hint_level >= STRONG_HINT_LEVEL => TAP_STRONG_HINT_CHANCE,
        DiscoveryMethod::Tap => TAP_BASE_CHANCE + f64::from(hint_level) * TAP_HINT_STEP,
        DiscoveryMethod::Item => ITEM_BASE_CHANCE + f64::from(hint_level) * ITEM_HINT_STEP,
        DiscoveryMethod::Passive if hint_level >= STRONG_HINT_LEVEL => PASSIVE_CHANCE,
        DiscoveryMethod::Passive => 0.0,
    };
    let has_sense = inventory.get(ITEM_SECRET_SENSE).copied().unwrap_or(0) > 0;
    let chance = if has_sense { base + SECRET_SENSE_BONUS } else { base };
    chance.min(1.0)
}

/// Probe `direction` of `cell` for a hidden passage.
///
/// Fails closed: no passage, wrong direction, or already revealed all
/// yield `Nothing` without drawing randomness.
pub fn attempt_discovery(
    cell: &mut Cell,
    direction: Direction,
    method: DiscoveryMethod,
    inventory: &Inventory,
    rng: &mut ChaCha8Rng,
) -> DiscoveryOutcome {
    let CellFeature::Secret(passage) = &mut cell.feature else {
        return DiscoveryOutcome::Nothing;
    };
    if passage.revealed || passage.direction != direction {
        return DiscoveryOutcome::Nothing;
    }

    let chance = discovery_chance(method, passage.hint_level, inventory);
    if rng.gen::<f64>() < chance {
        passage.revealed = true;
        tracing::debug!("Secret passage revealed ({:?})", direction);
        return DiscoveryOutcome::Found;
    }

    if method == DiscoveryMethod::Tap && passage.hint_level > 0 {
        return DiscoveryOutcome::Hint {
            hint_level: passage.hint_level,
        };
    }
    DiscoveryOutcome::Nothing
}

//! Engine constants - all tunable values in one place
//!
//! These values are shared between subsystems and with the host profile
//! authors; changing them changes gameplay balance, not correctness.

// Visibility constants
/// Sight bonus for carrying a lit lantern (cells)
pub const LANTERN_SIGHT_BONUS: u32 = 2;
/// Sight bonus for carrying a torch (cells); stacks with the lantern
pub const TORCH_SIGHT_BONUS: u32 = 1;
/// An agent can always see its own cell and immediate surroundings
pub const MIN_SIGHT_RADIUS: u32 = 1;

// Pathfinding constants
/// Default `max_steps` for A* searches
pub const DEFAULT_PATH_STEPS: usize = 50;
/// The closed set may grow to `max_steps * SEARCH_BUDGET_FACTOR` before
/// the search gives up. Bounds work, not path length.
pub const SEARCH_BUDGET_FACTOR: usize = 4;

// Combat constants
/// Damage bonus per consecutive hit in a combo
pub const COMBO_STEP: f64 = 0.05;
/// Combo bonus cap - the 10-hit equivalent; further hits add nothing
pub const COMBO_CAP: f64 = 0.5;
pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_BLOCK_REDUCTION: f64 = 0.5;
/// Equipment can never absorb more than 75% of incoming damage
pub const MAX_DAMAGE_REDUCTION: f64 = 0.75;

// Secret discovery constants
/// Base chance of finding a passage by tapping the wall
pub const TAP_BASE_CHANCE: f64 = 0.15;
/// Extra tap chance per hint level
pub const TAP_HINT_STEP: f64 = 0.25;
/// Tap chance once the hint level reaches STRONG_HINT_LEVEL
pub const TAP_STRONG_HINT_CHANCE: f64 = 0.95;
/// Base chance when using a detection item
pub const ITEM_BASE_CHANCE: f64 = 0.9;
/// Extra item chance per hint level
pub const ITEM_HINT_STEP: f64 = 0.025;
/// Passive discovery only fires at strong hint levels
pub const PASSIVE_CHANCE: f64 = 0.7;
/// Hint level at which a passage is all but found
pub const STRONG_HINT_LEVEL: u8 = 3;
/// Flat bonus for holding a secret-sense charm
pub const SECRET_SENSE_BONUS: f64 = 0.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_constants_reasonable() {
        assert!(COMBO_STEP > 0.0 && COMBO_STEP < COMBO_CAP);
        assert!(MAX_DAMAGE_REDUCTION < 1.0);
        assert!(DEFAULT_CRIT_MULTIPLIER > 1.0);
        assert!(DEFAULT_BLOCK_REDUCTION > 0.0 && DEFAULT_BLOCK_REDUCTION < 1.0);
    }

    #[test]
    fn test_discovery_chances_are_probabilities() {
        assert!(TAP_BASE_CHANCE > 0.0 && TAP_BASE_CHANCE < 1.0);
        assert!(TAP_STRONG_HINT_CHANCE < 1.0);
        assert!(ITEM_BASE_CHANCE + SECRET_SENSE_BONUS > 1.0); // clamped at draw time
        assert!(PASSIVE_CHANCE < 1.0);
    }

    #[test]
    fn test_search_budget_positive() {
        assert!(DEFAULT_PATH_STEPS * SEARCH_BUDGET_FACTOR > 0);
    }
}

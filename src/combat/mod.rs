pub mod damage;
pub mod healing;

pub use damage::{calculate_damage, DamageModifiers};
pub use healing::{calculate_healing, HealingModifiers};

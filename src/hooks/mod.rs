pub mod engine;
pub mod macros;

pub use engine::{fire_hook, substitute_params, HookError, HookParams};
pub use macros::{expand_macros, roll_dice};

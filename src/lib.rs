//! Dungeon Delve - deterministic dungeon-crawl engine core
//!
//! Everything here is synchronous and caller-driven: the host extension
//! owns rendering, input, and command dispatch; this crate owns maze
//! generation, navigation, combat math, objectives, and the hook
//! macro pipeline. Randomness is always an explicit `ChaCha8Rng`
//! parameter, so whole games replay from a seed.

pub mod combat;
pub mod core;
pub mod dungeon;
pub mod hooks;
pub mod nav;
pub mod objectives;

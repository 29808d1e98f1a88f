pub mod config;
pub mod error;
pub mod profile;
pub mod types;

pub use error::{DelveError, Result};
pub use profile::{ObjectiveSpec, Profile};
pub use types::{Direction, Inventory, Position};

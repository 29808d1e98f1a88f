pub mod cell;
pub mod generator;
pub mod grid;
pub mod secret;

pub use cell::{cell_type, Cell, CellFeature, CellType, Walls};
pub use generator::generate;
pub use grid::Grid;
pub use secret::{attempt_discovery, DiscoveryMethod, DiscoveryOutcome, SecretPassage};

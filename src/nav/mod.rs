pub mod pathfinder;
pub mod visibility;

pub use pathfinder::{find_path, find_path_default, valid_moves};
pub use visibility::{has_line_of_sight, Visibility};

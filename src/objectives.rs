//! Objective progress tracking
//!
//! The map built here is created once at game start and is the sole
//! source of truth for progress afterwards; gameplay advances it, never
//! rebuilds it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::profile::Profile;

/// Progress against one objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveProgress {
    pub current: u32,
    pub target: u32,
    pub completed: bool,
}

impl ObjectiveProgress {
    pub fn new(target: u32) -> Self {
        Self {
            current: 0,
            target: target.max(1),
            completed: false,
        }
    }

    /// Advance progress by `n`, saturating at the target.
    pub fn advance(&mut self, n: u32) {
        self.current = self.current.saturating_add(n).min(self.target);
        if self.current >= self.target {
            self.completed = true;
        }
    }
}

/// Build the progress map for a profile's objectives. A missing or zero
/// `count` means a single-step objective.
pub fn init_objectives(profile: &Profile) -> AHashMap<String, ObjectiveProgress> {
    profile
        .objectives
        .iter()
        .map(|spec| {
            let target = spec.count.filter(|&c| c > 0).unwrap_or(1);
            (spec.id.clone(), ObjectiveProgress::new(target))
        })
        .collect()
}

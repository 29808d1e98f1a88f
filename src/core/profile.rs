//! Host-provided profile: hook command templates plus the objective list
//!
//! Profiles are authored outside the engine (the host extension persists
//! them); the engine only reads them.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One objective as declared by the profile author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSpec {
    pub id: String,
    /// Objective category ("kill", "collect", "reach", ...); opaque here
    #[serde(rename = "type")]
    pub kind: String,
    /// Required count; absent or zero means 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// External configuration for one game: event hooks and objectives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Hook name -> command template. A missing entry means "no side
    /// effect for this event".
    #[serde(default)]
    pub hooks: AHashMap<String, String>,
    #[serde(default)]
    pub objectives: Vec<ObjectiveSpec>,
}

impl Profile {
    /// Parse a profile from the JSON form the host persists.
    pub fn from_json(json: &str) -> crate::core::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Template registered for an event. Blank templates count as absent.
    pub fn hook_template(&self, event: &str) -> Option<&str> {
        self.hooks
            .get(event)
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
    }
}

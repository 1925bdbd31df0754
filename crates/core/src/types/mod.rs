//! Shared type definitions and newtypes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one box granted to one user.
///
/// Distinct from the box *definition* id: two grants of the same box
/// carry different `UserBoxId`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserBoxId(pub String);

impl UserBoxId {
    pub fn new(id: impl Into<String>) -> Self {
        UserBoxId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserBoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key identifying one reward action for client-side correlation.
///
/// The server does not issue a correlation token; the key is whichever
/// identifying field the action variant carries (bonus id, box id, or
/// the loyalty-point amount rendered as a string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionKey(pub String);

impl ActionKey {
    pub fn new(key: impl Into<String>) -> Self {
        ActionKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

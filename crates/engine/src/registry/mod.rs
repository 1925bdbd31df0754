//! Client-local memory of already-resolved box ids
//!
//! The server is the source of truth for box state; this registry only
//! keeps a box from being re-offered while a resolution is in flight
//! or has just completed on this page load.

use ambet_core::UserBoxId;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Append-only set of resolved box ids, shared by every widget
/// instance that filters the same listing. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRegistry {
    inner: Arc<RwLock<HashSet<UserBoxId>>>,
}

impl ResolvedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a box as resolved. Idempotent.
    pub fn mark_resolved(&self, id: &UserBoxId) {
        if let Ok(mut resolved) = self.inner.write() {
            resolved.insert(id.clone());
        }
    }

    pub fn is_resolved(&self, id: &UserBoxId) -> bool {
        self.inner
            .read()
            .map(|resolved| resolved.contains(id))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|resolved| resolved.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

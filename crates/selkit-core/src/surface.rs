//! Ownership registry for the interactive surfaces of a select.
//!
//! A select is drawn as several host elements (container, text input,
//! option list, option rows). Focus moving between them must not close the
//! list, so the engine keeps a registry of the handles it owns and checks
//! focus-loss targets against it.
//!
//! # Invariants
//!
//! - Each [`SurfaceId`] maps to at most one [`SurfaceRole`].
//! - Unknown ids are never owned.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static SURFACE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque handle of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// A fresh process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(SURFACE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a host-side identifier.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SurfaceId {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

/// What part of the select a surface is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// The outer element; clicks on it toggle the list.
    Container,
    /// The text box receiving keystrokes.
    Input,
    /// The option list or anything inside it.
    List,
}

/// The set of surfaces a select owns.
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<SurfaceId, SurfaceRole>,
}

impl SurfaceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id` under `role`, replacing any previous role.
    pub fn register(&mut self, id: SurfaceId, role: SurfaceRole) {
        self.surfaces.insert(id, role);
    }

    /// Release `id`. Returns its former role.
    pub fn unregister(&mut self, id: SurfaceId) -> Option<SurfaceRole> {
        self.surfaces.remove(&id)
    }

    #[must_use]
    pub fn owns(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    #[must_use]
    pub fn role_of(&self, id: SurfaceId) -> Option<SurfaceRole> {
        self.surfaces.get(&id).copied()
    }

    /// Whether any surface holds `role`.
    #[must_use]
    pub fn has_role(&self, role: SurfaceRole) -> bool {
        self.surfaces.values().any(|r| *r == role)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

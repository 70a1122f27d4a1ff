//! Role Catalogue — injectable, swappable source of role profiles.
//!
//! Carried in `AppState` as `Arc<dyn RoleCatalogue>` so the engine can be
//! tested against fixture catalogues independent of production data.

use crate::matching::roles::default_roles;
use crate::models::role::RoleProfile;

/// Read-only access to the role catalogue. Declaration order is meaningful:
/// it is the tie-break order for equal match scores.
pub trait RoleCatalogue: Send + Sync {
    fn all(&self) -> &[RoleProfile];

    fn by_id(&self, id: &str) -> Option<&RoleProfile> {
        self.all().iter().find(|r| r.id == id)
    }
}

/// In-memory catalogue backed by a fixed role list.
pub struct StaticRoleCatalogue {
    roles: Vec<RoleProfile>,
}

impl StaticRoleCatalogue {
    pub fn new(roles: Vec<RoleProfile>) -> Self {
        Self { roles }
    }

    /// The production catalogue embedded in the binary.
    pub fn with_defaults() -> Self {
        Self::new(default_roles())
    }
}

impl RoleCatalogue for StaticRoleCatalogue {
    fn all(&self) -> &[RoleProfile] {
        &self.roles
    }
}

use std::collections::BTreeSet;
use std::sync::Arc;

use cmdsuite_core::{AppError, AppResult};
use cmdsuite_domain::{Permission, ResourceScope, Role, RolePermissionTable, User};

/// Decides whether a user may perform an action or open a view.
///
/// Decisions are pure lookups against the injected role table. Missing
/// identity always denies; a scope dimension the user is not restricted on
/// never denies.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    table: Arc<RolePermissionTable>,
}

impl PermissionResolver {
    /// Creates a resolver over a shared role table.
    #[must_use]
    pub fn new(table: Arc<RolePermissionTable>) -> Self {
        Self { table }
    }

    /// Returns the shared role table.
    #[must_use]
    pub fn table(&self) -> &Arc<RolePermissionTable> {
        &self.table
    }

    /// Returns the fixed permission set of a role.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.table.permissions_for(role)
    }

    /// Returns whether the user holds the permission for the requested scope.
    #[must_use]
    pub fn has_permission(
        &self,
        user: Option<&User>,
        permission: Permission,
        scope: Option<&ResourceScope>,
    ) -> bool {
        matches!(
            self.evaluate(user, permission, scope),
            PermissionDecision::Allowed
        )
    }

    /// Ensures the user holds the permission for the requested scope.
    pub fn require_permission(
        &self,
        user: Option<&User>,
        permission: Permission,
        scope: Option<&ResourceScope>,
    ) -> AppResult<()> {
        match self.evaluate(user, permission, scope) {
            PermissionDecision::Allowed => Ok(()),
            PermissionDecision::MissingIdentity => Err(AppError::Unauthorized(
                "an authenticated user with a role is required".to_owned(),
            )),
            PermissionDecision::MissingPermission => Err(AppError::Forbidden(format!(
                "user '{}' is missing permission '{}'",
                user.map(User::id).unwrap_or_default(),
                permission.as_str()
            ))),
            PermissionDecision::OutOfScope => Err(AppError::Forbidden(format!(
                "user '{}' may not use permission '{}' outside the assigned scope",
                user.map(User::id).unwrap_or_default(),
                permission.as_str()
            ))),
        }
    }

    fn evaluate(
        &self,
        user: Option<&User>,
        permission: Permission,
        scope: Option<&ResourceScope>,
    ) -> PermissionDecision {
        let Some((user, role)) = user.and_then(|user| user.role().map(|role| (user, role))) else {
            return PermissionDecision::MissingIdentity;
        };

        if !self.table.grants(role, permission) {
            return PermissionDecision::MissingPermission;
        }

        if let Some(scope) = scope {
            let within_scope =
                dimension_allows(scope.region_id.as_deref(), user.assigned_region_id())
                    && dimension_allows(scope.squadron_id.as_deref(), user.assigned_squadron_id())
                    && dimension_allows(scope.cadet_id.as_deref(), user.linked_cadet_id());
            if !within_scope {
                return PermissionDecision::OutOfScope;
            }
        }

        PermissionDecision::Allowed
    }
}

/// A dimension only narrows when both the request and the user carry a value.
fn dimension_allows(requested: Option<&str>, assigned: Option<&str>) -> bool {
    match (requested, assigned) {
        (Some(requested), Some(assigned)) => requested == assigned,
        _ => true,
    }
}

enum PermissionDecision {
    Allowed,
    MissingIdentity,
    MissingPermission,
    OutOfScope,
}

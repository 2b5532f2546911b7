//! Dashboard user and permission hydration.

use std::collections::BTreeSet;

use cmdsuite_core::UserIdentity;
use serde::{Deserialize, Serialize};

use crate::{AccessLevel, Permission, Role, RolePermissionTable};

/// An authenticated dashboard user.
///
/// `permissions` is a cache of the role table taken at hydration time. It is
/// never deserialized and can only be written by [`User::hydrated`], so a
/// user's cached grants always come from a table lookup of its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    identity: UserIdentity,
    role: Option<Role>,
    access_level: AccessLevel,
    assigned_region_id: Option<String>,
    assigned_squadron_id: Option<String>,
    linked_cadet_id: Option<String>,
    #[serde(skip_deserializing)]
    permissions: Option<BTreeSet<Permission>>,
}

impl User {
    /// Creates an unhydrated user without scope attributes.
    ///
    /// `role` is `None` when the login role could not be mapped.
    #[must_use]
    pub fn new(identity: UserIdentity, role: Option<Role>, access_level: AccessLevel) -> Self {
        Self {
            identity,
            role,
            access_level,
            assigned_region_id: None,
            assigned_squadron_id: None,
            linked_cadet_id: None,
            permissions: None,
        }
    }

    /// Restricts the user to a region.
    #[must_use]
    pub fn with_assigned_region(mut self, region_id: impl Into<String>) -> Self {
        self.assigned_region_id = Some(region_id.into());
        self
    }

    /// Restricts the user to a squadron.
    #[must_use]
    pub fn with_assigned_squadron(mut self, squadron_id: impl Into<String>) -> Self {
        self.assigned_squadron_id = Some(squadron_id.into());
        self
    }

    /// Links the user to the cadet whose data they own.
    #[must_use]
    pub fn with_linked_cadet(mut self, cadet_id: impl Into<String>) -> Self {
        self.linked_cadet_id = Some(cadet_id.into());
        self
    }

    /// Returns a copy of this user whose permissions are the role's grants.
    ///
    /// Users without a role, or whose role has no table entry, get an empty
    /// set. Hydrating an already hydrated user recomputes the same set.
    #[must_use]
    pub fn hydrated(&self, table: &RolePermissionTable) -> Self {
        let permissions = self
            .role
            .map(|role| table.permissions_for(role).clone())
            .unwrap_or_default();

        Self {
            permissions: Some(permissions),
            ..self.clone()
        }
    }

    /// Returns the user's identity.
    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.identity.subject()
    }

    /// Returns the assigned role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the clearance level.
    #[must_use]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Returns the assigned region, if the user is region-restricted.
    #[must_use]
    pub fn assigned_region_id(&self) -> Option<&str> {
        self.assigned_region_id.as_deref()
    }

    /// Returns the assigned squadron, if the user is squadron-restricted.
    #[must_use]
    pub fn assigned_squadron_id(&self) -> Option<&str> {
        self.assigned_squadron_id.as_deref()
    }

    /// Returns the linked cadet, if the user is restricted to one cadet.
    #[must_use]
    pub fn linked_cadet_id(&self) -> Option<&str> {
        self.linked_cadet_id.as_deref()
    }

    /// Returns the cached permissions, `None` before hydration.
    #[must_use]
    pub fn permissions(&self) -> Option<&BTreeSet<Permission>> {
        self.permissions.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use cmdsuite_core::UserIdentity;

    use super::User;
    use crate::{AccessLevel, Permission, Role, RolePermissionTable};

    fn user(role: Option<Role>) -> Option<User> {
        UserIdentity::new("u-007", "squadron", "Maj. C. Davis")
            .ok()
            .map(|identity| User::new(identity, role, AccessLevel::L3))
    }

    #[test]
    fn new_user_is_not_hydrated() {
        let user = user(Some(Role::SquadronCommander));
        assert!(user.is_some_and(|user| user.permissions().is_none()));
    }

    #[test]
    fn hydration_copies_role_grants() {
        let table = RolePermissionTable::standard();
        let Some(user) = user(Some(Role::SquadronCommander)) else {
            panic!("identity should be valid");
        };

        let hydrated = user.hydrated(&table);
        assert_eq!(
            hydrated.permissions(),
            Some(table.permissions_for(Role::SquadronCommander))
        );
        assert!(user.permissions().is_none());
    }

    #[test]
    fn hydration_without_role_is_empty() {
        let table = RolePermissionTable::standard();
        let hydrated = user(None).map(|user| user.hydrated(&table));
        assert!(hydrated.is_some_and(|user| user.permissions().is_some_and(|set| set.is_empty())));
    }

    #[test]
    fn empty_scope_attribute_is_still_set() {
        let user = user(Some(Role::SquadronCommander)).map(|user| user.with_assigned_squadron(""));
        assert!(user.is_some_and(|user| user.assigned_squadron_id() == Some("")));
    }

    #[test]
    fn deserialized_user_drops_permissions() {
        let json = r#"{
            "identity": {"subject": "u-010", "username": "parent", "display_name": "Mrs. Ender"},
            "role": "parent_guardian",
            "access_level": "L1",
            "assigned_region_id": null,
            "assigned_squadron_id": null,
            "linked_cadet_id": "u-009",
            "permissions": ["write:financial_disbursement"]
        }"#;
        let user: Result<User, _> = serde_json::from_str(json);
        assert!(user.is_ok());
        let Ok(user) = user else { return };
        assert_eq!(user.role(), Some(Role::ParentGuardian));
        assert_eq!(user.linked_cadet_id(), Some("u-009"));
        assert!(user.permissions().is_none());
        let hydrated = user.hydrated(&RolePermissionTable::standard());
        assert!(
            hydrated
                .permissions()
                .is_some_and(|set| !set.contains(&Permission::ExecuteFinancialDisbursement))
        );
    }
}

use std::sync::Arc;

use cmdsuite_domain::{RolePermissionTable, User};

/// Derives the cached permission set of a freshly authenticated user.
#[derive(Debug, Clone)]
pub struct PermissionHydrator {
    table: Arc<RolePermissionTable>,
}

impl PermissionHydrator {
    /// Creates a hydrator over a shared role table.
    #[must_use]
    pub fn new(table: Arc<RolePermissionTable>) -> Self {
        Self { table }
    }

    /// Returns a copy of the user carrying its role's permissions.
    ///
    /// A user without a role, or with a role the table does not know, ends up
    /// with an empty permission set.
    #[must_use]
    pub fn hydrate_user_permissions(&self, user: &User) -> User {
        user.hydrated(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use cmdsuite_core::UserIdentity;
    use cmdsuite_domain::{AccessLevel, Permission, Role, RolePermissionTable, User};

    use super::PermissionHydrator;

    fn user(role: Option<Role>) -> Option<User> {
        UserIdentity::new("u-009", "cadet", "Cdt. E. Ender")
            .ok()
            .map(|identity| User::new(identity, role, AccessLevel::L1))
    }

    #[test]
    fn hydrated_permissions_equal_table_for_every_role() {
        let table = Arc::new(RolePermissionTable::standard());
        let hydrator = PermissionHydrator::new(table.clone());

        for role in Role::all() {
            let hydrated = user(Some(*role)).map(|user| hydrator.hydrate_user_permissions(&user));
            assert_eq!(
                hydrated.as_ref().and_then(User::permissions),
                Some(table.permissions_for(*role)),
                "{role}"
            );
        }
    }

    #[test]
    fn unrecognized_role_hydrates_to_empty_set() {
        let hydrator = PermissionHydrator::new(Arc::new(RolePermissionTable::standard()));
        let hydrated = user(None).map(|user| hydrator.hydrate_user_permissions(&user));
        assert_eq!(
            hydrated.as_ref().and_then(User::permissions),
            Some(&BTreeSet::new())
        );
    }

    #[test]
    fn role_missing_from_table_hydrates_to_empty_set() {
        let table = RolePermissionTable::new([(
            Role::CadetMember,
            vec![Permission::ViewCadetDashboard],
        )]);
        let hydrator = PermissionHydrator::new(Arc::new(table));
        let hydrated = user(Some(Role::ParentGuardian))
            .map(|user| hydrator.hydrate_user_permissions(&user));
        assert!(
            hydrated
                .as_ref()
                .and_then(User::permissions)
                .is_some_and(BTreeSet::is_empty)
        );
    }

    #[test]
    fn hydration_is_idempotent() {
        let hydrator = PermissionHydrator::new(Arc::new(RolePermissionTable::standard()));
        let Some(user) = user(Some(Role::CfoTreasurer)) else {
            panic!("identity should be valid");
        };

        let once = hydrator.hydrate_user_permissions(&user);
        let twice = hydrator.hydrate_user_permissions(&once);
        assert_eq!(once.permissions(), twice.permissions());
        assert_eq!(once, twice);
    }

    #[test]
    fn input_user_is_left_untouched() {
        let hydrator = PermissionHydrator::new(Arc::new(RolePermissionTable::standard()));
        let Some(user) = user(Some(Role::CadetMember)) else {
            panic!("identity should be valid");
        };

        let _hydrated = hydrator.hydrate_user_permissions(&user);
        assert!(user.permissions().is_none());
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use cmdsuite_application::UserProfileDirectory;
use cmdsuite_core::AppResult;
use cmdsuite_domain::User;
use tokio::sync::RwLock;

/// In-memory user profile directory keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserProfileDirectory {
    profiles: RwLock<HashMap<String, User>>,
}

impl InMemoryUserProfileDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a profile under its username, replacing any previous one.
    pub async fn insert(&self, profile: User) {
        let username = profile.identity().username().to_owned();
        self.profiles.write().await.insert(username, profile);
    }

    /// Lists registered profiles ordered by username.
    pub async fn list(&self) -> Vec<User> {
        let profiles = self.profiles.read().await;
        let mut values: Vec<User> = profiles.values().cloned().collect();
        values.sort_by(|left, right| {
            left.identity()
                .username()
                .cmp(right.identity().username())
        });
        values
    }
}

#[async_trait]
impl UserProfileDirectory for InMemoryUserProfileDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.profiles.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cmdsuite_application::{AuthenticatedLogin, SessionService, UserProfileDirectory};
    use cmdsuite_core::UserIdentity;
    use cmdsuite_domain::{AccessLevel, DashboardView, Role, RolePermissionTable, User};

    use super::InMemoryUserProfileDirectory;

    fn profile(subject: &str, username: &str, role: Role) -> Option<User> {
        UserIdentity::new(subject, username, username)
            .ok()
            .map(|identity| User::new(identity, Some(role), AccessLevel::L1))
    }

    #[tokio::test]
    async fn insert_then_find_by_username() {
        let directory = InMemoryUserProfileDirectory::new();
        if let Some(cadet) = profile("u-009", "cadet", Role::CadetMember) {
            directory.insert(cadet.with_linked_cadet("u-009")).await;
        }

        let found = directory.find_by_username("cadet").await.ok().flatten();
        assert_eq!(found.as_ref().and_then(User::linked_cadet_id), Some("u-009"));
        assert!(
            directory
                .find_by_username("Cadet")
                .await
                .ok()
                .flatten()
                .is_none()
        );
    }

    #[tokio::test]
    async fn insert_replaces_existing_profile_and_list_is_sorted() {
        let directory = InMemoryUserProfileDirectory::new();
        for (subject, username, role) in [
            ("u-010", "parent", Role::ParentGuardian),
            ("u-001", "board", Role::BoardOfDirectors),
            ("u-099", "parent", Role::CadetMember),
        ] {
            if let Some(user) = profile(subject, username, role) {
                directory.insert(user).await;
            }
        }

        let usernames: Vec<String> = directory
            .list()
            .await
            .iter()
            .map(|user| user.identity().username().to_owned())
            .collect();
        assert_eq!(usernames, vec!["board".to_owned(), "parent".to_owned()]);

        let parent = directory.find_by_username("parent").await.ok().flatten();
        assert_eq!(parent.map(|user| user.id().to_owned()), Some("u-099".to_owned()));
    }

    #[tokio::test]
    async fn session_service_reads_scope_from_directory() {
        let directory = Arc::new(InMemoryUserProfileDirectory::new());
        if let Some(regional) = profile("u-006", "regional", Role::RegionalCommander) {
            directory.insert(regional.with_assigned_region("REG-NE")).await;
        }
        let service = SessionService::new(directory, Arc::new(RolePermissionTable::standard()));

        let session = service
            .establish_session(AuthenticatedLogin {
                username: "regional".to_owned(),
                ..AuthenticatedLogin::default()
            })
            .await
            .ok();

        assert_eq!(
            session.as_ref().map(|session| session.landing_view),
            Some(DashboardView::Regional)
        );
        assert_eq!(
            session
                .as_ref()
                .and_then(|session| session.user.assigned_region_id()),
            Some("REG-NE")
        );
    }
}

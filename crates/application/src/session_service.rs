//! Session establishment after a successful login.
//!
//! The login call itself happens upstream. This service turns its parsed
//! response into a hydrated [`User`] and picks the dashboard to open.

use std::sync::Arc;

use async_trait::async_trait;
use cmdsuite_core::{AppResult, NonEmptyString, UserIdentity};
use cmdsuite_domain::{AccessLevel, DashboardView, Role, RolePermissionTable, User};
use tracing::{info, warn};

use crate::{PermissionHydrator, PermissionResolver, RoleMapper, ViewGate};

/// Directory port for known user profiles.
///
/// Profiles carry the scope attributes a login response does not.
#[async_trait]
pub trait UserProfileDirectory: Send + Sync {
    /// Finds the unhydrated profile registered for a username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Parsed login response from the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticatedLogin {
    /// Login name the user authenticated with.
    pub username: String,
    /// Identifier assigned by the identity provider.
    pub user_id: Option<String>,
    /// Preferred role field of the response.
    pub user_role: Option<String>,
    /// Legacy role field, used when `user_role` is absent.
    pub role: Option<String>,
}

/// Authenticated session handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Hydrated user.
    pub user: User,
    /// View opened right after login.
    pub landing_view: DashboardView,
    /// Views listed in navigation.
    pub accessible_views: Vec<DashboardView>,
}

/// Application service turning login responses into sessions.
#[derive(Clone)]
pub struct SessionService {
    directory: Arc<dyn UserProfileDirectory>,
    hydrator: PermissionHydrator,
    view_gate: ViewGate,
    role_mapper: RoleMapper,
    unmapped_role_fallback: Option<Role>,
}

impl SessionService {
    /// Creates a session service over a profile directory and role table.
    #[must_use]
    pub fn new(directory: Arc<dyn UserProfileDirectory>, table: Arc<RolePermissionTable>) -> Self {
        Self {
            directory,
            hydrator: PermissionHydrator::new(table.clone()),
            view_gate: ViewGate::new(PermissionResolver::new(table)),
            role_mapper: RoleMapper::standard(),
            unmapped_role_fallback: None,
        }
    }

    /// Replaces the role alias table.
    #[must_use]
    pub fn with_role_mapper(mut self, role_mapper: RoleMapper) -> Self {
        self.role_mapper = role_mapper;
        self
    }

    /// Sets the role assigned when a login role cannot be mapped.
    ///
    /// Without a fallback such users get no role and therefore no access.
    #[must_use]
    pub fn with_unmapped_role_fallback(mut self, role: Option<Role>) -> Self {
        self.unmapped_role_fallback = role;
        self
    }

    /// Builds the session for a successful login.
    pub async fn establish_session(&self, login: AuthenticatedLogin) -> AppResult<Session> {
        let username = NonEmptyString::new(login.username.trim())?;

        let user = match self.directory.find_by_username(username.as_str()).await? {
            Some(profile) => profile,
            None => self.user_from_login(&login, &username)?,
        };

        let user = self.hydrator.hydrate_user_permissions(&user);
        let landing_view = self.view_gate.landing_view(Some(&user));
        let accessible_views = self.view_gate.accessible_views(Some(&user));

        info!(
            user_id = %user.id(),
            username = %username,
            role = user.role().map(|role| role.as_str()).unwrap_or("none"),
            landing_view = landing_view.as_str(),
            accessible_view_count = accessible_views.len(),
            "session established"
        );

        Ok(Session {
            user,
            landing_view,
            accessible_views,
        })
    }

    fn user_from_login(
        &self,
        login: &AuthenticatedLogin,
        username: &NonEmptyString,
    ) -> AppResult<User> {
        let role = self.resolve_role(login);
        let user_id = login
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("u-{username}"));
        let identity = UserIdentity::new(user_id, username.as_str(), username.as_str())?;

        Ok(User::new(identity, role, AccessLevel::default_for_role(role)))
    }

    fn resolve_role(&self, login: &AuthenticatedLogin) -> Option<Role> {
        let raw_role = [login.user_role.as_deref(), login.role.as_deref()]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty());

        let Some(raw_role) = raw_role else {
            warn!(
                username = %login.username,
                fallback = self.fallback_name(),
                "login response carried no role"
            );
            return self.unmapped_role_fallback;
        };

        self.role_mapper.resolve(raw_role).or_else(|| {
            warn!(
                username = %login.username,
                raw_role,
                fallback = self.fallback_name(),
                "login role did not match any known role"
            );
            self.unmapped_role_fallback
        })
    }

    fn fallback_name(&self) -> &'static str {
        self.unmapped_role_fallback
            .map(|role| role.as_str())
            .unwrap_or("none")
    }
}

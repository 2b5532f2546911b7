use std::str::FromStr;

use cmdsuite_core::{AppResult, UserIdentity};
use cmdsuite_domain::{AccessLevel, DashboardView, ResourceScope, Role, RolePermissionTable, User};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// User sent by the dashboard alongside an authorization question.
///
/// Cached permissions are never accepted from callers; decisions always use
/// the server-side role table.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-request.ts"
)]
pub struct UserRequest {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub access_level: Option<String>,
    #[serde(default)]
    pub assigned_region_id: Option<String>,
    #[serde(default)]
    pub assigned_squadron_id: Option<String>,
    #[serde(default)]
    pub linked_cadet_id: Option<String>,
}

impl UserRequest {
    /// Converts the payload into a domain user.
    ///
    /// An unknown role leaves the user without a role, which denies every
    /// permission instead of failing the request.
    pub fn into_user(self) -> AppResult<User> {
        let identity = UserIdentity::new(self.id, self.username, self.name)?;

        let role = self
            .role
            .as_deref()
            .and_then(|value| match Role::from_str(value) {
                Ok(role) => Some(role),
                Err(_) => {
                    warn!(user_id = %identity.subject(), role = value, "ignoring unknown role");
                    None
                }
            });
        let access_level = self
            .access_level
            .as_deref()
            .map(AccessLevel::from_str)
            .transpose()?
            .unwrap_or_default();

        let mut user = User::new(identity, role, access_level);
        if let Some(region_id) = self.assigned_region_id {
            user = user.with_assigned_region(region_id);
        }
        if let Some(squadron_id) = self.assigned_squadron_id {
            user = user.with_assigned_squadron(squadron_id);
        }
        if let Some(cadet_id) = self.linked_cadet_id {
            user = user.with_linked_cadet(cadet_id);
        }

        Ok(user)
    }
}

/// Resource scope of an authorization question.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/resource-scope-request.ts"
)]
pub struct ResourceScopeRequest {
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub squadron_id: Option<String>,
    #[serde(default)]
    pub cadet_id: Option<String>,
}

impl From<ResourceScopeRequest> for ResourceScope {
    fn from(value: ResourceScopeRequest) -> Self {
        Self {
            region_id: value.region_id,
            squadron_id: value.squadron_id,
            cadet_id: value.cadet_id,
        }
    }
}

/// API representation of a hydrated user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Option<String>,
    pub role_display_name: Option<String>,
    pub access_level: String,
    pub assigned_region_id: Option<String>,
    pub assigned_squadron_id: Option<String>,
    pub linked_cadet_id: Option<String>,
    pub permissions: Vec<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_owned(),
            username: user.identity().username().to_owned(),
            name: user.identity().display_name().to_owned(),
            role: user.role().map(|role| role.as_str().to_owned()),
            role_display_name: user.role().map(|role| role.display_name().to_owned()),
            access_level: user.access_level().as_str().to_owned(),
            assigned_region_id: user.assigned_region_id().map(ToOwned::to_owned),
            assigned_squadron_id: user.assigned_squadron_id().map(ToOwned::to_owned),
            linked_cadet_id: user.linked_cadet_id().map(ToOwned::to_owned),
            permissions: user
                .permissions()
                .map(|permissions| {
                    permissions
                        .iter()
                        .map(|permission| permission.as_str().to_owned())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Navigation entry for one dashboard view.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/navigation-item-response.ts"
)]
pub struct NavigationItemResponse {
    pub view: String,
    pub label: String,
    pub required_permission: String,
}

impl From<DashboardView> for NavigationItemResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            view: view.as_str().to_owned(),
            label: view.label().to_owned(),
            required_permission: view.required_permission().as_str().to_owned(),
        }
    }
}

/// API representation of a role and its grants.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role: String,
    pub display_name: String,
    pub default_view: String,
    pub permissions: Vec<String>,
}

impl RoleResponse {
    /// Builds the response for one role from the active table.
    #[must_use]
    pub fn from_table(role: Role, table: &RolePermissionTable) -> Self {
        Self {
            role: role.as_str().to_owned(),
            display_name: role.display_name().to_owned(),
            default_view: DashboardView::default_for_role(role).as_str().to_owned(),
            permissions: table
                .permissions_for(role)
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
        }
    }
}

use cmdsuite_application::{AuthenticatedLogin, Session};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{NavigationItemResponse, UserResponse};

/// Login response forwarded by the dashboard after authenticating.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-request.ts"
)]
pub struct SessionRequest {
    pub username: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<SessionRequest> for AuthenticatedLogin {
    fn from(value: SessionRequest) -> Self {
        Self {
            username: value.username,
            user_id: value.user_id,
            user_role: value.user_role,
            role: value.role,
        }
    }
}

/// Established session returned to the dashboard.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-response.ts"
)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub landing_view: String,
    pub navigation: Vec<NavigationItemResponse>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user: UserResponse::from(&session.user),
            landing_view: session.landing_view.as_str().to_owned(),
            navigation: session
                .accessible_views
                .into_iter()
                .map(NavigationItemResponse::from)
                .collect(),
        }
    }
}

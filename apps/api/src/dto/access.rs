use cmdsuite_application::ViewDecision;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ResourceScopeRequest, UserRequest};

/// Incoming payload for a permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-request.ts"
)]
pub struct AccessCheckRequest {
    #[serde(default)]
    pub user: Option<UserRequest>,
    pub permission: String,
    #[serde(default)]
    pub scope: Option<ResourceScopeRequest>,
}

/// Outcome of a permission check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-response.ts"
)]
pub struct AccessCheckResponse {
    pub permission: String,
    pub allowed: bool,
}

/// Incoming payload for a dashboard view gate.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/view-authorization-request.ts"
)]
pub struct ViewAuthorizationRequest {
    #[serde(default)]
    pub user: Option<UserRequest>,
    pub view: String,
}

/// Dashboard gate outcome. `decision` is either `render` or `access_denied`.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/view-authorization-response.ts"
)]
pub struct ViewAuthorizationResponse {
    pub decision: String,
    pub view: String,
    pub required_permission: String,
    pub access_denied: Option<AccessDeniedResponse>,
}

/// Content of the access denied state.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-denied-response.ts"
)]
pub struct AccessDeniedResponse {
    pub title: String,
    pub reason: String,
    pub error_code: String,
    pub role: Option<String>,
}

impl From<ViewDecision> for ViewAuthorizationResponse {
    fn from(decision: ViewDecision) -> Self {
        match decision {
            ViewDecision::Render(view) => Self {
                decision: "render".to_owned(),
                view: view.as_str().to_owned(),
                required_permission: view.required_permission().as_str().to_owned(),
                access_denied: None,
            },
            ViewDecision::AccessDenied(denied) => Self {
                decision: "access_denied".to_owned(),
                view: denied.view.as_str().to_owned(),
                required_permission: denied.required_permission.as_str().to_owned(),
                access_denied: Some(AccessDeniedResponse {
                    title: cmdsuite_application::AccessDenied::TITLE.to_owned(),
                    reason: cmdsuite_application::AccessDenied::REASON.to_owned(),
                    error_code: cmdsuite_application::AccessDenied::ERROR_CODE.to_owned(),
                    role: denied.role.map(|role| role.display_name().to_owned()),
                }),
            },
        }
    }
}

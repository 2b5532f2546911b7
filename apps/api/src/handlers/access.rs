use axum::Json;
use axum::extract::State;
use cmdsuite_domain::{DashboardView, Permission, ResourceScope};

use crate::dto::{
    AccessCheckRequest, AccessCheckResponse, UserRequest, ViewAuthorizationRequest,
    ViewAuthorizationResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn check_access_handler(
    State(state): State<AppState>,
    Json(payload): Json<AccessCheckRequest>,
) -> ApiResult<Json<AccessCheckResponse>> {
    let permission = Permission::from_transport(payload.permission.as_str())?;
    let user = payload.user.map(UserRequest::into_user).transpose()?;
    let scope = payload.scope.map(ResourceScope::from);

    let allowed = state
        .permission_resolver
        .has_permission(user.as_ref(), permission, scope.as_ref());

    Ok(Json(AccessCheckResponse {
        permission: permission.as_str().to_owned(),
        allowed,
    }))
}

pub async fn authorize_view_handler(
    State(state): State<AppState>,
    Json(payload): Json<ViewAuthorizationRequest>,
) -> ApiResult<Json<ViewAuthorizationResponse>> {
    let view = payload.view.parse::<DashboardView>()?;
    let user = payload.user.map(UserRequest::into_user).transpose()?;

    let decision = state.view_gate.authorize_view(user.as_ref(), view);

    Ok(Json(ViewAuthorizationResponse::from(decision)))
}

use axum::Json;
use axum::extract::State;
use cmdsuite_domain::Role;

use crate::dto::RoleResponse;
use crate::state::AppState;

pub async fn list_roles_handler(State(state): State<AppState>) -> Json<Vec<RoleResponse>> {
    let table = state.permission_resolver.table();

    Json(
        Role::all()
            .iter()
            .map(|role| RoleResponse::from_table(*role, table))
            .collect(),
    )
}

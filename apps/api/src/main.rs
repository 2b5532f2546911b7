//! Command suite access API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use cmdsuite_core::AppError;
use cmdsuite_domain::RolePermissionTable;
use cmdsuite_infrastructure::{InMemoryUserProfileDirectory, load_role_permission_table};
use tracing::{info, warn};

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let table = match config.role_permissions_path.as_ref() {
        Some(path) => load_role_permission_table(path)?,
        None => RolePermissionTable::standard(),
    };
    let ungranted_roles = table.roles_without_permissions();
    if !ungranted_roles.is_empty() {
        let roles = ungranted_roles
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        warn!(%roles, "roles without permissions will be denied every check");
    }

    let directory = Arc::new(InMemoryUserProfileDirectory::new());
    if config.dev_seed_profiles {
        dev_seed::seed_demo_profiles(&directory).await?;
    }

    let app_state = AppState::new(
        Arc::new(table),
        directory,
        config.unmapped_role_fallback,
    );
    let app = api_router::build_router(app_state, config.frontend_url.as_str())?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "cmdsuite-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

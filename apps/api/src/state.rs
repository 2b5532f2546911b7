use std::sync::Arc;

use cmdsuite_application::{PermissionResolver, SessionService, UserProfileDirectory, ViewGate};
use cmdsuite_domain::{Role, RolePermissionTable};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub permission_resolver: PermissionResolver,
    pub view_gate: ViewGate,
    pub session_service: SessionService,
}

impl AppState {
    /// Wires the services around one role table shared for the process lifetime.
    pub fn new(
        table: Arc<RolePermissionTable>,
        directory: Arc<dyn UserProfileDirectory>,
        unmapped_role_fallback: Option<Role>,
    ) -> Self {
        let permission_resolver = PermissionResolver::new(table.clone());

        Self {
            view_gate: ViewGate::new(permission_resolver.clone()),
            session_service: SessionService::new(directory, table)
                .with_unmapped_role_fallback(unmapped_role_fallback),
            permission_resolver,
        }
    }
}

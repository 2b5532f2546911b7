//! Application services and ports.

#![forbid(unsafe_code)]

mod permission_hydrator;
mod permission_resolver;
mod role_mapping;
mod session_service;
mod view_gate;

pub use permission_hydrator::PermissionHydrator;
pub use permission_resolver::PermissionResolver;
pub use role_mapping::RoleMapper;
pub use session_service::{AuthenticatedLogin, Session, SessionService, UserProfileDirectory};
pub use view_gate::{AccessDenied, ViewDecision, ViewGate};

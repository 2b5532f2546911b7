//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod dashboard;
mod role_permissions;
mod scope;
mod security;
mod user;

pub use dashboard::DashboardView;
pub use role_permissions::RolePermissionTable;
pub use scope::ResourceScope;
pub use security::{AccessLevel, Permission, Role};
pub use user::User;

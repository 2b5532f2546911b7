mod access;
mod common;
mod session;

pub use access::{
    AccessCheckRequest, AccessCheckResponse, AccessDeniedResponse, ViewAuthorizationRequest,
    ViewAuthorizationResponse,
};
pub use common::{
    HealthResponse, NavigationItemResponse, ResourceScopeRequest, RoleResponse, UserRequest,
    UserResponse,
};
pub use session::{SessionRequest, SessionResponse};

use cmdsuite_domain::{DashboardView, Permission, Role, User};
use tracing::debug;

use crate::PermissionResolver;

/// Outcome of gating a dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDecision {
    /// The view may be rendered in full.
    Render(DashboardView),
    /// The fixed access denied state must be rendered instead.
    AccessDenied(AccessDenied),
}

/// Details rendered by the access denied state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    /// View that was requested.
    pub view: DashboardView,
    /// Permission the view requires.
    pub required_permission: Permission,
    /// Role of the requesting user, if any.
    pub role: Option<Role>,
}

impl AccessDenied {
    /// Heading of the access denied state.
    pub const TITLE: &'static str = "Access Denied";
    /// Explanation line of the access denied state.
    pub const REASON: &'static str = "Insufficient Security Clearance";
    /// Error code shown with the access denied state.
    pub const ERROR_CODE: &'static str = "403_FORBIDDEN";
}

/// Gates dashboard rendering and navigation on view permissions.
#[derive(Debug, Clone)]
pub struct ViewGate {
    resolver: PermissionResolver,
}

impl ViewGate {
    /// Creates a gate backed by a permission resolver.
    #[must_use]
    pub fn new(resolver: PermissionResolver) -> Self {
        Self { resolver }
    }

    /// Decides whether the selected view may be rendered for the user.
    #[must_use]
    pub fn authorize_view(&self, user: Option<&User>, view: DashboardView) -> ViewDecision {
        let required_permission = view.required_permission();
        if self.resolver.has_permission(user, required_permission, None) {
            return ViewDecision::Render(view);
        }

        let role = user.and_then(User::role);
        debug!(
            view = view.as_str(),
            required_permission = required_permission.as_str(),
            role = role.map(|role| role.as_str()).unwrap_or("none"),
            "dashboard view denied"
        );

        ViewDecision::AccessDenied(AccessDenied {
            view,
            required_permission,
            role,
        })
    }

    /// Returns the views shown in navigation, in navigation order.
    #[must_use]
    pub fn accessible_views(&self, user: Option<&User>) -> Vec<DashboardView> {
        DashboardView::all()
            .iter()
            .copied()
            .filter(|view| {
                self.resolver
                    .has_permission(user, view.required_permission(), None)
            })
            .collect()
    }

    /// Returns the view selected right after login.
    ///
    /// Users without a role land on the HQ view, which the gate then denies.
    #[must_use]
    pub fn landing_view(&self, user: Option<&User>) -> DashboardView {
        user.and_then(User::role)
            .map(DashboardView::default_for_role)
            .unwrap_or(DashboardView::Hq)
    }
}

use std::str::FromStr;

use cmdsuite_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Dashboard surfaces a user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    /// Organization-wide HQ dashboard.
    Hq,
    /// Regional command dashboard.
    Regional,
    /// Squadron dashboard.
    Squadron,
    /// Cadet profile.
    Cadet,
    /// Parent portal.
    Parent,
}

impl DashboardView {
    /// Returns a stable storage value for this view.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hq => "hq",
            Self::Regional => "regional",
            Self::Squadron => "squadron",
            Self::Cadet => "cadet",
            Self::Parent => "parent",
        }
    }

    /// Returns the navigation label of this view.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hq => "HQ Dashboard",
            Self::Regional => "Regional View",
            Self::Squadron => "Squadron View",
            Self::Cadet => "Cadet Profile",
            Self::Parent => "Parent Portal",
        }
    }

    /// Returns the single permission required to open this view.
    #[must_use]
    pub fn required_permission(&self) -> Permission {
        match self {
            Self::Hq => Permission::ViewHqDashboard,
            Self::Regional => Permission::ViewRegionalDashboard,
            Self::Squadron => Permission::ViewSquadronDashboard,
            Self::Cadet => Permission::ViewCadetDashboard,
            Self::Parent => Permission::ViewParentDashboard,
        }
    }

    /// Returns the view a role lands on after login.
    #[must_use]
    pub fn default_for_role(role: Role) -> Self {
        match role {
            Role::BoardOfDirectors
            | Role::ExternalAuditor
            | Role::ExecutiveStaff
            | Role::CfoTreasurer
            | Role::SupportStaff => Self::Hq,
            Role::RegionalCommander => Self::Regional,
            Role::SquadronCommander | Role::ReviewerInstructor => Self::Squadron,
            Role::CadetMember => Self::Cadet,
            Role::ParentGuardian => Self::Parent,
        }
    }

    /// Returns all views in navigation order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[DashboardView] = &[
            DashboardView::Hq,
            DashboardView::Regional,
            DashboardView::Squadron,
            DashboardView::Cadet,
            DashboardView::Parent,
        ];

        ALL
    }
}

impl FromStr for DashboardView {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "hq" => Ok(Self::Hq),
            "regional" => Ok(Self::Regional),
            "squadron" => Ok(Self::Squadron),
            "cadet" => Ok(Self::Cadet),
            "parent" => Ok(Self::Parent),
            _ => Err(AppError::Validation(format!(
                "unknown dashboard view '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::DashboardView;
    use crate::{Permission, Role, RolePermissionTable};

    #[test]
    fn required_permissions_are_distinct_dashboard_grants() {
        let permissions: HashSet<Permission> = DashboardView::all()
            .iter()
            .map(DashboardView::required_permission)
            .collect();
        assert_eq!(permissions.len(), DashboardView::all().len());
        assert!(permissions.contains(&Permission::ViewParentDashboard));
    }

    #[test]
    fn every_role_can_open_its_default_view() {
        let table = RolePermissionTable::standard();
        for role in Role::all() {
            let view = DashboardView::default_for_role(*role);
            assert!(
                table.grants(*role, view.required_permission()),
                "{role} cannot open {}",
                view.as_str()
            );
        }
    }

    #[test]
    fn reviewer_lands_on_squadron_view() {
        assert_eq!(
            DashboardView::default_for_role(Role::ReviewerInstructor),
            DashboardView::Squadron
        );
        assert_eq!(
            DashboardView::default_for_role(Role::CfoTreasurer),
            DashboardView::Hq
        );
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!("admin".parse::<DashboardView>().is_err());
    }
}

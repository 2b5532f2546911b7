use std::collections::{BTreeMap, BTreeSet};

use crate::{Permission, Role};

static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();

const STANDARD_GRANTS: &[(Role, &[Permission])] = &[
    (
        Role::BoardOfDirectors,
        &[
            Permission::ViewHqDashboard,
            Permission::ViewAuditedFinancials,
            Permission::ApprovePolicyAmendment,
        ],
    ),
    (
        Role::ExternalAuditor,
        &[
            Permission::ViewHqDashboard,
            Permission::ViewAllFinancials,
            Permission::ViewAuditedFinancials,
        ],
    ),
    (
        Role::ExecutiveStaff,
        &[
            Permission::ViewHqDashboard,
            Permission::ViewPiiSensitive,
            Permission::ManageWorkflows,
            Permission::ApproveArchival,
        ],
    ),
    (
        Role::CfoTreasurer,
        &[
            Permission::ViewHqDashboard,
            Permission::ViewAllFinancials,
            Permission::ViewAuditedFinancials,
            Permission::ExecuteFinancialDisbursement,
        ],
    ),
    (
        Role::SupportStaff,
        &[
            Permission::ViewHqDashboard,
            Permission::ViewPiiSensitive,
            Permission::ManageRubricSchema,
            Permission::ManageWorkflows,
        ],
    ),
    (
        Role::RegionalCommander,
        &[
            // HQ data is filtered down to the assigned region by scope checks.
            Permission::ViewHqDashboard,
            Permission::ViewRegionalDashboard,
            Permission::IssueCorrectiveOrder,
        ],
    ),
    (
        Role::SquadronCommander,
        &[
            Permission::ViewSquadronDashboard,
            Permission::ViewLocalSquadronData,
            Permission::ApproveLocalWaiver,
            Permission::IssueCorrectiveOrder,
        ],
    ),
    (
        Role::ReviewerInstructor,
        &[
            Permission::ViewSquadronDashboard,
            Permission::ViewLocalSquadronData,
            Permission::ScoreArtifact,
            Permission::AttestSafetyOpsec,
        ],
    ),
    (
        Role::CadetMember,
        &[
            Permission::ViewCadetDashboard,
            Permission::ViewOwnPortfolio,
            Permission::UpdateOwnPortfolio,
        ],
    ),
    (
        Role::ParentGuardian,
        &[Permission::ViewParentDashboard, Permission::ViewOwnPortfolio],
    ),
];

/// Immutable mapping from each role to the permissions it grants.
///
/// A role without an entry grants nothing. The table is built once and then
/// shared read-only; there is no API to change it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePermissionTable {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionTable {
    /// Builds a table from role grants. Repeated roles and permissions merge.
    #[must_use]
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Role, P)>,
        P: IntoIterator<Item = Permission>,
    {
        let mut grants: BTreeMap<Role, BTreeSet<Permission>> = BTreeMap::new();
        for (role, permissions) in entries {
            grants.entry(role).or_default().extend(permissions);
        }

        Self { grants }
    }

    /// Returns the organization's standard role configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            STANDARD_GRANTS
                .iter()
                .map(|(role, permissions)| (*role, permissions.iter().copied())),
        )
    }

    /// Returns the permissions granted to a role, empty when it has no entry.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.grants.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Returns whether the role grants the permission.
    #[must_use]
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }

    /// Returns the roles that grant no permission at all.
    ///
    /// A correct configuration returns an empty list because every role has
    /// at least one dashboard.
    #[must_use]
    pub fn roles_without_permissions(&self) -> Vec<Role> {
        Role::all()
            .iter()
            .copied()
            .filter(|role| self.permissions_for(*role).is_empty())
            .collect()
    }

    /// Iterates over configured roles and their grants in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &BTreeSet<Permission>)> {
        self.grants
            .iter()
            .map(|(role, permissions)| (*role, permissions))
    }
}

use std::str::FromStr;

use cmdsuite_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions enforced by dashboard policy checks.
///
/// Permissions are opaque tokens compared by exact match. There is no
/// wildcard or hierarchical permission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Permission {
    /// Allows opening the HQ dashboard.
    #[serde(rename = "view:hq_dashboard")]
    ViewHqDashboard,
    /// Allows opening the regional dashboard.
    #[serde(rename = "view:regional_dashboard")]
    ViewRegionalDashboard,
    /// Allows opening the squadron dashboard.
    #[serde(rename = "view:squadron_dashboard")]
    ViewSquadronDashboard,
    /// Allows opening the cadet dashboard.
    #[serde(rename = "view:cadet_dashboard")]
    ViewCadetDashboard,
    /// Allows opening the parent portal.
    #[serde(rename = "view:parent_dashboard")]
    ViewParentDashboard,
    /// Allows reading every financial statement, including unaudited ones.
    #[serde(rename = "read:financials_all")]
    ViewAllFinancials,
    /// Allows reading audited financial statements.
    #[serde(rename = "read:financials_audited")]
    ViewAuditedFinancials,
    /// Allows reading personally identifiable and other sensitive records.
    #[serde(rename = "read:pii_sensitive")]
    ViewPiiSensitive,
    /// Allows reading the portfolio of the linked cadet.
    #[serde(rename = "read:own_portfolio")]
    ViewOwnPortfolio,
    /// Allows reading data of the assigned squadron.
    #[serde(rename = "read:local_squadron_data")]
    ViewLocalSquadronData,
    /// Allows executing financial disbursements.
    #[serde(rename = "write:financial_disbursement")]
    ExecuteFinancialDisbursement,
    /// Allows scoring submitted artifacts.
    #[serde(rename = "write:artifact_score")]
    ScoreArtifact,
    /// Allows attesting safety and OPSEC reviews.
    #[serde(rename = "write:safety_opsec")]
    AttestSafetyOpsec,
    /// Allows updating the portfolio of the linked cadet.
    #[serde(rename = "write:own_portfolio")]
    UpdateOwnPortfolio,
    /// Allows approving local waivers.
    #[serde(rename = "write:approve_waiver")]
    ApproveLocalWaiver,
    /// Allows issuing corrective orders.
    #[serde(rename = "write:corrective_order")]
    IssueCorrectiveOrder,
    /// Allows approving policy amendments.
    #[serde(rename = "write:approve_policy")]
    ApprovePolicyAmendment,
    /// Allows approving record archival.
    #[serde(rename = "write:approve_archival")]
    ApproveArchival,
    /// Allows managing the scoring rubric schema.
    #[serde(rename = "system:manage_schema")]
    ManageRubricSchema,
    /// Allows managing workflows.
    #[serde(rename = "system:manage_workflows")]
    ManageWorkflows,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewHqDashboard => "view:hq_dashboard",
            Self::ViewRegionalDashboard => "view:regional_dashboard",
            Self::ViewSquadronDashboard => "view:squadron_dashboard",
            Self::ViewCadetDashboard => "view:cadet_dashboard",
            Self::ViewParentDashboard => "view:parent_dashboard",
            Self::ViewAllFinancials => "read:financials_all",
            Self::ViewAuditedFinancials => "read:financials_audited",
            Self::ViewPiiSensitive => "read:pii_sensitive",
            Self::ViewOwnPortfolio => "read:own_portfolio",
            Self::ViewLocalSquadronData => "read:local_squadron_data",
            Self::ExecuteFinancialDisbursement => "write:financial_disbursement",
            Self::ScoreArtifact => "write:artifact_score",
            Self::AttestSafetyOpsec => "write:safety_opsec",
            Self::UpdateOwnPortfolio => "write:own_portfolio",
            Self::ApproveLocalWaiver => "write:approve_waiver",
            Self::IssueCorrectiveOrder => "write:corrective_order",
            Self::ApprovePolicyAmendment => "write:approve_policy",
            Self::ApproveArchival => "write:approve_archival",
            Self::ManageRubricSchema => "system:manage_schema",
            Self::ManageWorkflows => "system:manage_workflows",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewHqDashboard,
            Permission::ViewRegionalDashboard,
            Permission::ViewSquadronDashboard,
            Permission::ViewCadetDashboard,
            Permission::ViewParentDashboard,
            Permission::ViewAllFinancials,
            Permission::ViewAuditedFinancials,
            Permission::ViewPiiSensitive,
            Permission::ViewOwnPortfolio,
            Permission::ViewLocalSquadronData,
            Permission::ExecuteFinancialDisbursement,
            Permission::ScoreArtifact,
            Permission::AttestSafetyOpsec,
            Permission::UpdateOwnPortfolio,
            Permission::ApproveLocalWaiver,
            Permission::IssueCorrectiveOrder,
            Permission::ApprovePolicyAmendment,
            Permission::ApproveArchival,
            Permission::ManageRubricSchema,
            Permission::ManageWorkflows,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Organizational roles a user can be assigned at login.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Board of directors member.
    BoardOfDirectors,
    /// External financial auditor.
    ExternalAuditor,
    /// Executive staff at HQ.
    ExecutiveStaff,
    /// Chief financial officer or treasurer.
    CfoTreasurer,
    /// Support staff (DTE and risk).
    SupportStaff,
    /// Commander of a region.
    RegionalCommander,
    /// Commander of a squadron.
    SquadronCommander,
    /// Reviewer or instructor attached to a squadron.
    ReviewerInstructor,
    /// Cadet member.
    CadetMember,
    /// Parent or guardian of a cadet.
    ParentGuardian,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoardOfDirectors => "board_of_directors",
            Self::ExternalAuditor => "external_auditor",
            Self::ExecutiveStaff => "executive_staff",
            Self::CfoTreasurer => "cfo_treasurer",
            Self::SupportStaff => "support_staff",
            Self::RegionalCommander => "regional_commander",
            Self::SquadronCommander => "squadron_commander",
            Self::ReviewerInstructor => "reviewer_instructor",
            Self::CadetMember => "cadet_member",
            Self::ParentGuardian => "parent_guardian",
        }
    }

    /// Returns the human-readable role name shown in the dashboard.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BoardOfDirectors => "Board of Directors",
            Self::ExternalAuditor => "External Auditor",
            Self::ExecutiveStaff => "Executive Staff (HQ)",
            Self::CfoTreasurer => "CFO / Treasurer",
            Self::SupportStaff => "Support Staff (DTE/Risk)",
            Self::RegionalCommander => "Regional Commander",
            Self::SquadronCommander => "Squadron Commander",
            Self::ReviewerInstructor => "Reviewer / Instructor",
            Self::CadetMember => "Cadet Member",
            Self::ParentGuardian => "Parent / Guardian",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::BoardOfDirectors,
            Role::ExternalAuditor,
            Role::ExecutiveStaff,
            Role::CfoTreasurer,
            Role::SupportStaff,
            Role::RegionalCommander,
            Role::SquadronCommander,
            Role::ReviewerInstructor,
            Role::CadetMember,
            Role::ParentGuardian,
        ];

        ALL
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Security clearance level displayed alongside the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum AccessLevel {
    /// Lowest clearance.
    #[default]
    L1,
    /// Second clearance level.
    L2,
    /// Third clearance level.
    L3,
    /// Fourth clearance level.
    L4,
    /// Highest clearance.
    L5,
}

impl AccessLevel {
    /// Returns a stable storage value for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::L4 => "L4",
            Self::L5 => "L5",
        }
    }

    /// Returns the level given to users built straight from a login response.
    #[must_use]
    pub fn default_for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::ExecutiveStaff | Role::BoardOfDirectors) => Self::L5,
            _ => Self::L1,
        }
    }
}

impl FromStr for AccessLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            "L3" => Ok(Self::L3),
            "L4" => Ok(Self::L4),
            "L5" => Ok(Self::L5),
            _ => Err(AppError::Validation(format!(
                "unknown access level '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::{AccessLevel, Permission, Role};

    #[test]
    fn permission_roundtrip_storage_value() {
        let permission = Permission::ExecuteFinancialDisbursement;
        let restored = Permission::from_str(permission.as_str());
        assert!(restored.is_ok());
        assert_eq!(
            restored.unwrap_or(Permission::ViewHqDashboard),
            permission
        );
    }

    #[test]
    fn unknown_permission_is_rejected() {
        assert!(Permission::from_str("view:all").is_err());
        assert!(Permission::from_str("VIEW:HQ_DASHBOARD").is_err());
    }

    #[test]
    fn permission_storage_values_are_unique() {
        let values: HashSet<&str> = Permission::all().iter().map(Permission::as_str).collect();
        assert_eq!(values.len(), Permission::all().len());
    }

    #[test]
    fn permission_serializes_as_storage_value() {
        let json = serde_json::to_string(&Permission::ScoreArtifact).unwrap_or_default();
        assert_eq!(json, "\"write:artifact_score\"");
    }

    #[test]
    fn there_are_exactly_ten_roles() {
        assert_eq!(Role::all().len(), 10);
        let values: HashSet<&str> = Role::all().iter().map(Role::as_str).collect();
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn role_serde_matches_storage_value() {
        for role in Role::all() {
            let json = serde_json::to_string(role).unwrap_or_default();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("Squadron Commander").is_err());
        assert_eq!(
            Role::from_str("cfo_treasurer").unwrap_or(Role::CadetMember),
            Role::CfoTreasurer
        );
    }

    #[test]
    fn access_level_defaults_follow_role() {
        assert_eq!(
            AccessLevel::default_for_role(Some(Role::BoardOfDirectors)),
            AccessLevel::L5
        );
        assert_eq!(
            AccessLevel::default_for_role(Some(Role::RegionalCommander)),
            AccessLevel::L1
        );
        assert_eq!(AccessLevel::default_for_role(None), AccessLevel::L1);
    }
}

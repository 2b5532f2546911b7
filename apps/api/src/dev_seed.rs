use cmdsuite_core::{AppResult, UserIdentity};
use cmdsuite_domain::{AccessLevel, Role, User};
use cmdsuite_infrastructure::InMemoryUserProfileDirectory;
use tracing::info;

const DEV_SEED_REGION_ID: &str = "REG-NE";
const DEV_SEED_SQUADRON_ID: &str = "SQ-101";
const DEV_SEED_CADET_ID: &str = "u-009";

struct SeedProfile {
    id: &'static str,
    username: &'static str,
    name: &'static str,
    role: Role,
    access_level: AccessLevel,
    region_id: Option<&'static str>,
    squadron_id: Option<&'static str>,
    linked_cadet_id: Option<&'static str>,
}

impl SeedProfile {
    const fn new(
        id: &'static str,
        username: &'static str,
        name: &'static str,
        role: Role,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            id,
            username,
            name,
            role,
            access_level,
            region_id: None,
            squadron_id: None,
            linked_cadet_id: None,
        }
    }

    const fn in_region(mut self) -> Self {
        self.region_id = Some(DEV_SEED_REGION_ID);
        self
    }

    const fn in_squadron(mut self) -> Self {
        self.region_id = Some(DEV_SEED_REGION_ID);
        self.squadron_id = Some(DEV_SEED_SQUADRON_ID);
        self
    }

    const fn linked_to_cadet(mut self) -> Self {
        self.linked_cadet_id = Some(DEV_SEED_CADET_ID);
        self
    }

    fn into_user(self) -> AppResult<User> {
        let identity = UserIdentity::new(self.id, self.username, self.name)?;
        let mut user = User::new(identity, Some(self.role), self.access_level);

        if let Some(region_id) = self.region_id {
            user = user.with_assigned_region(region_id);
        }
        if let Some(squadron_id) = self.squadron_id {
            user = user.with_assigned_squadron(squadron_id);
        }
        if let Some(cadet_id) = self.linked_cadet_id {
            user = user.with_linked_cadet(cadet_id);
        }

        Ok(user)
    }
}

fn demo_profiles() -> [SeedProfile; 10] {
    [
        SeedProfile::new(
            "u-001",
            "board",
            "Chairperson Vance",
            Role::BoardOfDirectors,
            AccessLevel::L5,
        ),
        SeedProfile::new(
            "u-002",
            "auditor",
            "Ext. Audit Firm",
            Role::ExternalAuditor,
            AccessLevel::L5,
        ),
        SeedProfile::new(
            "u-003",
            "exec",
            "Gen. A. Smith",
            Role::ExecutiveStaff,
            AccessLevel::L5,
        ),
        SeedProfile::new(
            "u-004",
            "cfo",
            "Treas. J. Bond",
            Role::CfoTreasurer,
            AccessLevel::L5,
        ),
        SeedProfile::new(
            "u-005",
            "support",
            "Tech. SysAdmin",
            Role::SupportStaff,
            AccessLevel::L4,
        ),
        SeedProfile::new(
            "u-006",
            "regional",
            "Col. B. Miller",
            Role::RegionalCommander,
            AccessLevel::L4,
        )
        .in_region(),
        SeedProfile::new(
            "u-007",
            "squadron",
            "Maj. C. Davis",
            Role::SquadronCommander,
            AccessLevel::L3,
        )
        .in_squadron(),
        SeedProfile::new(
            "u-008",
            "instructor",
            "Lt. T. Teacher",
            Role::ReviewerInstructor,
            AccessLevel::L2,
        )
        .in_squadron(),
        SeedProfile::new(
            "u-009",
            "cadet",
            "Cdt. E. Ender",
            Role::CadetMember,
            AccessLevel::L1,
        )
        .linked_to_cadet(),
        SeedProfile::new(
            "u-010",
            "parent",
            "Mrs. Ender",
            Role::ParentGuardian,
            AccessLevel::L1,
        )
        .linked_to_cadet(),
    ]
}

/// Registers one demo profile per role for local development.
pub async fn seed_demo_profiles(directory: &InMemoryUserProfileDirectory) -> AppResult<()> {
    let profiles = demo_profiles();
    let count = profiles.len();

    for profile in profiles {
        directory.insert(profile.into_user()?).await;
    }

    info!(count, "seeded demo user profiles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use cmdsuite_domain::Role;
    use cmdsuite_infrastructure::InMemoryUserProfileDirectory;

    use super::seed_demo_profiles;

    #[tokio::test]
    async fn seeds_one_profile_per_role() {
        let directory = InMemoryUserProfileDirectory::new();
        assert!(seed_demo_profiles(&directory).await.is_ok());

        let profiles = directory.list().await;
        assert_eq!(profiles.len(), Role::all().len());
        for role in Role::all() {
            assert!(profiles.iter().any(|profile| profile.role() == Some(*role)));
        }
    }

    #[tokio::test]
    async fn scoped_profiles_carry_assignments() {
        let directory = InMemoryUserProfileDirectory::new();
        assert!(seed_demo_profiles(&directory).await.is_ok());
        let profiles = directory.list().await;

        let instructor = profiles
            .iter()
            .find(|profile| profile.identity().username() == "instructor");
        assert_eq!(
            instructor.and_then(|profile| profile.assigned_squadron_id()),
            Some("SQ-101")
        );
        assert_eq!(
            instructor.and_then(|profile| profile.assigned_region_id()),
            Some("REG-NE")
        );

        let parent = profiles
            .iter()
            .find(|profile| profile.identity().username() == "parent");
        assert_eq!(
            parent.and_then(|profile| profile.linked_cadet_id()),
            Some("u-009")
        );
        assert!(parent.is_some_and(|profile| profile.permissions().is_none()));
    }
}

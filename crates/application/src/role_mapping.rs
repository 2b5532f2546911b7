use std::collections::HashMap;

use cmdsuite_domain::Role;

const STANDARD_ALIASES: &[(&str, Role)] = &[
    ("admin", Role::ExecutiveStaff),
    ("exec", Role::ExecutiveStaff),
    ("executive", Role::ExecutiveStaff),
    ("board", Role::BoardOfDirectors),
    ("auditor", Role::ExternalAuditor),
    ("cfo", Role::CfoTreasurer),
    ("treasurer", Role::CfoTreasurer),
    ("support", Role::SupportStaff),
    ("regional", Role::RegionalCommander),
    ("squadron", Role::SquadronCommander),
    ("reviewer", Role::ReviewerInstructor),
    ("instructor", Role::ReviewerInstructor),
    ("cadet", Role::CadetMember),
    ("parent", Role::ParentGuardian),
    ("guardian", Role::ParentGuardian),
];

/// Maps role strings from login responses onto roles.
///
/// Matching is exact against a fixed alias table after normalization
/// (trimmed, ASCII lowercase, `-` and spaces folded to `_`). Every role's
/// storage value and display name are always recognized.
#[derive(Debug, Clone)]
pub struct RoleMapper {
    aliases: HashMap<String, Role>,
}

impl RoleMapper {
    /// Creates a mapper with the standard alias table.
    #[must_use]
    pub fn standard() -> Self {
        let mut aliases = HashMap::new();
        for role in Role::all() {
            aliases.insert(normalize(role.as_str()), *role);
            aliases.insert(normalize(role.display_name()), *role);
        }
        for (alias, role) in STANDARD_ALIASES {
            aliases.insert(normalize(alias), *role);
        }

        Self { aliases }
    }

    /// Adds or replaces an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: &str, role: Role) -> Self {
        self.aliases.insert(normalize(alias), role);
        self
    }

    /// Resolves a raw role string, `None` when it matches no alias.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<Role> {
        self.aliases.get(&normalize(raw)).copied()
    }
}

impl Default for RoleMapper {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|character| match character {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cmdsuite_domain::Role;
    use proptest::prelude::*;

    use super::RoleMapper;

    #[test]
    fn storage_values_and_display_names_map_to_their_role() {
        let mapper = RoleMapper::standard();
        for role in Role::all() {
            assert_eq!(mapper.resolve(role.as_str()), Some(*role));
            assert_eq!(mapper.resolve(role.display_name()), Some(*role));
        }
    }

    #[test]
    fn backend_aliases_are_recognized() {
        let mapper = RoleMapper::standard();
        assert_eq!(mapper.resolve("admin"), Some(Role::ExecutiveStaff));
        assert_eq!(mapper.resolve(" Treasurer "), Some(Role::CfoTreasurer));
        assert_eq!(mapper.resolve("Squadron-Commander"), Some(Role::SquadronCommander));
        assert_eq!(mapper.resolve("cadet_member"), Some(Role::CadetMember));
    }

    #[test]
    fn substrings_do_not_match() {
        let mapper = RoleMapper::standard();
        assert_eq!(mapper.resolve("executioner"), None);
        assert_eq!(mapper.resolve("regional_squadron_lead"), None);
        assert_eq!(mapper.resolve("not_a_parent"), None);
        assert_eq!(mapper.resolve(""), None);
    }

    #[test]
    fn custom_alias_overrides_standard_entry() {
        let mapper = RoleMapper::standard().with_alias("admin", Role::SupportStaff);
        assert_eq!(mapper.resolve("ADMIN"), Some(Role::SupportStaff));
    }

    proptest! {
        #[test]
        fn resolve_never_panics(raw in any::<String>()) {
            let _ = RoleMapper::standard().resolve(&raw);
        }

        #[test]
        fn resolution_ignores_case_and_padding(
            index in 0..10_usize,
            padding in "[ \t]{0,3}",
        ) {
            let role = Role::all()[index];
            let raw = format!("{padding}{}{padding}", role.as_str().to_ascii_uppercase());
            prop_assert_eq!(RoleMapper::standard().resolve(&raw), Some(role));
        }
    }
}

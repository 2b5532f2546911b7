use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use cmdsuite_core::{AppError, AppResult};
use cmdsuite_domain::{Permission, Role, RolePermissionTable};
use tracing::info;

/// Loads a role permission table from a JSON file.
///
/// The file holds an object keyed by role storage value whose values are
/// arrays of permission storage values. Roles missing from the file grant
/// nothing.
pub fn load_role_permission_table(path: impl AsRef<Path>) -> AppResult<RolePermissionTable> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|error| {
        AppError::Internal(format!(
            "failed to read role permissions file '{}': {error}",
            path.display()
        ))
    })?;

    let table = parse_role_permission_table(contents.as_str())?;
    info!(
        path = %path.display(),
        configured_roles = table.iter().count(),
        "loaded role permission table"
    );

    Ok(table)
}

/// Parses a role permission table from its JSON representation.
pub fn parse_role_permission_table(contents: &str) -> AppResult<RolePermissionTable> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(contents).map_err(|error| {
        AppError::Validation(format!("invalid role permissions document: {error}"))
    })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (role, permissions) in raw {
        let role = Role::from_str(role.as_str())?;
        let permissions = permissions
            .iter()
            .map(|permission| Permission::from_transport(permission.as_str()))
            .collect::<AppResult<Vec<_>>>()?;
        entries.push((role, permissions));
    }

    Ok(RolePermissionTable::new(entries))
}

//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_user_profile_directory;
mod json_role_permission_table;

pub use in_memory_user_profile_directory::InMemoryUserProfileDirectory;
pub use json_role_permission_table::{load_role_permission_table, parse_role_permission_table};

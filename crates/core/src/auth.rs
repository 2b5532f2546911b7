use serde::{Deserialize, Serialize};

use crate::{AppResult, NonEmptyString};

/// Identity of an authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    subject: NonEmptyString,
    username: NonEmptyString,
    display_name: String,
}

impl UserIdentity {
    /// Creates a user identity from authentication data.
    ///
    /// Falls back to the username when the display name is blank.
    pub fn new(
        subject: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> AppResult<Self> {
        let username = NonEmptyString::new(username)?;
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            username.as_str().to_owned()
        } else {
            display_name
        };

        Ok(Self {
            subject: NonEmptyString::new(subject)?,
            username,
            display_name,
        })
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Returns the login name.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::UserIdentity;

    #[test]
    fn blank_display_name_falls_back_to_username() {
        let identity = UserIdentity::new("u-007", "squadron", "  ");
        assert!(identity.is_ok());
        let display_name = identity
            .map(|identity| identity.display_name().to_owned())
            .unwrap_or_default();
        assert_eq!(display_name, "squadron");
    }

    #[test]
    fn empty_subject_is_rejected() {
        assert!(UserIdentity::new("", "cadet", "Cdt. E. Ender").is_err());
    }
}

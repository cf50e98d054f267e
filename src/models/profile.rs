//! User profile and role.

use serde::{Deserialize, Serialize};

/// Which dashboard a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Instructor,
    #[default]
    Student,
}

impl Role {
    /// Get the display name for the role.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Instructor => "Instructor",
            Role::Student => "Student",
        }
    }
}

/// Externally supplied user data.
///
/// Screens only read it; edits flow back to the owner as events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// Email to filter appointments by, if one is set.
    pub fn filter_email(&self) -> Option<String> {
        let email = self.email.trim();
        (!email.is_empty()).then(|| email.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_is_absent() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.filter_email(), None);

        profile.email = "   ".to_string();
        assert_eq!(profile.filter_email(), None);

        profile.email = " prof@example.com ".to_string();
        assert_eq!(profile.filter_email().as_deref(), Some("prof@example.com"));
    }

    #[test]
    fn test_role_lowercase_in_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            role: Role,
        }
        let w: Wrapper = toml::from_str("role = \"instructor\"").unwrap();
        assert_eq!(w.role, Role::Instructor);
    }
}

//! Profile draft editing.

use crate::models::UserProfile;

/// Events a profile screen emits to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    /// The user saved the draft; the owner decides how to persist it.
    UpdateRequested { name: String },
}

/// Local draft of the user's name, seeded from the owner's profile.
pub struct ProfileScreen {
    profile: UserProfile,
    pub draft_name: String,
}

impl ProfileScreen {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            draft_name: profile.name.clone(),
            profile,
        }
    }

    /// Profile as supplied when the screen was mounted.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Save the draft. Makes no server call.
    pub fn save(&self) -> ProfileEvent {
        ProfileEvent::UpdateRequested {
            name: self.draft_name.clone(),
        }
    }
}

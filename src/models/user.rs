//! User identity and extended profile models.

use serde::{Deserialize, Serialize};

/// The signed-in identity, fixed for the session.
///
/// `name` and `avatar` are refreshed when the current user edits their
/// profile; `id` never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image reference
    pub avatar: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// User record with the extended profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable user id (also the map key)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar image reference
    pub avatar: String,
    /// Short bio
    #[serde(default)]
    pub bio: String,
    /// Skills, in the order the user listed them
    #[serde(default)]
    pub skills: Vec<String>,
    /// Preferred roles, in the order the user listed them
    #[serde(default)]
    pub roles: Vec<String>,
    /// Experience level label
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub location: String,
    /// GitHub handle
    #[serde(default)]
    pub github: String,
    /// LinkedIn handle
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub verified: bool,
}

impl User {
    /// Synthesize the default empty profile for an identity with no stored
    /// profile yet.
    ///
    /// The result is computed at read time and never persisted until the
    /// user explicitly edits it.
    pub fn synthesized(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            avatar: identity.avatar.clone(),
            bio: String::new(),
            skills: Vec::new(),
            roles: Vec::new(),
            experience: String::new(),
            location: String::new(),
            github: String::new(),
            linkedin: String::new(),
            verified: false,
        }
    }
}

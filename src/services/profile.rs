// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile editing and the denormalized display-field cascade.
//!
//! Posts carry snapshots of their owner's name and avatar, and team posts
//! may list member entries keyed only by display name. A profile edit has
//! to push the new values into all of those copies.

use crate::models::{Identity, User};
use crate::store::EntityStore;

/// Partial profile edit.
///
/// `None` leaves the previous value in place. For `skills` and `roles` an
/// explicit empty list clears; omission never clears.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfileUpdate {
    /// Target user id
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub roles: Option<Vec<String>>,
    pub experience: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// Merge an update onto the stored profile and cascade the new display
/// fields onto every denormalized copy.
///
/// Returns `false` (no-op) when the target id cannot be resolved to a
/// stored profile or to the session identity.
pub fn update_profile(
    store: &mut EntityStore,
    identity: &mut Identity,
    update: ProfileUpdate,
) -> bool {
    if update.id.is_empty() {
        return false;
    }

    let base = match store.get_user(&update.id) {
        Some(user) => user.clone(),
        // The current user may not have a stored profile yet; their first
        // edit starts from the synthesized default. Other unknown ids have
        // no identity fields to start from.
        None if update.id == identity.id => User::synthesized(identity),
        None => {
            tracing::warn!(user_id = %update.id, "Profile update for unknown user; ignoring");
            return false;
        }
    };

    let previous_name = base.name.clone();

    let mut user = base;
    if let Some(name) = update.name {
        user.name = name;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
    if let Some(bio) = update.bio {
        user.bio = bio;
    }
    if let Some(skills) = update.skills {
        user.skills = skills;
    }
    if let Some(roles) = update.roles {
        user.roles = roles;
    }
    if let Some(experience) = update.experience {
        user.experience = experience;
    }
    if let Some(location) = update.location {
        user.location = location;
    }
    if let Some(github) = update.github {
        user.github = github;
    }
    if let Some(linkedin) = update.linkedin {
        user.linkedin = linkedin;
    }
    if let Some(avatar) = update.avatar {
        user.avatar = avatar;
    }
    if user.avatar.is_empty() {
        // Last fallback in the chain: the acting user's current avatar.
        user.avatar = identity.avatar.clone();
    }

    let user_id = user.id.clone();
    let name = user.name.clone();
    let avatar = user.avatar.clone();

    store.put_user(user);

    if user_id == identity.id {
        identity.name = name.clone();
        identity.avatar = avatar.clone();
    }

    let mut owned_posts = 0u32;
    let mut member_entries = 0u32;
    for post in store.posts_mut() {
        if post.owner_id == user_id {
            post.owner_name = name.clone();
            post.owner_avatar = avatar.clone();
            owned_posts += 1;
        }
        if let Some(members) = post.members_mut() {
            for member in members.iter_mut() {
                // Member entries carry no user id; match by the previous
                // display name. A collision between two users with the
                // same name rewrites both entries.
                if member.name == previous_name {
                    member.name = name.clone();
                    member.avatar = avatar.clone();
                    member_entries += 1;
                }
            }
        }
    }

    tracing::info!(
        user_id = %user_id,
        posts = owned_posts,
        member_entries,
        "Profile updated"
    );
    true
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post creation service.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::DraftError;
use crate::models::{Identity, Post, PostKind, PostType};
use crate::store::EntityStore;

/// Fallback time commitment when the form leaves it blank.
const DEFAULT_TIME_COMMITMENT: &str = "Flexible";

/// Incoming form payload for a new post.
///
/// `tech_tags` and `roles` are comma-separated strings, exactly as the
/// creation form submits them. `roles` holds the roles needed (team posts)
/// or the desired roles (individual posts).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostDraft {
    pub post_type: PostType,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub tech_tags: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub work_preference: Option<String>,
    #[serde(default)]
    pub time_commitment: Option<String>,
}

/// Split a comma-separated token list: trim each token, drop empty tokens,
/// preserve order, keep duplicates.
pub fn parse_tokens(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Publish a new post from a draft and prepend it to the feed.
///
/// Owner display fields are snapshotted from the acting identity. Team
/// posts start with a headcount of one (the owner) and a target of one
/// spot per listed role.
pub fn create_post(
    store: &mut EntityStore,
    identity: &Identity,
    draft: &PostDraft,
    today: NaiveDate,
) -> Result<Post, DraftError> {
    draft.validate()?;

    let tech_tags = parse_tokens(&draft.tech_tags);
    let roles = parse_tokens(&draft.roles);

    let kind = match draft.post_type {
        PostType::TeamSeekingMembers => PostKind::TeamSeekingMembers {
            team_size: 1,
            team_capacity: 1 + roles.len() as u32,
            roles_needed: roles,
            current_members: None,
        },
        PostType::IndividualSeekingTeam => PostKind::IndividualSeekingTeam {
            desired_roles: roles,
        },
    };

    let time_commitment = draft
        .time_commitment
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TIME_COMMITMENT.to_string());

    let post = Post {
        id: store.mint_id(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        owner_id: identity.id.clone(),
        owner_name: identity.name.clone(),
        owner_avatar: identity.avatar.clone(),
        tech_tags,
        created_at: today,
        work_preference: draft.work_preference.clone(),
        time_commitment: Some(time_commitment),
        duration: Some("3 months".to_string()),
        match_score: Some(0.8),
        match_explanation: Some("New post - perfect for exploring opportunities".to_string()),
        kind,
    };

    tracing::info!(
        post_id = %post.id,
        owner_id = %post.owner_id,
        post_type = ?draft.post_type,
        "Post published"
    );
    store.append_post(post.clone());
    Ok(post)
}

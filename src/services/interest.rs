// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interest mutation service.
//!
//! Handles the two interest flows:
//! 1. A user expresses interest in another user's post
//! 2. The post owner settles a pending interest (accept or decline)

use chrono::NaiveDate;

use crate::error::InterestError;
use crate::models::{Identity, Interest, InterestStatus};
use crate::store::EntityStore;

/// Owner decision on a pending interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestDecision {
    Accepted,
    Declined,
}

impl InterestDecision {
    fn status(self) -> InterestStatus {
        match self {
            InterestDecision::Accepted => InterestStatus::Accepted,
            InterestDecision::Declined => InterestStatus::Declined,
        }
    }
}

/// Record the acting user's interest in a post.
///
/// Preconditions are checked in order and the first failure wins; the store
/// is untouched on failure. On success the stored interest is returned,
/// with `status = pending` and the offered roles kept only for team posts.
pub fn express_interest(
    store: &mut EntityStore,
    identity: &Identity,
    post_id: &str,
    message: &str,
    selected_roles: &[String],
    today: NaiveDate,
) -> Result<Interest, InterestError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(InterestError::EmptyMessage);
    }

    let post = store
        .get_post(post_id)
        .ok_or(InterestError::PostUnavailable)?;

    if post.owner_id == identity.id {
        return Err(InterestError::OwnPost);
    }

    // Team posts with open roles require the sender to pick at least one
    // of them, checked against the post state at this moment.
    let is_team_post = post.is_team_post();
    if is_team_post && !post.roles().is_empty() {
        let offers_open_role = selected_roles
            .iter()
            .any(|role| post.roles().contains(role));
        if !offers_open_role {
            return Err(InterestError::NoRoleSelected);
        }
    }

    let already_expressed = store
        .interests_for_user(&identity.id)
        .iter()
        .any(|interest| interest.post_id == post_id);
    if already_expressed {
        return Err(InterestError::AlreadyExpressed);
    }

    let interest = Interest {
        id: store.mint_id(),
        user_id: identity.id.clone(),
        post_id: post_id.to_string(),
        message: message.to_string(),
        status: InterestStatus::Pending,
        created_at: today,
        roles: if is_team_post {
            selected_roles.to_vec()
        } else {
            Vec::new()
        },
    };

    tracing::info!(
        interest_id = %interest.id,
        post_id,
        user_id = %interest.user_id,
        roles = ?interest.roles,
        "Interest expressed"
    );
    store.append_interest(interest.clone());
    Ok(interest)
}

/// Apply an owner's decision to a pending interest.
///
/// Transitions are terminal: an interest that is already accepted or
/// declined is left unchanged. Unknown ids are tolerated as no-ops. Returns
/// whether the status changed.
///
/// Ownership is not checked here; only the presentation layer decides who
/// sees the accept/decline actions.
pub fn respond_to_interest(
    store: &mut EntityStore,
    interest_id: &str,
    decision: InterestDecision,
) -> bool {
    let current = store.get_interest(interest_id).map(|i| i.status);
    match current {
        Some(status) if status.is_pending() => {
            let applied = store.set_interest_status(interest_id, decision.status());
            tracing::info!(interest_id, ?decision, "Interest settled");
            applied
        }
        Some(status) => {
            tracing::debug!(interest_id, ?status, "Interest already settled; ignoring");
            false
        }
        None => {
            tracing::debug!(interest_id, "Unknown interest id; ignoring");
            false
        }
    }
}

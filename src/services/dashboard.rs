// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user dashboard partitions and aggregates.

use std::collections::HashSet;

use crate::models::{DashboardSummary, Interest, Post};
use crate::store::EntityStore;

/// A sent interest joined with its resolved post.
///
/// The join tolerates a missing post even though the current lifecycle
/// never removes one.
#[derive(Debug, Clone)]
pub struct InterestWithPost<'a> {
    pub interest: &'a Interest,
    pub post: Option<&'a Post>,
}

/// Posts owned by the user, in feed order.
pub fn my_posts<'a>(store: &'a EntityStore, user_id: &str) -> Vec<&'a Post> {
    store
        .posts()
        .filter(|post| post.owner_id == user_id)
        .collect()
}

/// Interests received on the user's posts, in insertion order.
pub fn received_interests<'a>(store: &'a EntityStore, user_id: &str) -> Vec<&'a Interest> {
    let my_post_ids: HashSet<&str> = store
        .posts()
        .filter(|post| post.owner_id == user_id)
        .map(|post| post.id.as_str())
        .collect();
    store
        .interests()
        .filter(|interest| my_post_ids.contains(interest.post_id.as_str()))
        .collect()
}

/// Interests the user has sent, each joined with its post.
pub fn my_interests<'a>(store: &'a EntityStore, user_id: &str) -> Vec<InterestWithPost<'a>> {
    store
        .interests_for_user(user_id)
        .into_iter()
        .map(|interest| InterestWithPost {
            interest,
            post: store.get_post(&interest.post_id),
        })
        .collect()
}

/// The first three posts not owned by the user, in feed order.
///
/// A fixed heuristic, not a ranking model.
pub fn suggested_posts<'a>(store: &'a EntityStore, user_id: &str) -> Vec<&'a Post> {
    store
        .posts()
        .filter(|post| post.owner_id != user_id)
        .take(3)
        .collect()
}

/// Aggregate counts for the dashboard header.
pub fn summary(store: &EntityStore, user_id: &str) -> DashboardSummary {
    DashboardSummary::compute(
        my_posts(store, user_id),
        received_interests(store, user_id),
        store.interests_for_user(user_id),
    )
}

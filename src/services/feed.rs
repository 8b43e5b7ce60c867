// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Browse-feed filtering.

use crate::models::{Post, PostType};
use crate::store::EntityStore;

/// Exact-match browse filters; `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilters {
    pub post_type: Option<PostType>,
    /// Must appear in the post's tech tags
    pub skill: Option<String>,
    /// Must appear in the post's role labels (either variant)
    pub role: Option<String>,
    /// Must equal the post's work preference
    pub work: Option<String>,
}

impl PostFilters {
    /// Whether a post satisfies every non-empty filter.
    fn matches(&self, post: &Post) -> bool {
        if let Some(post_type) = self.post_type {
            if post.post_type() != post_type {
                return false;
            }
        }
        if let Some(skill) = &self.skill {
            if !post.tech_tags.iter().any(|tag| tag == skill) {
                return false;
            }
        }
        if let Some(role) = &self.role {
            if !post.roles().iter().any(|r| r == role) {
                return false;
            }
        }
        if let Some(work) = &self.work {
            if post.work_preference.as_deref() != Some(work.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Posts passing every non-empty filter, in feed order
/// (most-recent-first; survivors are never reordered).
pub fn filter_posts<'a>(store: &'a EntityStore, filters: &PostFilters) -> Vec<&'a Post> {
    store.posts().filter(|post| filters.matches(post)).collect()
}

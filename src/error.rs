// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation failures surfaced to the presentation layer.
//!
//! Every mutating operation returns the first unmet precondition as a
//! structured result and leaves the store untouched. Nothing here is ever
//! raised as a panic, and none of these are fatal to the session.

/// Rejection reasons for expressing interest, in precondition order.
///
/// The messages are the exact copy shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterestError {
    #[error("Please write a message before expressing interest.")]
    EmptyMessage,

    #[error("This post is no longer available.")]
    PostUnavailable,

    #[error("You cannot express interest in your own post.")]
    OwnPost,

    #[error("Select at least one role you can help with before expressing interest.")]
    NoRoleSelected,

    #[error("You have already expressed interest in this post.")]
    AlreadyExpressed,
}

/// Rejection reasons for publishing a post.
///
/// Callers are expected to pre-validate the required text fields; this is
/// the defensive backstop, not the primary validation surface.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Invalid post draft: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

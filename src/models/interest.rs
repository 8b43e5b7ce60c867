// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Interest model: one user's expressed intent to join a post.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of an interest.
///
/// `Pending` is the initial state; `Accepted` and `Declined` are terminal.
/// There is no path back to `Pending` and no path between the two settled
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Pending,
    Accepted,
    Declined,
}

impl InterestStatus {
    /// Whether the status can still change.
    pub fn is_pending(self) -> bool {
        matches!(self, InterestStatus::Pending)
    }
}

/// A user's expressed interest in a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    /// Stable interest id (also the map key)
    pub id: String,
    /// Sender user id
    pub user_id: String,
    /// Target post id
    pub post_id: String,
    /// Introduction message (trimmed, non-empty)
    pub message: String,
    pub status: InterestStatus,
    /// Creation date; never updated
    pub created_at: NaiveDate,
    /// Roles the sender offers to fill; populated only for team posts
    #[serde(default)]
    pub roles: Vec<String>,
}

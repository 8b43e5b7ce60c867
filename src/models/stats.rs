//! Dashboard aggregates computed from current session state.
//!
//! These are recomputed from the entity store on every read; the contract
//! is correctness, not avoiding recomputation.

use serde::Serialize;

use crate::models::{Interest, InterestStatus, Post};

/// Interest counts partitioned by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InterestCounts {
    pub total: u32,
    pub pending: u32,
    pub accepted: u32,
    pub declined: u32,
}

impl InterestCounts {
    fn record(&mut self, status: InterestStatus) {
        self.total += 1;
        match status {
            InterestStatus::Pending => self.pending += 1,
            InterestStatus::Accepted => self.accepted += 1,
            InterestStatus::Declined => self.declined += 1,
        }
    }
}

/// Pre-joined dashboard numbers for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Posts the user owns
    pub post_count: u32,
    /// Open spots across the user's team posts
    pub open_spots: u32,
    /// Interests received on the user's posts
    pub received: InterestCounts,
    /// Interests the user has sent
    pub sent: InterestCounts,
}

impl DashboardSummary {
    /// Aggregate over the user's posts and both interest partitions.
    pub fn compute<'a>(
        my_posts: impl IntoIterator<Item = &'a Post>,
        received: impl IntoIterator<Item = &'a Interest>,
        sent: impl IntoIterator<Item = &'a Interest>,
    ) -> Self {
        let mut summary = Self::default();
        for post in my_posts {
            summary.post_count += 1;
            summary.open_spots += post.open_spots();
        }
        for interest in received {
            summary.received.record(interest.status);
        }
        for interest in sent {
            summary.sent.record(interest.status);
        }
        summary
    }
}

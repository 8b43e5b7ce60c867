// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Merged activity timeline for the dashboard.
//!
//! Three event kinds (post created, interest received, interest sent) are
//! merged into one sequence, newest first, and bucketed by age relative to
//! "today". Events are pre-joined with everything the dashboard renders so
//! no further lookups are needed.

use chrono::NaiveDate;

use crate::models::{Identity, InterestStatus};
use crate::services::dashboard;
use crate::store::EntityStore;

/// Event kind in the merged timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineKind {
    PostCreated,
    InterestReceived,
    InterestSent,
}

/// Age bucket relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineBucket {
    /// 0 through 7 days old
    ThisWeek,
    /// 8 through 14 days old
    LastWeek,
    /// Older than 14 days
    Earlier,
}

/// Display filter applied before bucketing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimelineFilter {
    #[default]
    All,
    PostsOnly,
    ReceivedOnly,
    SentOnly,
}

impl TimelineFilter {
    fn keeps(self, kind: TimelineKind) -> bool {
        match self {
            TimelineFilter::All => true,
            TimelineFilter::PostsOnly => kind == TimelineKind::PostCreated,
            TimelineFilter::ReceivedOnly => kind == TimelineKind::InterestReceived,
            TimelineFilter::SentOnly => kind == TimelineKind::InterestSent,
        }
    }
}

/// One timeline entry, pre-joined for display.
#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub kind: TimelineKind,
    pub date: NaiveDate,
    pub bucket: TimelineBucket,
    /// Related post title ("Unknown Post" when it cannot be resolved)
    pub post_title: String,
    /// Counterparty display name: the sender for received interests, the
    /// post owner otherwise
    pub counterparty: String,
    /// Interest status; absent for post-created events
    pub status: Option<InterestStatus>,
    /// Related post tech tags
    pub tags: Vec<String>,
}

/// Bucket an event date by age in days.
///
/// Day 7 still counts as this week, day 8 through 14 as last week. Future
/// dates clamp into this week.
fn bucket_for(date: NaiveDate, today: NaiveDate) -> TimelineBucket {
    let age_days = (today - date).num_days();
    if age_days <= 7 {
        TimelineBucket::ThisWeek
    } else if age_days <= 14 {
        TimelineBucket::LastWeek
    } else {
        TimelineBucket::Earlier
    }
}

/// Merge the user's posts and both interest partitions into one sequence,
/// newest first. Same-date events keep merge order: posts, then received
/// interests, then sent interests.
pub fn timeline(
    store: &EntityStore,
    identity: &Identity,
    filter: TimelineFilter,
    today: NaiveDate,
) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    if filter.keeps(TimelineKind::PostCreated) {
        for post in dashboard::my_posts(store, &identity.id) {
            events.push(TimelineEvent {
                kind: TimelineKind::PostCreated,
                date: post.created_at,
                bucket: bucket_for(post.created_at, today),
                post_title: post.title.clone(),
                counterparty: post.owner_name.clone(),
                status: None,
                tags: post.tech_tags.clone(),
            });
        }
    }

    if filter.keeps(TimelineKind::InterestReceived) {
        for interest in dashboard::received_interests(store, &identity.id) {
            let post = store.get_post(&interest.post_id);
            let sender = store.get_user(&interest.user_id);
            events.push(TimelineEvent {
                kind: TimelineKind::InterestReceived,
                date: interest.created_at,
                bucket: bucket_for(interest.created_at, today),
                post_title: post
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| "Unknown Post".to_string()),
                counterparty: sender
                    .map(|u| u.name.clone())
                    .unwrap_or_else(|| "Unknown User".to_string()),
                status: Some(interest.status),
                tags: post.map(|p| p.tech_tags.clone()).unwrap_or_default(),
            });
        }
    }

    if filter.keeps(TimelineKind::InterestSent) {
        for joined in dashboard::my_interests(store, &identity.id) {
            events.push(TimelineEvent {
                kind: TimelineKind::InterestSent,
                date: joined.interest.created_at,
                bucket: bucket_for(joined.interest.created_at, today),
                post_title: joined
                    .post
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| "Unknown Post".to_string()),
                counterparty: joined
                    .post
                    .map(|p| p.owner_name.clone())
                    .unwrap_or_else(|| "Unknown User".to_string()),
                status: Some(joined.interest.status),
                tags: joined.post.map(|p| p.tech_tags.clone()).unwrap_or_default(),
            });
        }
    }

    // Stable sort keeps merge order within a date.
    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}

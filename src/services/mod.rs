// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.
//!
//! The mutation services (`interest`, `post`, `profile`) are the only path
//! through which state changes; the derivation services (`feed`,
//! `dashboard`, `timeline`) are pure reads recomputed per call.

pub mod dashboard;
pub mod feed;
pub mod interest;
pub mod post;
pub mod profile;
pub mod timeline;

pub use dashboard::InterestWithPost;
pub use feed::PostFilters;
pub use interest::InterestDecision;
pub use post::PostDraft;
pub use profile::ProfileUpdate;
pub use timeline::{TimelineBucket, TimelineEvent, TimelineFilter, TimelineKind};

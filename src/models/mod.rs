// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod interest;
pub mod post;
pub mod stats;
pub mod user;

pub use interest::{Interest, InterestStatus};
pub use post::{Post, PostKind, PostType, TeamMember};
pub use stats::{DashboardSummary, InterestCounts};
pub use user::{Identity, User};

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Post model: a team recruiting members or an individual seeking a team.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A member entry displayed on team posts.
///
/// Carries no user id; profile renames match entries by display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Discriminant for the two post variants; used by drafts and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    TeamSeekingMembers,
    IndividualSeekingTeam,
}

/// Variant-specific post fields, tagged by `type`.
///
/// A sum type so a post can never carry both `roles_needed` and
/// `desired_roles` at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostKind {
    /// A team advertising open roles.
    TeamSeekingMembers {
        /// Open role labels
        roles_needed: Vec<String>,
        /// Current headcount
        team_size: u32,
        /// Target headcount
        team_capacity: u32,
        /// Existing members, if the post lists them
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_members: Option<Vec<TeamMember>>,
    },
    /// An individual advertising the roles they want to fill.
    IndividualSeekingTeam {
        /// Role labels the individual offers
        desired_roles: Vec<String>,
    },
}

/// A marketplace listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Stable post id (also the map key)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Owning user id
    pub owner_id: String,
    /// Owner display name, snapshotted at creation and refreshed by profile
    /// edits
    pub owner_name: String,
    /// Owner avatar, kept in sync the same way
    pub owner_avatar: String,
    /// Tech stack tags
    pub tech_tags: Vec<String>,
    /// Creation date; never updated
    pub created_at: NaiveDate,
    // Legacy display fields carried by older records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_explanation: Option<String>,
    #[serde(flatten)]
    pub kind: PostKind,
}

impl Post {
    /// Which variant this post is.
    pub fn post_type(&self) -> PostType {
        match self.kind {
            PostKind::TeamSeekingMembers { .. } => PostType::TeamSeekingMembers,
            PostKind::IndividualSeekingTeam { .. } => PostType::IndividualSeekingTeam,
        }
    }

    /// Whether this is a team post.
    pub fn is_team_post(&self) -> bool {
        matches!(self.kind, PostKind::TeamSeekingMembers { .. })
    }

    /// Role labels for either variant: `roles_needed` on team posts,
    /// `desired_roles` on individual posts.
    pub fn roles(&self) -> &[String] {
        match &self.kind {
            PostKind::TeamSeekingMembers { roles_needed, .. } => roles_needed,
            PostKind::IndividualSeekingTeam { desired_roles } => desired_roles,
        }
    }

    /// Open spots on a team post (capacity minus headcount, floored at
    /// zero). Individual posts have none.
    pub fn open_spots(&self) -> u32 {
        match &self.kind {
            PostKind::TeamSeekingMembers {
                team_size,
                team_capacity,
                ..
            } => team_capacity.saturating_sub(*team_size),
            PostKind::IndividualSeekingTeam { .. } => 0,
        }
    }

    /// Member entries listed on a team post.
    pub fn members(&self) -> Option<&[TeamMember]> {
        match &self.kind {
            PostKind::TeamSeekingMembers {
                current_members, ..
            } => current_members.as_deref(),
            PostKind::IndividualSeekingTeam { .. } => None,
        }
    }

    pub(crate) fn members_mut(&mut self) -> Option<&mut Vec<TeamMember>> {
        match &mut self.kind {
            PostKind::TeamSeekingMembers {
                current_members, ..
            } => current_members.as_mut(),
            PostKind::IndividualSeekingTeam { .. } => None,
        }
    }
}

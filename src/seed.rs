// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Seed data loading.
//!
//! Sessions start from a JSON fixture holding the users, posts, interests,
//! and the current user identity (see `data/seed.json`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{Identity, Interest, Post, User};

/// Session-start state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    /// Posts in feed order, most-recent-first
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Interests in insertion order
    #[serde(default)]
    pub interests: Vec<Interest>,
    pub current_user: Identity,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let json =
            fs::read_to_string(path.as_ref()).map_err(|e| SeedError::IoError(e.to_string()))?;
        Self::load_from_json(&json)
    }

    /// Load seed data from a JSON string.
    pub fn load_from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData =
            serde_json::from_str(json).map_err(|e| SeedError::ParseError(e.to_string()))?;

        tracing::info!(
            users = seed.users.len(),
            posts = seed.posts.len(),
            interests = seed.interests.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    /// Re-point the session identity at another seeded user.
    pub fn with_current_user(mut self, user_id: &str) -> Result<Self, SeedError> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| SeedError::UnknownUser(user_id.to_string()))?;
        self.current_user = Identity::from(user);
        Ok(self)
    }
}

/// Errors from seed loading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse seed JSON: {0}")]
    ParseError(String),

    #[error("No seeded user with id {0}")]
    UnknownUser(String),
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The in-memory entity store.
//!
//! Owns the canonical collections (users, posts, interests) and the session
//! id counter. Lookups by id go through id-keyed maps; posts additionally
//! keep a most-recent-first order and interests keep insertion order.
//!
//! Reads are public. Writes are crate-private: external callers can only
//! mutate through the validation services. No operation removes an entity.

use std::collections::HashMap;

use crate::models::{Interest, InterestStatus, Post, User};
use crate::seed::SeedData;

/// The session's canonical collections, keyed by id.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: HashMap<String, User>,
    posts: HashMap<String, Post>,
    /// Post ids, most-recent-first (the canonical feed order)
    post_order: Vec<String>,
    interests: HashMap<String, Interest>,
    /// Interest ids in insertion order
    interest_order: Vec<String>,
    /// Next minted id, seeded above the largest numeric id present
    next_id: u64,
}

impl EntityStore {
    /// Build a store from seed data, preserving the seed's feed order.
    pub fn from_seed(seed: SeedData) -> Self {
        let mut store = Self {
            next_id: 1,
            ..Self::default()
        };
        for user in seed.users {
            store.reserve_id(&user.id);
            store.users.insert(user.id.clone(), user);
        }
        for post in seed.posts {
            store.reserve_id(&post.id);
            store.post_order.push(post.id.clone());
            store.posts.insert(post.id.clone(), post);
        }
        for interest in seed.interests {
            store.reserve_id(&interest.id);
            store.interest_order.push(interest.id.clone());
            store.interests.insert(interest.id.clone(), interest);
        }
        tracing::debug!(
            users = store.users.len(),
            posts = store.posts.len(),
            interests = store.interests.len(),
            "Entity store seeded"
        );
        store
    }

    /// Keep the id counter above every numeric id already in use.
    fn reserve_id(&mut self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            if n >= self.next_id {
                self.next_id = n + 1;
            }
        }
    }

    /// Mint a fresh id, unique and stable for the session lifetime.
    pub(crate) fn mint_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }

    // ─── Users ───────────────────────────────────────────────────

    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Insert or fully replace a user record by id.
    pub(crate) fn put_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    // ─── Posts ───────────────────────────────────────────────────

    pub fn get_post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Posts in feed order (most-recent-first). Downstream consumers must
    /// not re-sort unless a view explicitly requires it.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.post_order.iter().filter_map(|id| self.posts.get(id))
    }

    /// Insert a new post at the head of the feed.
    pub(crate) fn append_post(&mut self, post: Post) {
        self.post_order.insert(0, post.id.clone());
        self.posts.insert(post.id.clone(), post);
    }

    /// Mutable pass over every post; used by the profile cascade.
    pub(crate) fn posts_mut(&mut self) -> impl Iterator<Item = &mut Post> {
        self.posts.values_mut()
    }

    // ─── Interests ───────────────────────────────────────────────

    pub fn get_interest(&self, id: &str) -> Option<&Interest> {
        self.interests.get(id)
    }

    /// Interests in insertion order.
    pub fn interests(&self) -> impl Iterator<Item = &Interest> {
        self.interest_order
            .iter()
            .filter_map(|id| self.interests.get(id))
    }

    /// Interests targeting one post, in insertion order.
    pub fn interests_for_post(&self, post_id: &str) -> Vec<&Interest> {
        self.interests().filter(|i| i.post_id == post_id).collect()
    }

    /// Interests sent by one user, in insertion order.
    pub fn interests_for_user(&self, user_id: &str) -> Vec<&Interest> {
        self.interests().filter(|i| i.user_id == user_id).collect()
    }

    /// Insert a new interest.
    pub(crate) fn append_interest(&mut self, interest: Interest) {
        self.interest_order.push(interest.id.clone());
        self.interests.insert(interest.id.clone(), interest);
    }

    /// In-place status write. Silent no-op when the id is unknown — there
    /// is no transaction log to reconcile against.
    pub(crate) fn set_interest_status(&mut self, id: &str, status: InterestStatus) -> bool {
        match self.interests.get_mut(id) {
            Some(interest) => {
                interest.status = status;
                true
            }
            None => false,
        }
    }
}

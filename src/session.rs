// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The session facade: the contract the presentation layer calls.
//!
//! A `Session` owns the entity store and the current user identity. All
//! reads are views recomputed from the store, and all writes go through
//! the validation services; the store itself is never exposed mutably.

use crate::error::{DraftError, InterestError};
use crate::models::{DashboardSummary, Identity, Interest, Post, User};
use crate::seed::SeedData;
use crate::services::{
    dashboard, feed, interest, post, profile, timeline, InterestDecision, InterestWithPost,
    PostDraft, PostFilters, ProfileUpdate, TimelineEvent, TimelineFilter,
};
use crate::store::EntityStore;
use crate::time_utils;

/// One user's session over the in-memory marketplace state.
#[derive(Debug)]
pub struct Session {
    identity: Identity,
    store: EntityStore,
}

impl Session {
    /// Start a session from seed data.
    pub fn new(seed: SeedData) -> Self {
        let identity = seed.current_user.clone();
        let store = EntityStore::from_seed(seed);
        tracing::info!(user_id = %identity.id, name = %identity.name, "Session started");
        Self { identity, store }
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// The session identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The current user's full profile. Synthesized at read time (not
    /// stored) when no extended profile exists yet.
    pub fn current_profile(&self) -> User {
        self.store
            .get_user(&self.identity.id)
            .cloned()
            .unwrap_or_else(|| User::synthesized(&self.identity))
    }

    /// Resolve any user by id.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.store.get_user(id)
    }

    /// Resolve a post by id.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.store.get_post(id)
    }

    /// The browse feed under the given filters, most-recent-first.
    pub fn browse(&self, filters: &PostFilters) -> Vec<&Post> {
        feed::filter_posts(&self.store, filters)
    }

    /// Posts owned by the current user.
    pub fn my_posts(&self) -> Vec<&Post> {
        dashboard::my_posts(&self.store, &self.identity.id)
    }

    /// Interests received on the current user's posts.
    pub fn received_interests(&self) -> Vec<&Interest> {
        dashboard::received_interests(&self.store, &self.identity.id)
    }

    /// Interests the current user has sent, joined with their posts.
    pub fn my_interests(&self) -> Vec<InterestWithPost<'_>> {
        dashboard::my_interests(&self.store, &self.identity.id)
    }

    /// The current user's existing interest in a post, if any.
    pub fn interest_in(&self, post_id: &str) -> Option<&Interest> {
        self.store
            .interests_for_user(&self.identity.id)
            .into_iter()
            .find(|interest| interest.post_id == post_id)
    }

    /// Up to three posts not owned by the current user, in feed order.
    pub fn suggested_posts(&self) -> Vec<&Post> {
        dashboard::suggested_posts(&self.store, &self.identity.id)
    }

    /// Dashboard aggregates for the current user.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        dashboard::summary(&self.store, &self.identity.id)
    }

    /// The merged activity timeline, bucketed relative to today.
    pub fn timeline(&self, filter: TimelineFilter) -> Vec<TimelineEvent> {
        timeline::timeline(&self.store, &self.identity, filter, time_utils::today())
    }

    // ─── Writes ──────────────────────────────────────────────────

    /// Express interest in a post as the current user.
    pub fn express_interest(
        &mut self,
        post_id: &str,
        message: &str,
        selected_roles: &[String],
    ) -> Result<Interest, InterestError> {
        interest::express_interest(
            &mut self.store,
            &self.identity,
            post_id,
            message,
            selected_roles,
            time_utils::today(),
        )
    }

    /// Accept or decline a received interest. Returns whether the status
    /// changed; unknown and already-settled ids are no-ops.
    pub fn respond_to_interest(&mut self, interest_id: &str, decision: InterestDecision) -> bool {
        interest::respond_to_interest(&mut self.store, interest_id, decision)
    }

    /// Publish a new post owned by the current user.
    pub fn create_post(&mut self, draft: &PostDraft) -> Result<Post, DraftError> {
        post::create_post(&mut self.store, &self.identity, draft, time_utils::today())
    }

    /// Apply a profile edit and cascade the refreshed display fields.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        profile::update_profile(&mut self.store, &mut self.identity, update)
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! HackFinder: team-matching marketplace state engine
//!
//! This crate owns the in-memory relational state behind the marketplace:
//! users publish posts (a team recruiting members, or an individual looking
//! for a team), other users express interest in those posts, and post owners
//! accept or decline. Reads are views recomputed from the entity store on
//! demand; every write goes through the validation services.

pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod session;
pub mod store;
pub mod time_utils;

pub use session::Session;

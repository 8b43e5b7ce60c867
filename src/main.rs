// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HackFinder demo driver
//!
//! Stands in for the presentation layer: loads the seed data, starts a
//! session, and renders the browse feed, dashboard summary, and activity
//! timeline through structured logs.

use anyhow::Context;
use hackfinder::config::Config;
use hackfinder::seed::SeedData;
use hackfinder::services::{PostFilters, TimelineFilter};
use hackfinder::Session;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(seed_path = %config.seed_path.display(), "Starting HackFinder session");

    let mut seed = SeedData::load_from_file(&config.seed_path).with_context(|| {
        format!(
            "Failed to load seed data from {}",
            config.seed_path.display()
        )
    })?;
    if let Some(user_id) = &config.current_user_id {
        seed = seed
            .with_current_user(user_id)
            .context("Invalid CURRENT_USER_ID")?;
    }

    let session = Session::new(seed);

    let feed = session.browse(&PostFilters::default());
    tracing::info!(posts = feed.len(), "Browse feed");
    for post in &feed {
        tracing::info!(
            post_id = %post.id,
            title = %post.title,
            owner = %post.owner_name,
            open_spots = post.open_spots(),
            tags = ?post.tech_tags,
            "Post"
        );
    }

    let summary = session.dashboard_summary();
    tracing::info!(
        posts = summary.post_count,
        open_spots = summary.open_spots,
        received_pending = summary.received.pending,
        received_total = summary.received.total,
        sent_total = summary.sent.total,
        "Dashboard summary"
    );

    for suggestion in session.suggested_posts() {
        tracing::info!(post_id = %suggestion.id, title = %suggestion.title, "Suggested post");
    }

    for event in session.timeline(TimelineFilter::All) {
        tracing::info!(
            kind = ?event.kind,
            bucket = ?event.bucket,
            date = %event.date,
            post = %event.post_title,
            counterparty = %event.counterparty,
            status = ?event.status,
            "Timeline event"
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hackfinder=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

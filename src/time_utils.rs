// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for session dates.

use chrono::{NaiveDate, Utc};

/// Today's date in UTC, at day granularity.
///
/// Creation dates carry no time-of-day component; ordering within a day is
/// insertion order.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

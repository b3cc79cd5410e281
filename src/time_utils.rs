// SPDX-License-Identifier: MIT
// Copyright 2026 The BioImageIT developers

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Resolve the `date` argument of metadata operations.
///
/// Callers pass either a literal date string or the marker `"now"`,
/// which resolves to the current UTC time.
pub fn resolve_date(date: &str) -> String {
    if date == "now" {
        format_utc_rfc3339(Utc::now())
    } else {
        date.to_string()
    }
}

//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp truncated to seconds
//! precision, rendered `YYYY-MM-DDTHH:MM:SSZ`.
//!
//! ## Security Invariant
//!
//! Checkpoint timestamps feed hash preimages. A local-offset rendering of
//! the same instant would produce a different preimage and therefore a
//! different chain hash, so non-UTC inputs are rejected at construction on
//! the strict path — there is no silent conversion that could introduce
//! ambiguity. Sub-second precision is truncated for the same reason: the
//! canonical rendering must be reproducible from stored data alone.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ArgusError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating.
/// - [`Timestamp::parse()`] — strict: rejects any non-`Z` offset.
/// - [`Timestamp::parse_lenient()`] — converts offsets to UTC, for
///   ingesting external data outside digest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 timestamp, rejecting non-UTC offsets.
    ///
    /// Only the `Z` suffix is accepted — even `+00:00`, which is
    /// semantically equivalent, is rejected so that canonical renderings
    /// are deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or does not
    /// end in `Z`.
    pub fn parse(s: &str) -> Result<Self, ArgusError> {
        if !s.ends_with('Z') {
            return Err(ArgusError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ArgusError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse an RFC 3339 timestamp, converting any offset to UTC.
    ///
    /// For digest paths prefer [`Timestamp::parse()`].
    pub fn parse_lenient(s: &str) -> Result<Self, ArgusError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ArgusError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO 8601 with Z suffix (e.g. `2026-08-01T12:00:00Z`).
    ///
    /// This is the exact string used in hash preimages.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision.
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

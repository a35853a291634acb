// SPDX-License-Identifier: Apache-2.0

//! Pseudo-version construction from commit metadata.
//!
//! Takes a commit hash and git's default commit date rendering (local time
//! plus UTC offset), normalizes the timestamp to UTC, and pairs the two
//! into a sortable [`PseudoVersion`] label.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use crate::types::{CommitHash, PseudoVersion};

/// Git's default commit date rendering: `Mon Jan 2 15:04:05 2023 -0700`.
///
/// A fixed format string keeps parsing deterministic across locales. `%e`
/// also accepts the double-space day padding some git configurations emit.
pub const GIT_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// A commit date string that could not be parsed.
#[derive(Debug, Clone)]
pub struct CommitDateError {
    input: String,
    source: chrono::ParseError,
}

impl fmt::Display for CommitDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid commit date '{}': {} (expected e.g. 'Mon Jan 2 15:04:05 2023 -0700')",
            self.input, self.source
        )
    }
}

impl std::error::Error for CommitDateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Parse a commit date in [`GIT_DATE_FORMAT`], keeping its UTC offset.
///
/// Surrounding whitespace is trimmed (git output often carries a trailing
/// newline). Anything else that deviates from the format is an error; there
/// are no fallback formats.
pub fn parse_commit_date(raw: &str) -> Result<DateTime<FixedOffset>, CommitDateError> {
    DateTime::parse_from_str(raw.trim(), GIT_DATE_FORMAT).map_err(|source| CommitDateError {
        input: raw.trim().to_string(),
        source,
    })
}

/// Build the pseudo-version for a commit.
///
/// Parses `raw_date`, normalizes it to UTC, and pairs it with `hash`.
/// Pure: identical inputs always yield an identical label.
pub fn pseudo_version(hash: CommitHash, raw_date: &str) -> Result<PseudoVersion, CommitDateError> {
    let date = parse_commit_date(raw_date)?;
    Ok(PseudoVersion::new(date.with_timezone(&Utc), hash))
}

// =============================================================================
// Tests
// =============================================================================

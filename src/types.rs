// SPDX-License-Identifier: Apache-2.0

//! Core types for pseudover — "Parse, Don't Validate" philosophy.
//!
//! `PseudoVersion` can only be built from an already-normalized UTC
//! timestamp, so rendering it can never fail and never produces partial
//! output. `CommitHash` is the deliberate exception: the hash is opaque
//! input and is carried through untouched.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};

// =============================================================================
// CommitHash — opaque commit identifier
// =============================================================================

/// A commit hash, held as an opaque string.
///
/// No validation is performed: anything the caller hands over is accepted,
/// and only the leading [`CommitHash::SHORT_LEN`] characters ever reach the
/// output. Hashes shorter than that are used whole, without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitHash(String);

impl CommitHash {
    /// Number of leading characters kept in a pseudo-version.
    pub const SHORT_LEN: usize = 12;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The abbreviated hash: the first [`Self::SHORT_LEN`] characters.
    ///
    /// Truncation counts characters, not bytes, so a non-ASCII input can
    /// never split a UTF-8 boundary.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(Self::SHORT_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Returns the full underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CommitHash {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for CommitHash {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl Deref for CommitHash {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PseudoVersion — rendered version label
// =============================================================================

/// A module pseudo-version: a UTC commit timestamp paired with a hash.
///
/// Renders as `v0.0.0-<YYYYMMDDHHMMSS>-<short hash>`, e.g.
/// `v0.0.0-20230102220405-a1b2c3d4e5f6`. The timestamp segment is always
/// exactly 14 digits (zero-padded, 24-hour clock), so labels sort by
/// commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoVersion {
    timestamp: DateTime<Utc>,
    hash: CommitHash,
}

impl PseudoVersion {
    pub fn new(timestamp: DateTime<Utc>, hash: CommitHash) -> Self {
        Self { timestamp, hash }
    }

    /// The commit timestamp, normalized to UTC.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The commit hash this version refers to.
    pub fn hash(&self) -> &CommitHash {
        &self.hash
    }
}

impl fmt::Display for PseudoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v0.0.0-{}-{}",
            self.timestamp.format("%Y%m%d%H%M%S"),
            self.hash.short()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

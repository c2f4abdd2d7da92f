/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BadgeError, GITHUB_URL};

pub const SHORT_HASH_LEN: usize = 7;

/// A commit identifier as returned by the API. Hex-validated on
/// construction; a full Git SHA is 40 characters, shorter identifiers
/// truncate instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitHash(String);

impl CommitHash {
    pub fn new(hash: String) -> Result<Self, BadgeError> {
        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BadgeError::InvalidHash(hash));
        }

        Ok(CommitHash(hash))
    }

    /// The abbreviated form used as visible link text.
    pub fn short(&self) -> &str {
        &self.0[..SHORT_HASH_LEN.min(self.0.len())]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A commit hash paired with the repository it belongs to, rendered as
/// the linked short-hash fragment next to the page's last-updated text.
#[derive(Debug, Clone)]
pub struct Badge {
    hash: CommitHash,
    repository: String,
}

impl Badge {
    pub fn new(hash: CommitHash, repository: String) -> Self {
        Badge { hash, repository }
    }

    pub fn hash(&self) -> &CommitHash {
        &self.hash
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn commit_url(&self) -> String {
        format!("{}/{}/commit/{}", GITHUB_URL, self.repository, self.hash)
    }

    /// The appended fragment: a leading space and the parenthesized
    /// link, exactly ` (<a href="...">abcdef0</a>)`.
    pub fn html(&self) -> String {
        format!(
            " (<a href=\"{}\">{}</a>)",
            self.commit_url(),
            self.hash.short()
        )
    }
}

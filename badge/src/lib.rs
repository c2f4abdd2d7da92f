/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod commits;
pub mod page;
pub mod render;

pub use render::{Badge, CommitHash};

use reqwest::StatusCode;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_BRANCH: &str = "master";
pub const TARGET_ELEMENT_ID: &str = "last_update";

const USER_AGENT: &str = concat!("commit-badge/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub api_url: String,
    pub repository: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },
    #[error("malformed commit response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid commit identifier {0:?}")]
    InvalidHash(String),
    #[error("no element with id {0:?} in page")]
    TargetNotFound(String),
    #[error("element with id {0:?} has no closing tag")]
    MalformedPage(String),
}

// GitHub rejects anonymous requests without a User-Agent.
fn get_client(config: &RequestConfig, endpoint: String) -> reqwest::RequestBuilder {
    reqwest::Client::new()
        .get(format!("{}/{}", config.api_url, endpoint))
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/vnd.github+json")
}

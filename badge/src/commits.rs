/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct CommitResponse {
    pub sha: String,
}

/// Fetch the head commit of the default branch for the configured
/// repository.
pub async fn get_branch_head(config: &RequestConfig) -> Result<CommitHash, BadgeError> {
    let endpoint = format!("repos/{}/commits/{}", config.repository, DEFAULT_BRANCH);
    let url = format!("{}/{}", config.api_url, endpoint);

    tracing::debug!(%url, "fetching branch head");

    let res = get_client(config, endpoint).send().await?;

    let status = res.status();
    if !status.is_success() {
        tracing::debug!(%status, %url, "commit request rejected");
        return Err(BadgeError::Status { status, url });
    }

    let bytes = res.bytes().await?;
    let commit: CommitResponse = serde_json::from_slice(&bytes)?;

    let hash = CommitHash::new(commit.sha)?;
    tracing::debug!(hash = %hash, "resolved branch head");

    Ok(hash)
}

/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use badge::{Badge, commits};
use std::process::exit;

pub async fn handle_show() {
    let config = get_request_config(load_config()).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    let repository = config.repository.clone();
    let hash = commits::get_branch_head(&config).await.unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    let badge = Badge::new(hash, repository);

    println!("===== Latest Commit =====");
    println!("Repository: {}", badge.repository());
    println!("Commit: {}", badge.hash());
    println!("Short: {}", badge.hash().short());
    println!("Link: {}", badge.commit_url());
}

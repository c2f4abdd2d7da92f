/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::*;
use badge::{Badge, TARGET_ELEMENT_ID, commits, page};
use std::fs;
use std::process::exit;

pub async fn handle_update(page_file: Option<String>) {
    // CLI arg > configured page
    let page_file = page_file.or_else(|| set_get_value(ConfigKey::Page, None, true));

    let page_file = match page_file {
        Some(page_file) => page_file,
        None => {
            eprintln!("No page given. Use `commit-badge config page <file>` to set one.");
            exit(1);
        }
    };

    let config = get_request_config(load_config()).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1);
    });

    // The page has to exist before anything goes over the wire.
    let html = match fs::read_to_string(&page_file) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Failed to read {}: {}", page_file, e);
            exit(1);
        }
    };

    let repository = config.repository.clone();
    let hash = commits::get_branch_head(&config)
        .await
        .map_err(|e| {
            eprintln!("{}", e);
            exit(1);
        })
        .unwrap();

    let badge = Badge::new(hash, repository);

    let updated = match page::append_to_element(&html, TARGET_ELEMENT_ID, &badge.html()) {
        Ok(updated) => updated,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    if let Err(e) = fs::write(&page_file, updated) {
        eprintln!("Failed to write {}: {}", page_file, e);
        exit(1);
    }

    println!("Appended badge for commit {} to {}.", badge.hash().short(), page_file);
}

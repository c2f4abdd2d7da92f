/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use badge::{GITHUB_API_URL, RequestConfig};

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Repository,
    Page,
    ApiUrl,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| format!("{}", key) == s.to_lowercase())
            .ok_or(())
    }
}

fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("commit-badge");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    let config_file = get_config_file();
    if config_file.exists() {
        let contents = fs::read_to_string(&config_file).expect("Failed to read configuration file");
        toml::from_str(&contents).expect("Failed to parse configuration file")
    } else {
        let mut config = HashMap::new();

        for config_key in ConfigKey::iter() {
            config.insert(config_key, None);
        }

        config
    }
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    let config_file = get_config_file();
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    let contents = toml::to_string_pretty(config).expect("Failed to serialize configuration");
    fs::write(config_file, contents).expect("Failed to write configuration file");
}

pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Option<String> {
    let mut config = load_config();

    if let Some(value) = value {
        config.insert(key.clone(), Some(value.clone()));
        save_config(&config);

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        Some(value)
    } else {
        let value = config.get(&key).cloned().flatten();

        if !quiet {
            match &value {
                Some(value) => println!("{}", value),
                None => println!("[unset]"),
            }
        }

        value
    }
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    match key.parse::<ConfigKey>() {
        Ok(key) => Ok(set_get_value(key, value, quiet)),
        Err(()) => {
            if !quiet {
                println!("Invalid key: {}", key);
                println!("Valid keys are:");
                for config_key in ConfigKey::iter() {
                    println!("{}", config_key);
                }
            }

            Err("Invalid key".to_string())
        }
    }
}

pub fn get_request_config(
    config: HashMap<ConfigKey, Option<String>>,
) -> Result<RequestConfig, String> {
    let repository =
        if let Some(repository) = config.get(&ConfigKey::Repository).cloned().flatten() {
            repository
        } else {
            return Err(
                "Repository not set. Use `commit-badge config repository <owner>/<repo>` to set it."
                    .to_string(),
            );
        };

    let api_url = config
        .get(&ConfigKey::ApiUrl)
        .cloned()
        .flatten()
        .unwrap_or_else(|| GITHUB_API_URL.to_string());

    Ok(RequestConfig {
        api_url,
        repository,
    })
}

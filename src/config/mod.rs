// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, loaded and saved
//! with `confy` under the `reorderui` application name. The file holds the
//! playlist server address, the playlist to open on start-up and the logging
//! settings. Missing fields take their defaults, so an old or hand-written
//! file keeps working.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "reorderui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Base URL of the playlist server.
    pub server_url: String,
    /// Playlist opened at start-up, the last one opened if not set by hand.
    pub playlist: Option<String>,
    /// Directory for log files, logging is off when unset.
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server_url: "http://127.0.0.1:8080".to_string(),
            playlist: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "server_url": "http://music.local" }"#).unwrap();

        assert_eq!(cfg.server_url, "http://music.local");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.playlist, None);
        assert_eq!(cfg.version, 1);
    }
}

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
//! This module manages the application configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::drop::{
    DropAction,
    subtitle::{DEFAULT_SUBTITLE_EXTENSIONS, ExtensionClassifier},
};

const CONFIG_NAME: &str = "mpvdrop";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub default_action: DropAction,
    pub subtitle_extensions: Vec<String>,
    pub audio_only: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            default_action: DropAction::default(),
            subtitle_extensions: DEFAULT_SUBTITLE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            audio_only: false,
        }
    }
}

impl AppConfig {
    /// Builds the subtitle classifier for the configured extensions.
    pub fn classifier(&self) -> ExtensionClassifier {
        ExtensionClassifier::new(&self.subtitle_extensions)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}

pub fn save_config_to(path: impl AsRef<Path>, cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store_path(path, cfg)
}

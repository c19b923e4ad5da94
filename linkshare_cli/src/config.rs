// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use url::Url;

use crate::context::CliContext;

#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub(crate) struct Alias {
    pub url: Url,
    pub token: String,
}

#[derive(Deserialize, Serialize, PartialEq, Debug, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub aliases: BTreeMap<String, Alias>,
}

pub(crate) struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    pub fn load(path: &str) -> anyhow::Result<ConfigFile> {
        let config = match std::fs::read_to_string(path) {
            Ok(config) => toml::from_str(&config)
                .with_context(|| format!("Failed to parse config file {:?}", path))?,
            Err(_) => Config::default(),
        };

        Ok(ConfigFile {
            path: PathBuf::from(path),
            config,
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config = toml::to_string(&self.config)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        std::fs::write(&self.path, config)
            .with_context(|| format!("Failed to write config file {:?}", &self.path))?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mut_config(&mut self) -> &mut Config {
        &mut self.config
    }
}

/// Find an alias by name in the config file of the context.
pub(crate) fn find_alias(ctx: &CliContext, name: &str) -> anyhow::Result<Alias> {
    let config_file = ConfigFile::load(ctx.config_path())?;
    config_file
        .config()
        .aliases
        .get(name)
        .cloned()
        .ok_or_else(|| anyhow!("Alias '{}' does not exist", name))
}

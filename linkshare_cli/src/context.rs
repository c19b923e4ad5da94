// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::io::std::{Output, StdOutput};
use dirs::home_dir;
use std::env::current_dir;
use std::path::PathBuf;
use std::time::Duration;

pub(crate) struct CliContext {
    config_path: String,
    output: Box<dyn Output>,
    ignore_ssl: bool,
    timeout: Duration,
}

impl CliContext {
    pub(crate) fn config_path(&self) -> &str {
        &self.config_path
    }

    pub(crate) fn stdout(&self) -> &dyn Output {
        &*self.output
    }

    pub(crate) fn ignore_ssl(&self) -> bool {
        self.ignore_ssl
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }
}

pub(crate) struct ContextBuilder {
    config: CliContext,
}

impl ContextBuilder {
    pub(crate) fn new() -> Self {
        let root = home_dir()
            .or_else(|| current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let config = CliContext {
            config_path: root
                .join(".linkshare-cli/config.toml")
                .to_string_lossy()
                .to_string(),
            output: Box::new(StdOutput::new()),
            ignore_ssl: false,
            timeout: Duration::from_secs(30),
        };
        ContextBuilder { config }
    }

    #[allow(dead_code)]
    pub(crate) fn config_path(mut self, config_path: &str) -> Self {
        self.config.config_path = config_path.to_string();
        self
    }

    #[allow(dead_code)]
    pub(crate) fn output(mut self, output: Box<dyn Output>) -> Self {
        self.config.output = output;
        self
    }

    pub(crate) fn ignore_ssl(mut self, ignore_ssl: bool) -> Self {
        self.config.ignore_ssl = ignore_ssl;
        self
    }

    pub(crate) fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub(crate) fn build(self) -> CliContext {
        self.config
    }
}

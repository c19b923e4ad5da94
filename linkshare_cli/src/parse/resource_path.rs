// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::builder::TypedValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, Command, Error};
use std::ffi::OsStr;

/// Parses `ALIAS/RESOURCE` or `URL/RESOURCE` into the alias (or URL) and the resource.
#[derive(Clone)]
pub(crate) struct ResourcePathParser {}

impl TypedValueParser for ResourcePathParser {
    type Value = (String, String);

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, Error> {
        let value = value.to_string_lossy().to_string();
        match value.rsplit_once('/') {
            Some((alias_or_url, resource))
                if !alias_or_url.is_empty() && !resource.trim().is_empty() =>
            {
                Ok((alias_or_url.to_string(), resource.to_string()))
            }
            _ => {
                let mut err = Error::new(ErrorKind::ValueValidation).with_cmd(cmd);
                err.insert(
                    ContextKind::InvalidArg,
                    ContextValue::String(arg.map(|arg| arg.to_string()).unwrap_or_default()),
                );
                err.insert(ContextKind::InvalidValue, ContextValue::String(value));
                Err(err)
            }
        }
    }
}

impl ResourcePathParser {
    pub fn new() -> Self {
        Self {}
    }
}

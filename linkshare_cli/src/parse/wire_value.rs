// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::builder::TypedValueParser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, Command, Error};
use std::ffi::OsStr;
use std::marker::PhantomData;
use std::str::FromStr;

/// Parses an argument with the `FromStr` implementation of the value,
/// e.g. link types, accessibility levels or dates.
#[derive(Clone)]
pub(crate) struct WireValueParser<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> TypedValueParser for WireValueParser<T>
where
    T: FromStr + Clone + Send + Sync + 'static,
{
    type Value = T;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, Error> {
        let value = value.to_string_lossy();
        value.parse::<T>().map_err(|_| {
            let mut err = Error::new(ErrorKind::ValueValidation).with_cmd(cmd);
            err.insert(
                ContextKind::InvalidArg,
                ContextValue::String(arg.map(|arg| arg.to_string()).unwrap_or_default()),
            );
            err.insert(
                ContextKind::InvalidValue,
                ContextValue::String(value.to_string()),
            );
            err
        })
    }
}

impl<T> WireValueParser<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use linkshare_rs::{LinkAccessibility, LinkType};
    use rstest::rstest;

    fn cmd() -> Command {
        Command::new("test")
            .arg(
                Arg::new("type")
                    .long("type")
                    .value_parser(WireValueParser::<LinkType>::new()),
            )
            .arg(
                Arg::new("accessibility")
                    .long("accessibility")
                    .value_parser(WireValueParser::<LinkAccessibility>::new()),
            )
            .arg(
                Arg::new("date")
                    .long("date")
                    .value_parser(WireValueParser::<NaiveDate>::new()),
            )
    }

    #[rstest]
    fn test_parse() {
        let matches = cmd().get_matches_from(vec![
            "test",
            "--type",
            "FILE",
            "--accessibility",
            "recipients",
            "--date",
            "2025-06-30",
        ]);
        assert_eq!(
            matches.get_one::<LinkType>("type").unwrap(),
            &LinkType::File
        );
        assert_eq!(
            matches
                .get_one::<LinkAccessibility>("accessibility")
                .unwrap(),
            &LinkAccessibility::Recipients
        );
        assert_eq!(
            matches.get_one::<NaiveDate>("date").unwrap(),
            &NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
    }

    #[rstest]
    #[case("--type", "link")]
    #[case("--accessibility", "everyone")]
    #[case("--date", "30.06.2025")]
    fn test_parse_invalid(#[case] arg: &str, #[case] value: &str) {
        let err = cmd()
            .try_get_matches_from(vec!["test", arg, value])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}

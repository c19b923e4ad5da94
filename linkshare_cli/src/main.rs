// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod cmd;
mod config;
mod context;
mod io;
mod parse;

use crate::cmd::alias::{alias_cmd, alias_handler};
use crate::cmd::link::{link_cmd, link_handler};
use crate::context::ContextBuilder;

use clap::ArgAction::SetTrue;
use clap::{crate_description, crate_name, crate_version, value_parser, Arg, Command};
use linkshare_base::logger::Logger;
use std::time::Duration;

fn cli() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .value_name("LEVEL")
                .default_value("WARN")
                .global(true)
                .help("Log level, e.g. DEBUG or linkshare_rs=DEBUG,WARN"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .short('T')
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .default_value("30")
                .global(true)
                .help("Timeout for requests to the provider"),
        )
        .arg(
            Arg::new("ignore-ssl")
                .long("ignore-ssl")
                .short('i')
                .action(SetTrue)
                .global(true)
                .help("Ignore SSL certificate verification"),
        )
        .subcommand(alias_cmd())
        .subcommand(link_cmd())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    Logger::init(matches.get_one::<String>("log-level").unwrap());

    let ctx = ContextBuilder::new()
        .ignore_ssl(matches.get_flag("ignore-ssl"))
        .timeout(Duration::from_secs(
            *matches.get_one::<u64>("timeout").unwrap(),
        ))
        .build();

    match matches.subcommand() {
        Some(("alias", args)) => alias_handler(&ctx, args.subcommand()),
        Some(("link", args)) => link_handler(&ctx, args.subcommand()).await,
        _ => Ok(()),
    }?;

    Ok(())
}

// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::find_alias;
use crate::context::CliContext;
use crate::io::std::output;
use clap::ArgAction::SetTrue;
use clap::{arg, Arg, ArgMatches, Command};

pub(super) fn show_alias(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let name = args.get_one::<String>("NAME").unwrap();
    let alias = find_alias(ctx, name)?;

    output!(ctx, "URL: {}", alias.url);
    if args.get_flag("token") {
        output!(ctx, "Token: {}", alias.token);
    } else {
        output!(ctx, "Token: {}", "*".repeat(alias.token.len()));
    }
    Ok(())
}

pub(super) fn show_alias_cmd() -> Command {
    Command::new("show")
        .about("Show alias details")
        .arg(arg!(<NAME> "The name of the alias to show").required(true))
        .arg(
            Arg::new("token")
                .long("token")
                .short('t')
                .action(SetTrue)
                .help("Show the API token")
                .required(false),
        )
}

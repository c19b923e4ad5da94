// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod add;
mod ls;
mod rm;
mod show;

use crate::context::CliContext;
use clap::{ArgMatches, Command};

pub(crate) fn alias_cmd() -> Command {
    Command::new("alias")
        .about("Manage aliases for different providers")
        .arg_required_else_help(true)
        .subcommand(add::add_alias_cmd())
        .subcommand(ls::ls_aliases_cmd())
        .subcommand(show::show_alias_cmd())
        .subcommand(rm::rm_alias_cmd())
}

pub(crate) fn alias_handler(
    ctx: &CliContext,
    matches: Option<(&str, &ArgMatches)>,
) -> anyhow::Result<()> {
    match matches {
        Some(("add", args)) => add::add_alias(ctx, args)?,
        Some(("ls", _)) => ls::list_aliases(ctx)?,
        Some(("show", args)) => show::show_alias(ctx, args)?,
        Some(("rm", args)) => rm::remove_alias(ctx, args)?,
        _ => (),
    }

    Ok(())
}

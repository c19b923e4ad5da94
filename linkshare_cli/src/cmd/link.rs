// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.
mod create;
mod ls;
mod rm;
mod show;

use crate::context::CliContext;
use clap::{ArgMatches, Command};

pub(crate) fn link_cmd() -> Command {
    Command::new("link")
        .about("Manage shared links")
        .arg_required_else_help(true)
        .subcommand(create::create_link_cmd())
        .subcommand(ls::ls_links_cmd())
        .subcommand(show::show_link_cmd())
        .subcommand(rm::rm_link_cmd())
}

pub(crate) async fn link_handler(
    ctx: &CliContext,
    matches: Option<(&str, &ArgMatches)>,
) -> anyhow::Result<()> {
    match matches {
        Some(("create", args)) => create::create_link(ctx, args).await?,
        Some(("ls", args)) => ls::ls_links(ctx, args).await?,
        Some(("show", args)) => show::show_link(ctx, args).await?,
        Some(("rm", args)) => rm::rm_link(ctx, args).await?,
        _ => (),
    }

    Ok(())
}

// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{find_alias, ConfigFile};
use crate::context::CliContext;
use crate::io::std::output;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Forget the given provider aliases. Nothing is removed unless every name is known.
pub(super) fn remove_alias(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let names: Vec<&String> = args
        .get_many::<String>("NAME")
        .map(|names| names.collect())
        .unwrap_or_default();

    let mut forgotten = Vec::with_capacity(names.len());
    for name in names {
        let alias = find_alias(ctx, name)?;
        forgotten.push((name, alias.url));
    }

    let mut config_file = ConfigFile::load(ctx.config_path())?;
    for (name, _) in &forgotten {
        config_file.mut_config().aliases.remove(name.as_str());
    }
    config_file.save()?;

    for (name, url) in forgotten {
        output!(ctx, "Provider alias '{}' ({}) forgotten", name, url);
    }
    Ok(())
}

pub(super) fn rm_alias_cmd() -> Command {
    Command::new("rm")
        .about("Forget one or more provider aliases")
        .arg(
            Arg::new("NAME")
                .help("Alias names to forget")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
}

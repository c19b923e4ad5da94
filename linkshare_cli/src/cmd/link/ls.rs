// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cmd::ALIAS_OR_URL_HELP;
use crate::context::CliContext;
use crate::io::client::build_client;
use crate::io::std::output;
use crate::parse::WireValueParser;
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgMatches, Command};
use linkshare_rs::{LinkAccessibility, LinkFilter, LinkType};

pub(super) fn ls_links_cmd() -> Command {
    Command::new("ls")
        .about("List links")
        .arg(
            Arg::new("ALIAS_OR_URL")
                .help(ALIAS_OR_URL_HELP)
                .required(true),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .short('p')
                .value_name("PATH")
                .help("Only links for this file or folder")
                .required(false),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .short('u')
                .value_name("USERNAME")
                .help("Only links created by this user")
                .required(false),
        )
        .arg(
            Arg::new("created-before")
                .long("created-before")
                .short('b')
                .value_name("YYYY-MM-DD")
                .value_parser(WireValueParser::<NaiveDate>::new())
                .help("Only links created before this date")
                .required(false),
        )
        .arg(
            Arg::new("created-after")
                .long("created-after")
                .short('a')
                .value_name("YYYY-MM-DD")
                .value_parser(WireValueParser::<NaiveDate>::new())
                .help("Only links created after this date")
                .required(false),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .value_name("TYPE")
                .value_parser(WireValueParser::<LinkType>::new())
                .help("Only links of this type. Must be file or folder")
                .required(false),
        )
        .arg(
            Arg::new("accessibility")
                .long("accessibility")
                .short('A')
                .value_name("ACCESSIBILITY")
                .value_parser(WireValueParser::<LinkAccessibility>::new())
                .help("Only links with this accessibility. Must be anyone, domain, password or recipients")
                .required(false),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .value_name("NUMBER")
                .value_parser(value_parser!(u64))
                .help("Skip this number of links")
                .required(false),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('c')
                .value_name("NUMBER")
                .value_parser(value_parser!(u64))
                .help("Max. number of links to list")
                .required(false),
        )
}

pub(super) async fn ls_links(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let alias_or_url = args.get_one::<String>("ALIAS_OR_URL").unwrap();
    let client = build_client(ctx, alias_or_url)?;

    let links = client.list_links(&parse_filter(args)).await?;
    for id in &links.ids {
        output!(ctx, "{}", id);
    }
    output!(ctx, "Total: {}", links.total_count);
    Ok(())
}

fn parse_filter(args: &ArgMatches) -> LinkFilter {
    LinkFilter {
        path: args.get_one::<String>("path").cloned(),
        username: args.get_one::<String>("username").cloned(),
        created_before: args.get_one::<NaiveDate>("created-before").copied(),
        created_after: args.get_one::<NaiveDate>("created-after").copied(),
        link_type: args.get_one::<LinkType>("type").copied(),
        accessibility: args.get_one::<LinkAccessibility>("accessibility").copied(),
        offset: args.get_one::<u64>("offset").copied(),
        count: args.get_one::<u64>("count").copied(),
    }
}

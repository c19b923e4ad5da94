// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cmd::LINK_PATH_HELP;
use crate::context::CliContext;
use crate::io::client::build_client;
use crate::io::std::output;
use crate::parse::ResourcePathParser;

use clap::{Arg, ArgMatches, Command};

pub(super) fn show_link_cmd() -> Command {
    Command::new("show")
        .about("Show link details")
        .arg(
            Arg::new("LINK_PATH")
                .help(LINK_PATH_HELP)
                .value_parser(ResourcePathParser::new())
                .required(true),
        )
        .arg_required_else_help(true)
}

pub(super) async fn show_link(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let (alias_or_url, link_id) = args.get_one::<(String, String)>("LINK_PATH").unwrap();

    let client = build_client(ctx, alias_or_url)?;
    let link = client.get_link_details(link_id).await?;

    output!(ctx, "Link: {}", link.id);
    output!(ctx, "URL: {}", link.url);
    output!(ctx, "Path: {}", link.path);
    output!(ctx, "Type: {}", link.link_type);
    output!(ctx, "Accessibility: {}", link.accessibility);
    output!(ctx, "Protection: {}", link.protection);
    output!(ctx, "Notify: {}", link.notify);
    output!(ctx, "Link to current: {}", link.link_to_current);
    output!(ctx, "Created: {}", or_dash(link.creation_date));
    output!(ctx, "Created by: {}", link.created_by);
    output!(ctx, "Expires: {}", or_dash(link.expiry_date));
    output!(ctx, "Last accessed: {}", or_dash(link.last_accessed));
    output!(ctx, "Recipients: {:?}", link.recipients);
    Ok(())
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "---".to_string())
}

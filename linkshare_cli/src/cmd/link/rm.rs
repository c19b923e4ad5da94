// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::cmd::LINK_PATH_HELP;
use crate::context::CliContext;
use crate::io::client::build_client;
use crate::io::std::output;
use crate::parse::ResourcePathParser;
use clap::ArgAction::SetTrue;
use clap::{Arg, ArgMatches, Command};

pub(super) fn rm_link_cmd() -> Command {
    Command::new("rm")
        .about("Delete a link")
        .arg(
            Arg::new("LINK_PATH")
                .help(LINK_PATH_HELP)
                .value_parser(ResourcePathParser::new())
                .required(true),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .action(SetTrue)
                .help("Do not ask for confirmation")
                .required(false),
        )
        .arg_required_else_help(true)
}

pub(super) async fn rm_link(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let (alias_or_url, link_id) = args.get_one::<(String, String)>("LINK_PATH").unwrap();

    let confirm = if !args.get_flag("yes") {
        dialoguer::Confirm::new()
            .default(false)
            .with_prompt(format!(
                "Are you sure you want to delete the link '{}'?",
                link_id
            ))
            .interact()?
    } else {
        true
    };

    if confirm {
        let client = build_client(ctx, alias_or_url)?;
        client.delete_link(link_id).await?;
        output!(ctx, "Link '{}' deleted", link_id);
    } else {
        output!(ctx, "Link '{}' not deleted", link_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::{context, local_alias, server};
    use mockito::ServerGuard;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_rm_link(context: CliContext, #[future] server: ServerGuard) {
        let mut server = server.await;
        local_alias(&context, &server);
        let mock = server
            .mock("DELETE", "/pubapi/v1/links/abc123")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .create_async()
            .await;

        let args = rm_link_cmd().get_matches_from(vec!["rm", "local/abc123", "--yes"]);
        rm_link(&context, &args).await.unwrap();

        mock.assert_async().await;
        assert_eq!(context.stdout().history(), vec!["Link 'abc123' deleted"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_rm_link_not_found(context: CliContext, #[future] server: ServerGuard) {
        let mut server = server.await;
        local_alias(&context, &server);
        server
            .mock("DELETE", "/pubapi/v1/links/abc123")
            .with_status(404)
            .with_body(r#"{"errorMessage":"Link does not exist"}"#)
            .create_async()
            .await;

        let args = rm_link_cmd().get_matches_from(vec!["rm", "local/abc123", "--yes"]);
        assert_eq!(
            rm_link(&context, &args).await.unwrap_err().to_string(),
            "[NotFound] Link does not exist"
        );
        assert!(context.stdout().history().is_empty());
    }

    #[rstest]
    fn test_rm_link_bad_path() {
        let args = rm_link_cmd().try_get_matches_from(vec!["rm", "local/", "--yes"]);
        assert_eq!(
            args.unwrap_err().to_string(),
            "error: invalid value 'local/' for '<LINK_PATH>'\n\nFor more information, try '--help'.\n"
        );
    }
}

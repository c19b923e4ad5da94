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
use clap::builder::RangedU64ValueParser;
use clap::ArgAction::{Append, SetTrue};
use clap::{Arg, ArgMatches, Command};
use linkshare_rs::{LinkAccessibility, LinkType, NewLink};

pub(super) fn create_link_cmd() -> Command {
    Command::new("create")
        .about("Create a link to a file or folder")
        .arg(
            Arg::new("ALIAS_OR_URL")
                .help(ALIAS_OR_URL_HELP)
                .required(true),
        )
        .arg(
            Arg::new("PATH")
                .help("Path of the file or folder to share, e.g. /Shared/report.pdf")
                .required(true),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .value_name("TYPE")
                .value_parser(WireValueParser::<LinkType>::new())
                .help("Link type. Must be file or folder")
                .required(true),
        )
        .arg(
            Arg::new("accessibility")
                .long("accessibility")
                .short('A')
                .value_name("ACCESSIBILITY")
                .value_parser(WireValueParser::<LinkAccessibility>::new())
                .help("Who may use the link. Must be anyone, domain, password or recipients")
                .required(true),
        )
        .arg(
            Arg::new("send-email")
                .long("send-email")
                .short('s')
                .action(SetTrue)
                .help("Send the link to the recipients by email")
                .required(false),
        )
        .arg(
            Arg::new("recipient")
                .long("recipient")
                .short('r')
                .value_name("EMAIL")
                .action(Append)
                .help("Recipient of the link. Can be used multiple times")
                .required(false),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .short('m')
                .value_name("TEXT")
                .help("Message for the email")
                .required(false),
        )
        .arg(
            Arg::new("copy-me")
                .long("copy-me")
                .action(SetTrue)
                .help("Send a copy of the email to yourself")
                .required(false),
        )
        .arg(
            Arg::new("notify")
                .long("notify")
                .short('n')
                .action(SetTrue)
                .help("Notify me when the link is used")
                .required(false),
        )
        .arg(
            Arg::new("link-to-current")
                .long("link-to-current")
                .action(SetTrue)
                .help("File links only: always point to the current version of the file")
                .required(false),
        )
        .arg(
            Arg::new("expiry-date")
                .long("expiry-date")
                .short('e')
                .value_name("YYYY-MM-DD")
                .value_parser(WireValueParser::<NaiveDate>::new())
                .help("The link expires at the end of this date")
                .required(false),
        )
        .arg(
            Arg::new("expiry-clicks")
                .long("expiry-clicks")
                .short('c')
                .value_name("NUMBER")
                .value_parser(RangedU64ValueParser::<u32>::new().range(1..))
                .help("The link expires after this number of clicks")
                .required(false),
        )
}

pub(super) async fn create_link(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let alias_or_url = args.get_one::<String>("ALIAS_OR_URL").unwrap();
    let link = parse_new_link(args);

    let client = build_client(ctx, alias_or_url)?;
    let created = client.create_link(&link).await?;

    output!(ctx, "Link to '{}' created", created.path);
    for link in &created.links {
        if link.recipients.is_empty() {
            output!(ctx, "{}", link.url);
        } else {
            output!(ctx, "{} {:?}", link.url, link.recipients);
        }
    }
    Ok(())
}

fn parse_new_link(args: &ArgMatches) -> NewLink {
    let mut link = NewLink::new(
        args.get_one::<String>("PATH").unwrap(),
        *args.get_one::<LinkType>("type").unwrap(),
        *args.get_one::<LinkAccessibility>("accessibility").unwrap(),
    );

    // flags are only sent when given
    if args.get_flag("send-email") {
        link = link.send_email(true);
    }
    if let Some(recipients) = args.get_many::<String>("recipient") {
        link = link.recipients(recipients.map(|s| s.as_str()));
    }
    if let Some(message) = args.get_one::<String>("message") {
        link = link.message(message);
    }
    if args.get_flag("copy-me") {
        link = link.copy_me(true);
    }
    if args.get_flag("notify") {
        link = link.notify(true);
    }
    if args.get_flag("link-to-current") {
        link = link.link_to_current(true);
    }
    if let Some(date) = args.get_one::<NaiveDate>("expiry-date") {
        link = link.expiry_date(*date);
    }
    if let Some(clicks) = args.get_one::<u32>("expiry-clicks") {
        link = link.expiry_clicks(*clicks);
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::{context, local_alias, server};
    use mockito::ServerGuard;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_create_link(context: CliContext, #[future] server: ServerGuard) {
        let mut server = server.await;
        local_alias(&context, &server);
        let mock = server
            .mock("POST", "/pubapi/v1/links")
            .match_header("authorization", "Bearer test-token")
            .match_body(
                r#"{"path":"/docs/q1","type":"file","accessibility":"password","expiry_clicks":"5"}"#,
            )
            .with_status(200)
            .with_body(
                r#"{"links":[{"id":"q1","url":"https://acme.example.com/fl/q1","recipients":[]}],"path":"/docs/q1","type":"file","accessibility":"password","expiry_clicks":"5"}"#,
            )
            .create_async()
            .await;

        let args = create_link_cmd().get_matches_from(vec![
            "create",
            "local",
            "docs/q1",
            "--type",
            "file",
            "--accessibility",
            "password",
            "--expiry-clicks",
            "5",
        ]);
        create_link(&context, &args).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            context.stdout().history(),
            vec![
                "Link to '/docs/q1' created",
                "https://acme.example.com/fl/q1"
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_link_for_recipients(context: CliContext, #[future] server: ServerGuard) {
        let mut server = server.await;
        local_alias(&context, &server);
        let mock = server
            .mock("POST", "/pubapi/v1/links")
            .match_body(
                r#"{"path":"/Shared","type":"folder","accessibility":"recipients","send_email":"true","recipients":["bob@example.com","eve@example.com"],"message":"Q1 numbers","notify":"true","expiry_date":"2025-06-30"}"#,
            )
            .with_status(200)
            .with_body(
                r#"{
                    "links": [
                        {"id": "b1", "url": "https://acme.example.com/fl/b1", "recipients": ["bob@example.com"]},
                        {"id": "e1", "url": "https://acme.example.com/fl/e1", "recipients": ["eve@example.com"]}
                    ],
                    "path": "/Shared",
                    "type": "folder",
                    "accessibility": "recipients"
                }"#,
            )
            .create_async()
            .await;

        let args = create_link_cmd().get_matches_from(vec![
            "create",
            "local",
            "/Shared",
            "-t",
            "folder",
            "-A",
            "recipients",
            "--send-email",
            "-r",
            "bob@example.com",
            "-r",
            "eve@example.com",
            "--message",
            "Q1 numbers",
            "--notify",
            "--expiry-date",
            "2025-06-30",
        ]);
        create_link(&context, &args).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            context.stdout().history(),
            vec![
                "Link to '/Shared' created",
                "https://acme.example.com/fl/b1 [\"bob@example.com\"]",
                "https://acme.example.com/fl/e1 [\"eve@example.com\"]",
            ]
        );
    }

    #[rstest]
    #[case(vec!["create", "local", "/Shared", "--accessibility", "anyone"])]
    #[case(vec!["create", "local", "/Shared", "--type", "folder"])]
    #[case(vec!["create", "local", "/Shared", "-t", "folder", "-A", "anyone", "--expiry-clicks", "0"])]
    fn test_create_link_bad_args(#[case] args: Vec<&str>) {
        assert!(create_link_cmd().try_get_matches_from(args).is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_link_blank_path(context: CliContext) {
        let args = create_link_cmd().get_matches_from(vec![
            "create", "default", "  ", "-t", "file", "-A", "anyone",
        ]);
        let err = create_link(&context, &args).await.unwrap_err();
        assert!(err.to_string().starts_with("[InvalidArgument]"));
    }
}

// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::find_alias;
use crate::context::CliContext;
use crate::io::std::warning;
use anyhow::anyhow;
use linkshare_rs::LinkShareClient;
use log::debug;
use url::Url;

/// Build a client from an alias or URL
pub(crate) fn build_client(
    ctx: &CliContext,
    alias_or_url: &str,
) -> anyhow::Result<LinkShareClient> {
    let (url, token) = parse_url_and_token(ctx, alias_or_url)?;

    if url.scheme() == "http" && !token.is_empty() {
        warning!(
            ctx,
            "API token is sent to {} without encryption",
            url.as_str()
        );
    }

    debug!("Using {} for '{}'", url, alias_or_url);
    let client = LinkShareClient::builder()
        .url(url.as_str())
        .api_token(token.as_str())
        .verify_ssl(!ctx.ignore_ssl())
        .timeout(ctx.timeout())
        .try_build()?;
    Ok(client)
}

/// Parse an alias or URL into a URL and a token
///
/// If the input is an alias, the URL and token are retrieved from the alias.
/// If the input is a URL, the token is extracted from the username part of the URL.
pub(crate) fn parse_url_and_token(
    ctx: &CliContext,
    alias_or_url: &str,
) -> anyhow::Result<(Url, String)> {
    let (url, token) = match find_alias(ctx, alias_or_url) {
        Ok(alias) => (alias.url, alias.token),
        Err(_) => match Url::parse(alias_or_url) {
            Ok(mut url) if url.has_host() => {
                let token = url.username().to_string();
                url.set_username("")
                    .map_err(|_| anyhow!("'{}' can't have a token", alias_or_url))?;
                (url, token)
            }
            _ => return Err(anyhow!("'{}' isn't an alias or a valid URL", alias_or_url)),
        },
    };
    Ok((url, token))
}

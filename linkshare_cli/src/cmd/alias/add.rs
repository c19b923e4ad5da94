// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{Alias, ConfigFile};
use crate::context::CliContext;
use crate::io::std::output;
use anyhow::{Context, Error};
use clap::{arg, ArgMatches, Command};
use url::Url;

pub(super) fn add_alias(ctx: &CliContext, args: &ArgMatches) -> anyhow::Result<()> {
    let name = args.get_one::<String>("NAME").unwrap();
    let url = args.get_one::<String>("URL").unwrap();
    let token = args.get_one::<String>("TOKEN").cloned().unwrap_or_default();

    let mut config_file = ConfigFile::load(ctx.config_path())?;
    let config = config_file.mut_config();
    if config.aliases.contains_key(name) {
        return Err(Error::msg(format!("Alias '{}' already exists", name)));
    }

    config.aliases.insert(
        name.to_string(),
        Alias {
            url: Url::parse(url).with_context(|| format!("Invalid URL '{}'", url))?,
            token,
        },
    );
    config_file.save()?;

    output!(ctx, "Alias '{}' added", name);
    Ok(())
}

pub(super) fn add_alias_cmd() -> Command {
    Command::new("add")
        .about("Add an alias")
        .arg(arg!(<NAME> "The name of the alias to create").required(true))
        .arg(arg!(<URL> "The URL of the provider, e.g. https://acme.example.com").required(true))
        .arg(arg!([TOKEN] "The API token to use for authentication").required(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::context;
    use rstest::rstest;

    #[rstest]
    fn test_add_alias(context: CliContext) {
        let args = add_alias_cmd().get_matches_from(vec![
            "add",
            "test",
            "https://files.example.com",
            "secret",
        ]);
        add_alias(&context, &args).unwrap();

        let config_file = ConfigFile::load(context.config_path()).unwrap();
        let alias = config_file.config().aliases.get("test").unwrap();
        assert_eq!(alias.url.as_str(), "https://files.example.com/");
        assert_eq!(alias.token, "secret");
        assert_eq!(context.stdout().history(), vec!["Alias 'test' added"]);
    }

    #[rstest]
    fn test_add_alias_without_token(context: CliContext) {
        let args = add_alias_cmd().get_matches_from(vec!["add", "test", "https://files.example.com"]);
        add_alias(&context, &args).unwrap();

        let config_file = ConfigFile::load(context.config_path()).unwrap();
        assert_eq!(config_file.config().aliases.get("test").unwrap().token, "");
    }

    #[rstest]
    fn test_add_alias_exists(context: CliContext) {
        let args = add_alias_cmd().get_matches_from(vec!["add", "default", "https://files.example.com"]);
        assert_eq!(
            add_alias(&context, &args).err().unwrap().to_string(),
            "Alias 'default' already exists"
        );
    }

    #[rstest]
    fn test_add_alias_invalid_url(context: CliContext) {
        let args = add_alias_cmd().get_matches_from(vec!["add", "test", "files.example.com"]);
        assert_eq!(
            add_alias(&context, &args).err().unwrap().to_string(),
            "Invalid URL 'files.example.com'"
        );
    }
}

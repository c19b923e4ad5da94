// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigFile;
use crate::context::CliContext;
use crate::io::std::output;
use clap::Command;

pub(super) fn list_aliases(ctx: &CliContext) -> anyhow::Result<()> {
    let config_file = ConfigFile::load(ctx.config_path())?;
    for (name, alias) in config_file.config().aliases.iter() {
        output!(ctx, "{}: {}", name, alias.url);
    }
    Ok(())
}

pub(super) fn ls_aliases_cmd() -> Command {
    Command::new("ls").about("List all aliases")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alias;
    use crate::context::tests::context;
    use rstest::rstest;
    use url::Url;

    #[rstest]
    fn test_list_aliases(context: CliContext) {
        let mut config_file = ConfigFile::load(context.config_path()).unwrap();
        config_file.mut_config().aliases.insert(
            "backup".to_string(),
            Alias {
                url: Url::parse("http://localhost:8080").unwrap(),
                token: String::new(),
            },
        );
        config_file.save().unwrap();

        list_aliases(&context).unwrap();
        assert_eq!(
            context.stdout().history(),
            vec![
                "backup: http://localhost:8080/",
                "default: https://acme.example.com/"
            ]
        );
    }
}

// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use colored::Colorize;

/// Where command results and warnings go.
///
/// Results are printed to stdout so they can be piped, warnings go to stderr.
pub(crate) trait Output {
    fn print(&self, message: &str);

    fn warn(&self, message: &str);

    /// Everything printed so far, warnings prefixed with `Warning: `.
    #[cfg(test)]
    fn history(&self) -> Vec<String>;
}

pub(crate) struct StdOutput;

impl StdOutput {
    pub(crate) fn new() -> Self {
        StdOutput {}
    }
}

impl Output for StdOutput {
    fn print(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", format!("Warning: {}", message).yellow().bold());
    }

    #[cfg(test)]
    fn history(&self) -> Vec<String> {
        Vec::new()
    }
}

macro_rules! output {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.stdout().print(&format!($($arg)*));
    };
}

macro_rules! warning {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.stdout().warn(&format!($($arg)*));
    };
}

pub(crate) use output;
pub(crate) use warning;

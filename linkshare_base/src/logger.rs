// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A small logger for the `log` facade.
//!
//! Levels are configured per module path, e.g. `WARN,linkshare_rs=DEBUG`.
//! Messages go to stderr so they never mix with command output.

use chrono::prelude::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};

static LOGGER: Logger = Logger;

static PATHS: LazyLock<RwLock<BTreeMap<String, Level>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

pub struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let paths = match PATHS.read() {
            Ok(paths) => paths,
            Err(_) => return false,
        };

        let target = metadata.target().replace("::", "/");
        // most specific path first
        for (path, level) in paths.iter().rev() {
            if path.is_empty() || target.starts_with(path.as_str()) {
                return metadata.level() <= *level;
            }
        }
        false
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now: DateTime<Utc> = Utc::now();
        let file = match record.file() {
            Some(file) => file.split_once("src/").map_or(file, |(_, file)| file),
            None => "(unknown)",
        };
        let package_name = record
            .target()
            .split_once(':')
            .map_or(record.target(), |(package, _)| package);

        eprintln!(
            "{} ({:>5}) [{}] -- {}/{}:{} {}",
            now.format("%Y-%m-%d %H:%M:%S.%3f"),
            thread_id::get() % 100000,
            record.level(),
            package_name,
            file,
            record.line().unwrap_or(0),
            record.args(),
        );
    }

    fn flush(&self) {}
}

impl Logger {
    /// Initialize the logger.
    ///
    /// # Arguments
    ///
    /// * `levels` - Comma separated list of `LEVEL` or `path=LEVEL` items.
    ///   A level is one of TRACE, DEBUG, INFO, WARN, ERROR. Unknown levels fall back to INFO.
    pub fn init(levels: &str) {
        let (paths, max_level) = parse_levels(levels);
        if let Ok(mut current) = PATHS.write() {
            *current = paths;
        }

        log::set_logger(&LOGGER).ok();
        log::set_max_level(max_level);
    }
}

fn parse_level(level: &str) -> Option<Level> {
    match level.trim().to_uppercase().as_str() {
        "TRACE" => Some(Level::Trace),
        "DEBUG" => Some(Level::Debug),
        "INFO" => Some(Level::Info),
        "WARN" => Some(Level::Warn),
        "ERROR" => Some(Level::Error),
        _ => None,
    }
}

fn parse_levels(levels: &str) -> (BTreeMap<String, Level>, LevelFilter) {
    let mut paths = BTreeMap::from([("".to_string(), Level::Info)]);
    let mut max_level = Level::Error;

    for item in levels.split(',').filter(|item| !item.trim().is_empty()) {
        let (path, level) = match item.split_once('=') {
            Some((path, level)) => (path.trim(), level),
            None => ("", item), // root level
        };

        let level = parse_level(level).unwrap_or(Level::Info);
        max_level = std::cmp::max(max_level, level);
        paths.insert(path.replace("::", "/"), level);
    }

    // the root level counts even if it wasn't given explicitly
    let root = paths.get("").copied().unwrap_or(Level::Info);
    (paths, std::cmp::max(max_level, root).to_level_filter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    fn enabled(level: Level, target: &str) -> bool {
        LOGGER.enabled(&Metadata::builder().level(level).target(target).build())
    }

    #[rstest]
    #[serial]
    fn it_works() {
        Logger::init("INFO");
        log::info!("Hello, world!");
    }

    #[rstest]
    #[serial]
    fn test_log_levels() {
        Logger::init("DEBUG,linkshare_rs=TRACE,linkshare_rs/http_client=ERROR");

        assert!(enabled(Level::Debug, "other"));
        assert!(!enabled(Level::Trace, "other"));
        assert!(enabled(Level::Trace, "linkshare_rs::links"));
        assert!(enabled(Level::Error, "linkshare_rs::http_client"));
        assert!(!enabled(Level::Warn, "linkshare_rs::http_client"));
    }

    #[rstest]
    #[serial]
    fn test_log_wrong_level() {
        Logger::init("WRONG");
        assert!(enabled(Level::Info, "crate"), "Default level is INFO");
        assert!(!enabled(Level::Debug, "crate"));
    }

    #[rstest]
    fn test_parse_levels_max_level() {
        let (paths, max_level) = parse_levels("WARN,linkshare_cli=DEBUG");
        assert_eq!(paths.get(""), Some(&Level::Warn));
        assert_eq!(paths.get("linkshare_cli"), Some(&Level::Debug));
        assert_eq!(max_level, LevelFilter::Debug);
    }

    #[rstest]
    fn test_parse_levels_module_path() {
        let (paths, _) = parse_levels("linkshare_rs::links=TRACE");
        assert_eq!(paths.get("linkshare_rs/links"), Some(&Level::Trace));
    }

    #[rstest]
    fn test_parse_levels_empty() {
        let (paths, max_level) = parse_levels("");
        assert_eq!(paths.len(), 1);
        assert_eq!(max_level, LevelFilter::Info);
    }
}

use crate::{LogLevel, LoggingConfig};

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_mixed_case_level_when_parsed_then_matches_filter() {
    assert_that!(LogLevel::parse_lenient("DeBuG"), eq(LogLevel(LevelFilter::Debug)));
    assert_that!(LogLevel::parse_lenient(" trace "), eq(LogLevel(LevelFilter::Trace)));
    assert_that!(LogLevel::parse_lenient("off"), eq(LogLevel(LevelFilter::Off)));
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    let level: LogLevel = "verbose".parse().unwrap();

    assert_that!(level, eq(LogLevel(LevelFilter::Info)));
}

#[test]
fn given_level_when_displayed_then_lowercase_directive() {
    assert_that!(LogLevel(LevelFilter::Warn).as_directive().as_str(), eq("warn"));
    assert_that!(LogLevel(LevelFilter::Error).to_string().as_str(), eq("error"));
}

#[test]
fn given_unknown_level_in_toml_when_deserialized_then_info() {
    let logging: LoggingConfig = toml::from_str("level = \"chatty\"").unwrap();

    assert_that!(logging.level, eq(LogLevel(LevelFilter::Info)));
}

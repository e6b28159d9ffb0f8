use crate::LogLevel;

use googletest::prelude::*;
use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_map_to_filters() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
        ("INFO", LevelFilter::Info),
        ("Debug", LevelFilter::Debug),
    ];

    for (name, expected) in cases {
        let level: LogLevel = name.parse().unwrap();
        assert_that!(level, eq(LogLevel(expected)));
    }
}

#[test]
fn given_unknown_level_name_when_parsed_then_fails() {
    let result = "verbose".parse::<LogLevel>();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("Unknown log level 'verbose'")
    );
}

#[test]
fn given_toml_with_bad_level_when_deserialized_then_fails() {
    #[derive(Debug, serde::Deserialize)]
    struct Doc {
        level: LogLevel,
    }

    let result = toml::from_str::<Doc>("level = \"loud\"");

    assert_that!(result, err(anything()));
}

#[test]
fn test_default_level() {
    assert_that!(LogLevel::default(), eq(LogLevel(LevelFilter::Info)));
}

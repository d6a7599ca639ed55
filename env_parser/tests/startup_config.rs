//! A configuration pass the way an application would run it at startup.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use env_parser::{EnvParser, EnvSource, IntegerBounds, Pattern};

#[derive(Debug, PartialEq)]
struct AppConfig {
    host: String,
    port: u16,
    log_level: &'static str,
    workers: Option<i64>,
    region: Option<String>,
}

const LOG_LEVELS: [&str; 4] = ["trace", "debug", "info", "warn"];

fn load<E: EnvSource>(parser: &EnvParser<E>) -> Result<AppConfig> {
    let host = parser.get_string("APP_HOST", None)?;
    let port = parser.get_integer("APP_PORT", IntegerBounds::between(1, 65535))?;
    let log_level = *parser.get_one_of("APP_LOG_LEVEL", &LOG_LEVELS)?;
    let workers = parser.get_optional_integer("APP_WORKERS", IntegerBounds::at_least(1))?;
    let region_pattern = Pattern::new("[a-z]{2}-[a-z]+-[0-9]")?;
    let region = parser.get_optional_string("APP_REGION", Some(&region_pattern))?;

    Ok(AppConfig {
        host,
        port: u16::try_from(port).context("port range already checked")?,
        log_level,
        workers,
        region,
    })
}

#[test]
fn loads_full_config() -> Result<()> {
    let env = BTreeMap::from([
        ("APP_HOST", "0.0.0.0"),
        ("APP_PORT", "8080"),
        ("APP_LOG_LEVEL", "debug"),
        ("APP_WORKERS", "4"),
        ("APP_REGION", "eu-west-1"),
    ]);
    let config = load(&EnvParser::new(&env))?;
    assert_eq!(
        config,
        AppConfig {
            host: "0.0.0.0".into(),
            port: 8080,
            log_level: "debug",
            workers: Some(4),
            region: Some("eu-west-1".into()),
        }
    );
    Ok(())
}

#[test]
fn optional_settings_may_be_absent() -> Result<()> {
    let env = BTreeMap::from([
        ("APP_HOST", "localhost"),
        ("APP_PORT", "1"),
        ("APP_LOG_LEVEL", "warn"),
    ]);
    let config = load(&EnvParser::new(&env))?;
    assert_eq!(config.workers, None);
    assert_eq!(config.region, None);
    Ok(())
}

#[test]
fn first_failure_aborts_startup() {
    let env = BTreeMap::from([
        ("APP_HOST", "localhost"),
        ("APP_PORT", "70000"),
        ("APP_LOG_LEVEL", "verbose"),
    ]);
    let err = load(&EnvParser::new(&env)).unwrap_err();
    assert_eq!(err.to_string(), "environment variable APP_PORT must be <= 65535");
}

#[test]
fn membership_failure_surfaces_through_anyhow() {
    let env = BTreeMap::from([
        ("APP_HOST", "localhost"),
        ("APP_PORT", "80"),
        ("APP_LOG_LEVEL", "verbose"),
    ]);
    let err = load(&EnvParser::new(&env)).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"environment variable APP_LOG_LEVEL must be one of ["trace","debug","info","warn"]"#
    );
}

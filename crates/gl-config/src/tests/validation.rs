use crate::{AuthConfig, Config, DatabaseConfig, ServerConfig, TenantConfig};

use googletest::prelude::*;

fn valid_config() -> Config {
    Config {
        auth: AuthConfig {
            jwt_secret: Some("test-secret-key-at-least-32-bytes!!".to_string()),
            ..AuthConfig::default()
        },
        tenants: TenantConfig {
            ids: vec!["club-a".to_string(), "club-b".to_string()],
        },
        ..Config::default()
    }
}

#[test]
fn given_complete_config_when_validated_then_passes() {
    let config = valid_config();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_missing_jwt_secret_when_validated_then_fails() {
    let mut config = valid_config();
    config.auth.jwt_secret = None;

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("jwt_secret")
    );
}

#[test]
fn given_short_jwt_secret_when_validated_then_fails() {
    let mut config = valid_config();
    config.auth.jwt_secret = Some("too-short".to_string());

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_out_of_range_token_ttl_when_validated_then_fails() {
    let mut config = valid_config();
    config.auth.token_ttl_secs = 0;
    assert_that!(config.validate(), err(anything()));

    config.auth.token_ttl_secs = 1_000_000;
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_tenant_registry_when_validated_then_fails() {
    let mut config = valid_config();
    config.tenants.ids.clear();

    let result = config.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("tenants.ids")
    );
}

#[test]
fn given_path_unsafe_tenant_id_when_validated_then_fails() {
    let mut config = valid_config();
    config.tenants.ids = vec!["../escape".to_string()];
    assert_that!(config.validate(), err(anything()));

    config.tenants.ids = vec!["Club A".to_string()];
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_absolute_database_dir_when_validated_then_fails() {
    let mut config = valid_config();
    config.database.dir = "/var/lib/gl".to_string();
    assert_that!(config.validate(), err(anything()));

    config.database.dir = "../outside".to_string();
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_query_timeout_when_validated_then_fails() {
    let mut config = valid_config();
    config.database.query_timeout_secs = 0;

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_privileged_port_when_validated_then_fails() {
    let config = ServerConfig {
        port: 80,
        ..ServerConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_port_zero_when_validated_then_passes_as_auto_assign() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn test_defaults() {
    let database = DatabaseConfig::default();
    assert_that!(database.dir, eq("data"));
    assert_that!(database.query_timeout_secs, eq(5));

    let auth = AuthConfig::default();
    assert_that!(auth.token_ttl_secs, eq(7200));
    assert_that!(auth.jwt_secret, none());
}

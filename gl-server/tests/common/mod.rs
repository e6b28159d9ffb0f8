#![allow(dead_code)]

//! Test infrastructure for gl-server API tests

use gl_auth::Claims;
use gl_auth::{JwtValidator, TokenIssuer, hash_password};
use gl_core::User;
use gl_db::{TenantConnectionManager, UserPatch, UserRepository};
use gl_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{EncodingKey, Header};
use tempfile::TempDir;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes!!";
pub const TOKEN_TTL_SECS: u64 = 7200;

/// Create AppState over a fresh per-test data directory with two
/// registered tenants, `club-a` and `club-b`. The TempDir must stay alive
/// for the duration of the test.
pub async fn create_test_app_state() -> (AppState, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let tenants = vec!["club-a".to_string(), "club-b".to_string()];

    let connections = Arc::new(TenantConnectionManager::new(
        dir.path(),
        &tenants,
        Duration::from_secs(5),
    ));

    let state = AppState {
        connections,
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, TOKEN_TTL_SECS)),
    };

    (state, dir)
}

/// Seed a user in a tenant. `stored_password` is written verbatim, so it
/// can be a bcrypt hash or a legacy plaintext value.
pub async fn create_test_user(
    state: &AppState,
    tenant_id: &str,
    cpf: &str,
    name: &str,
    stored_password: Option<&str>,
) -> User {
    let ctx = state
        .connections
        .resolve(tenant_id)
        .await
        .expect("Failed to resolve test tenant");
    let repo = UserRepository::new(&ctx);

    let patch = UserPatch {
        name: Some(name.to_string()),
        ..Default::default()
    };
    let user = repo.upsert(cpf, &patch).await.expect("Failed to seed user");

    if let Some(stored) = stored_password {
        repo.set_password(cpf, stored)
            .await
            .expect("Failed to seed password");
    }

    user
}

/// Seed a user whose password is a real bcrypt hash of `password`.
pub async fn create_test_user_with_password(
    state: &AppState,
    tenant_id: &str,
    cpf: &str,
    name: &str,
    password: &str,
) -> User {
    let hash = hash_password(password).expect("Failed to hash test password");
    create_test_user(state, tenant_id, cpf, name, Some(&hash)).await
}

/// Mint a valid bearer token for a user on a tenant.
pub fn mint_token(state: &AppState, user_id: &str, tenant_id: &str) -> String {
    state
        .token_issuer
        .issue(user_id, tenant_id, "staff")
        .expect("Failed to issue test token")
        .token
}

/// Mint a token whose expiry is already past the validation leeway.
pub fn mint_expired_token(user_id: &str, tenant_id: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        client_id: tenant_id.to_string(),
        profile: "staff".to_string(),
        exp: now - 120,
        iat: now - 7320,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to encode expired token")
}

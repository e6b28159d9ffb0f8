use crate::{AuthError, Claims, JwtValidator, TokenIssuer};

use jsonwebtoken::Algorithm;
use jsonwebtoken::{EncodingKey, Header, encode};

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims() -> Claims {
    Claims {
        sub: "user-123".to_string(),
        client_id: "club-a".to_string(),
        profile: "member".to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let validator = JwtValidator::with_hs256(secret);
    let claims = valid_claims();
    let token = create_test_token(&claims, secret);

    let result = validator.validate(&token);

    assert!(result.is_ok());
    let validated = result.unwrap();
    assert_eq!(validated.sub, "user-123");
    assert_eq!(validated.client_id, "club-a");
}

#[test]
fn given_expired_token_when_validated_then_returns_token_expired_error() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let validator = JwtValidator::with_hs256(secret);
    let mut claims = valid_claims();
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, secret);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_decode_error() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let wrong_secret = b"wrong-secret-key-at-least-32-by";
    let validator = JwtValidator::with_hs256(wrong_secret);
    let claims = valid_claims();
    let token = create_test_token(&claims, secret);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_garbage_token_when_validated_then_returns_decode_error() {
    let validator = JwtValidator::with_hs256(b"test-secret-key-at-least-32-bytes");

    let result = validator.validate("not.a.jwt");

    assert!(matches!(result, Err(AuthError::JwtDecode { .. })));
}

#[test]
fn given_empty_tenant_claim_when_validated_then_returns_invalid_claim() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let validator = JwtValidator::with_hs256(secret);
    let mut claims = valid_claims();
    claims.client_id = String::new();
    let token = create_test_token(&claims, secret);

    let result = validator.validate(&token);

    assert!(matches!(
        result,
        Err(AuthError::InvalidClaim { claim, .. }) if claim == "client_id"
    ));
}

#[test]
fn given_issuer_when_token_minted_then_expiry_is_exactly_iat_plus_ttl() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let issuer = TokenIssuer::with_hs256(secret, 7200);

    let issued = issuer.issue("user-123", "club-a", "member").unwrap();

    assert_eq!(issued.claims.exp - issued.claims.iat, 7200);
    assert_eq!(issued.expires_in(), 7200);
}

#[test]
fn given_issued_token_when_validated_then_round_trips_identity_and_tenant() {
    let secret = b"test-secret-key-at-least-32-bytes";
    let issuer = TokenIssuer::with_hs256(secret, 7200);
    let validator = JwtValidator::with_hs256(secret);

    let issued = issuer.issue("user-123", "club-a", "staff").unwrap();
    let claims = validator.validate(&issued.token).unwrap();

    assert_eq!(claims.sub, "user-123");
    assert_eq!(claims.client_id, "club-a");
    assert_eq!(claims.profile, "staff");
}

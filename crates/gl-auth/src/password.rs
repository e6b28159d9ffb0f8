//! Password hashing and verification.
//!
//! Stored passwords are bcrypt hashes, but older tenant databases still
//! hold plaintext values from before hashing was introduced. Those are
//! accepted on exact match and must be re-hashed by the caller on first
//! successful login (`needs_rehash`).

use crate::{AuthError, Result as AuthErrorResult};

use gl_core::ErrorLocation;

use std::panic::Location;

use bcrypt::{DEFAULT_COST, hash, verify};

/// Outcome of checking a presented password against a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Password accepted. `needs_rehash` is true when the stored value was
    /// legacy plaintext and should be replaced with a bcrypt hash.
    Match { needs_rehash: bool },
    Mismatch,
}

/// Whether a stored value is already a bcrypt hash.
/// Covers the $2a$/$2b$/$2y$ prefix family.
pub fn is_bcrypt_hash(stored: &str) -> bool {
    stored.starts_with("$2")
}

/// Hash a plaintext password for storage.
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    hash(plain, DEFAULT_COST).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a presented password against the stored value.
#[track_caller]
pub fn verify_password(stored: &str, presented: &str) -> AuthErrorResult<PasswordMatch> {
    if is_bcrypt_hash(stored) {
        let matched = verify(presented, stored).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        return Ok(if matched {
            PasswordMatch::Match {
                needs_rehash: false,
            }
        } else {
            PasswordMatch::Mismatch
        });
    }

    // Legacy plaintext value: exact equality, then migrate
    Ok(if stored == presented {
        PasswordMatch::Match { needs_rehash: true }
    } else {
        PasswordMatch::Mismatch
    })
}

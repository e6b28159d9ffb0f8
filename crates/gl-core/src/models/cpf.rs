//! CPF normalization.
//!
//! Clients send CPFs formatted ("123.456.789-09") or raw; storage and
//! lookups always use the digits-only form so the same person never gets
//! two records under one tenant.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

/// Strip formatting from a CPF and require exactly 11 digits.
#[track_caller]
pub fn normalize_cpf(raw: &str) -> CoreErrorResult<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 11 {
        return Err(CoreError::InvalidCpf {
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(digits)
}

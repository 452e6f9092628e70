//! Password hashing and verification utilities using Argon2id.
//!
//! Hashes are stored as `$argon2id$v=19$m=<kib>,t=<iterations>,p=<lanes>$<salt>$<hash>`
//! with standard base64 salt and hash, so the parameters travel with each hash.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::prelude::*;
use rand::{RngCore, rng};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Minimum password length accepted by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: password does not match")]
    VerificationFailed,

    #[error("Invalid hash format")]
    InvalidHashFormat,

    #[error("Base64 decoding failed: {0}")]
    DecodingFailed(#[from] base64::DecodeError),
}

/// Configuration for Argon2id password hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Memory cost in KiB (default: 15 MiB = 15360 KiB)
    pub memory_cost: u32,
    /// Number of iterations (default: 3)
    pub time_cost:   u32,
    /// Number of lanes (default: 2)
    pub parallelism: u32,
    /// Length of the generated hash (default: 32 bytes)
    pub hash_length: u32,
    /// Length of the salt (default: 16 bytes)
    pub salt_length: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: 15360,
            time_cost:   3,
            parallelism: 2,
            hash_length: 32,
            salt_length: 16,
        }
    }
}

impl PasswordConfig {
    /// Minimal-cost parameters for local development and test suites.
    pub fn low_cost() -> Self {
        Self {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
            ..Self::default()
        }
    }

    fn hasher(&self, output_len: usize) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(
            self.memory_cost,
            self.time_cost,
            self.parallelism,
            Some(output_len),
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes a password using Argon2id.
///
/// # Example
///
/// ```
/// use auth::password::{PasswordConfig, hash_password};
/// use secrecy::{ExposeSecret, SecretString};
///
/// let password = SecretString::from("Secret123");
/// let hash = hash_password(&password, Some(PasswordConfig::low_cost())).unwrap();
/// assert!(hash.expose_secret().starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
/// ```
pub fn hash_password(password: &SecretString, config: Option<PasswordConfig>) -> Result<SecretString, PasswordError> {
    let config = config.unwrap_or_default();

    let mut salt = vec![0u8; config.salt_length as usize];
    rng().fill_bytes(&mut salt);

    let mut output = vec![0u8; config.hash_length as usize];
    config
        .hasher(output.len())?
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut output)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    let encoded = format!(
        "$argon2id$v=19$m={},t={},p={}${}${}",
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        BASE64_STANDARD.encode(&salt),
        BASE64_STANDARD.encode(&output)
    );

    Ok(SecretString::from(encoded))
}

/// Parses `m=..,t=..,p=..` into a config; every parameter is required.
fn parse_params(params: &str) -> Option<PasswordConfig> {
    let mut memory_cost = None;
    let mut time_cost = None;
    let mut parallelism = None;

    for part in params.split(',') {
        let (key, value) = part.split_once('=')?;
        let value: u32 = value.parse().ok()?;
        match key {
            "m" => memory_cost = Some(value),
            "t" => time_cost = Some(value),
            "p" => parallelism = Some(value),
            _ => return None,
        }
    }

    Some(PasswordConfig {
        memory_cost: memory_cost?,
        time_cost: time_cost?,
        parallelism: parallelism?,
        ..PasswordConfig::default()
    })
}

/// Verifies a password against a stored hash.
///
/// # Example
///
/// ```
/// use auth::password::{PasswordConfig, hash_password, verify_password};
/// use secrecy::{ExposeSecret, SecretString};
///
/// let password = SecretString::from("Secret123");
/// let hash = hash_password(&password, Some(PasswordConfig::low_cost())).unwrap();
///
/// assert!(verify_password(&password, hash.expose_secret()).is_ok());
/// ```
pub fn verify_password(password: &SecretString, expected_hash: &str) -> Result<(), PasswordError> {
    // ["", "argon2id", "v=19", "m=..,t=..,p=..", "<salt>", "<hash>"]
    let parts: Vec<&str> = expected_hash.split('$').collect();
    let [empty, algorithm, version, params, salt_b64, hash_b64] = parts.as_slice()
    else {
        return Err(PasswordError::InvalidHashFormat);
    };

    if !empty.is_empty() || *algorithm != "argon2id" || *version != "v=19" {
        return Err(PasswordError::InvalidHashFormat);
    }

    let config = parse_params(params).ok_or(PasswordError::InvalidHashFormat)?;
    let salt = BASE64_STANDARD.decode(salt_b64)?;
    let stored_hash = BASE64_STANDARD.decode(hash_b64)?;
    if stored_hash.is_empty() {
        return Err(PasswordError::InvalidHashFormat);
    }

    let mut computed_hash = vec![0u8; stored_hash.len()];
    config
        .hasher(stored_hash.len())?
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut computed_hash)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    if computed_hash.as_slice().ct_eq(&stored_hash).into() {
        Ok(())
    }
    else {
        Err(PasswordError::VerificationFailed)
    }
}

/// Checks a password against the policy: at least eight characters with one
/// uppercase letter, one lowercase letter and one digit.
///
/// Returns every rule the password breaks.
pub fn validate_password_strength(password: &str) -> Result<(), Vec<PasswordValidationError>> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(PasswordValidationError::TooShort);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push(PasswordValidationError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push(PasswordValidationError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PasswordValidationError::MissingDigit);
    }

    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(errors)
    }
}

/// Errors for password validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordValidationError {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one number")]
    MissingDigit,
}

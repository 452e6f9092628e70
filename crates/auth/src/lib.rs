//! # Credential Handling
//!
//! Password hashing, verification and the password policy applied when users
//! are created or change their password.

pub mod password;

pub use password::{
    PasswordConfig,
    PasswordError,
    PasswordValidationError,
    hash_password,
    validate_password_strength,
    verify_password,
};
pub use secrecy;

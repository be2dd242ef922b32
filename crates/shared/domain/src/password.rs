//! Password value object.
//!
//! Operator passwords are never stored in clear text; this wraps the Argon2
//! hash and is the only place that hashes or verifies.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Argon2 hash of an operator password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash `plain_text`.
    ///
    /// # Errors
    /// `DomainError::Password` if shorter than [`MIN_PASSWORD_LENGTH`].
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::password(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a hash loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify `plain_text` against this hash. A malformed hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        PasswordHash::new(&self.hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let password = Password::new("TallerPassword1").unwrap();

        assert!(password.verify("TallerPassword1"));
        assert!(!password.verify("TallerPassword2"));
    }

    #[test]
    fn restored_hash_still_verifies() {
        let password = Password::new("TallerPassword1").unwrap();
        let restored = Password::from_hash(password.as_str());

        assert!(restored.verify("TallerPassword1"));
    }

    #[test]
    fn same_input_gets_new_salt() {
        let a = Password::new("SamePassword123").unwrap();
        let b = Password::new("SamePassword123").unwrap();

        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn too_short_is_rejected() {
        assert!(matches!(
            Password::new("short"),
            Err(DomainError::Password(_))
        ));
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!Password::from_hash("not-a-hash").verify("anything"));
    }

    #[test]
    fn debug_is_redacted() {
        let password = Password::new("TallerPassword1").unwrap();
        assert!(!format!("{password:?}").contains("argon2"));
    }
}

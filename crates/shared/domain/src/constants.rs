//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// DNI
// =============================================================================

/// Check letters indexed by `number % 23`.
pub const DNI_ALPHABET: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Modulus of the DNI checksum
pub const DNI_CHECK_MODULUS: u32 = 23;

/// Number of digits in a DNI
pub const DNI_DIGITS: usize = 8;

/// Largest number an eight digit DNI can carry
pub const MAX_DNI_NUMBER: u32 = 99_999_999;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Digits in a phone number
pub const TELEFONO_DIGITS: usize = 9;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Translations
// =============================================================================

/// Languages shipped in the translation catalog
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es", "fr", "de", "pt"];


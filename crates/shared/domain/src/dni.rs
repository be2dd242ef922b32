//! Spanish national identity document (DNI) check letter.
//!
//! A DNI is an eight digit number followed by a control letter. The letter is
//! `DNI_ALPHABET[number % 23]`. Everything here is a pure function over
//! primitives, so it can be called from any thread without coordination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::constants::{DNI_ALPHABET, DNI_CHECK_MODULUS, DNI_DIGITS, MAX_DNI_NUMBER};

/// Reasons a DNI candidate is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DniError {
    /// Not eight ASCII digits followed by one ASCII letter.
    #[error("DNI must be 8 digits followed by a letter")]
    InvalidFormat,

    /// Well formed, but the letter does not match the number.
    #[error("DNI check letter is wrong, expected '{expected}'")]
    InvalidCheckLetter { expected: char },

    /// Only produced when generating a code.
    #[error("DNI number {0} is out of range")]
    NumberOutOfRange(u32),
}

impl DniError {
    /// Render the user-facing message for the form field `attribute`.
    pub fn message(&self, attribute: &str) -> String {
        let template = match self {
            DniError::InvalidFormat => {
                "The :attribute must be a valid DNI format (8 numbers followed by a letter)."
            }
            DniError::InvalidCheckLetter { .. } => {
                "The letter in the :attribute is not valid for the given number."
            }
            DniError::NumberOutOfRange(_) => {
                "The :attribute number must be between 0 and 99999999."
            }
        };
        template.replace(":attribute", attribute)
    }
}

/// Check letter for `number`. Total over every `u32`.
pub fn check_letter(number: u32) -> char {
    DNI_ALPHABET[(number % DNI_CHECK_MODULUS) as usize] as char
}

/// Validate a candidate DNI. The letter is matched case-insensitively.
pub fn validate_dni(candidate: &str) -> Result<(), DniError> {
    DniCode::parse(candidate).map(|_| ())
}

/// A DNI whose letter is known to match its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DniCode {
    number: u32,
    letter: char,
}

impl DniCode {
    /// Build the code for `number`, computing its letter.
    pub fn generate(number: u32) -> Result<Self, DniError> {
        if number > MAX_DNI_NUMBER {
            return Err(DniError::NumberOutOfRange(number));
        }
        Ok(Self {
            number,
            letter: check_letter(number),
        })
    }

    /// Parse and normalise a candidate (uppercase letter, padded number).
    pub fn parse(candidate: &str) -> Result<Self, DniError> {
        let bytes = candidate.as_bytes();
        if bytes.len() != DNI_DIGITS + 1 {
            return Err(DniError::InvalidFormat);
        }

        let (digits, letter) = bytes.split_at(DNI_DIGITS);
        if !digits.iter().all(u8::is_ascii_digit) || !letter[0].is_ascii_alphabetic() {
            return Err(DniError::InvalidFormat);
        }

        let number = digits
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
        let supplied = letter[0].to_ascii_uppercase() as char;
        let expected = check_letter(number);

        if supplied != expected {
            return Err(DniError::InvalidCheckLetter { expected });
        }

        Ok(Self {
            number,
            letter: expected,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for DniCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}{}", self.number, self.letter, width = DNI_DIGITS)
    }
}

impl FromStr for DniCode {
    type Err = DniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DniCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DniCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_letters() {
        assert_eq!(check_letter(0), 'T');
        assert_eq!(check_letter(1), 'R');
        assert_eq!(check_letter(22), 'E');
        assert_eq!(check_letter(23), 'T');
        assert_eq!(check_letter(99_999_999), 'R');
        assert_eq!(check_letter(12_345_678), 'Z');
    }

    #[test]
    fn accepts_valid_codes() {
        assert_eq!(validate_dni("12345678Z"), Ok(()));
        assert_eq!(validate_dni("00000000T"), Ok(()));
        assert_eq!(validate_dni("00000001R"), Ok(()));
        assert_eq!(validate_dni("99999999R"), Ok(()));
    }

    #[test]
    fn letter_is_case_insensitive() {
        assert_eq!(validate_dni("00000001r"), validate_dni("00000001R"));
        assert_eq!(validate_dni("12345678z"), Ok(()));
        assert_eq!(
            validate_dni("00000001t"),
            Err(DniError::InvalidCheckLetter { expected: 'R' })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for candidate in [
            "",
            "1234567",
            "1234567Z",
            "1234567AB",
            "123456789",
            "123456789Z",
            "ABCDEFGHZ",
            "1234 678Z",
            " 12345678Z",
            "12345678Z ",
            "12345678-",
            "１２３４５６７８Z",
        ] {
            assert_eq!(
                validate_dni(candidate),
                Err(DniError::InvalidFormat),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn rejects_wrong_letter_with_expected() {
        assert_eq!(
            validate_dni("12345678E"),
            Err(DniError::InvalidCheckLetter { expected: 'Z' })
        );
        // Letters outside the alphabet pass the shape check.
        for letter in ['I', 'O', 'U', 'Ñ'] {
            let candidate = format!("00000000{letter}");
            let result = validate_dni(&candidate);
            if letter.is_ascii() {
                assert_eq!(result, Err(DniError::InvalidCheckLetter { expected: 'T' }));
            } else {
                assert_eq!(result, Err(DniError::InvalidFormat));
            }
        }
    }

    #[test]
    fn every_other_letter_is_rejected() {
        let number = 39_740_191;
        let expected = check_letter(number);
        for letter in ('A'..='Z').filter(|l| *l != expected) {
            assert_eq!(
                validate_dni(&format!("{number:08}{letter}")),
                Err(DniError::InvalidCheckLetter { expected })
            );
        }
    }

    #[test]
    fn generated_codes_validate() {
        let mut n: u32 = 0;
        while n <= MAX_DNI_NUMBER {
            let code = DniCode::generate(n).unwrap();
            assert_eq!(validate_dni(&code.to_string()), Ok(()));
            assert_eq!(code.to_string().parse::<DniCode>(), Ok(code));
            n += 7_919;
        }
        assert!(DniCode::generate(MAX_DNI_NUMBER).is_ok());
    }

    #[test]
    fn generate_rejects_out_of_range() {
        assert_eq!(
            DniCode::generate(100_000_000),
            Err(DniError::NumberOutOfRange(100_000_000))
        );
        assert!(DniCode::generate(u32::MAX).is_err());
    }

    #[test]
    fn display_is_zero_padded() {
        let code = DniCode::generate(1).unwrap();
        assert_eq!(code.to_string(), "00000001R");
        assert_eq!(code.number(), 1);
        assert_eq!(code.letter(), 'R');
    }

    #[test]
    fn parse_normalises_case() {
        let code: DniCode = "12345678z".parse().unwrap();
        assert_eq!(code.to_string(), "12345678Z");
    }

    #[test]
    fn validation_is_idempotent() {
        for candidate in ["12345678Z", "12345678A", "bad"] {
            assert_eq!(validate_dni(candidate), validate_dni(candidate));
        }
    }

    #[test]
    fn messages_fill_attribute() {
        assert_eq!(
            DniError::InvalidFormat.message("dni"),
            "The dni must be a valid DNI format (8 numbers followed by a letter)."
        );
        assert_eq!(
            DniError::InvalidCheckLetter { expected: 'Z' }.message("dni"),
            "The letter in the dni is not valid for the given number."
        );
    }

    #[test]
    fn serde_uses_canonical_string() {
        let code: DniCode = serde_json::from_str("\"00000001r\"").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"00000001R\"");
        assert!(serde_json::from_str::<DniCode>("\"00000001T\"").is_err());
    }
}

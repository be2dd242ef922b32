//! Field rules shared by request payloads.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use domain::{validate_dni, DniError, TELEFONO_DIGITS};

/// Nine digit phone number
pub static TELEFONO_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("^[0-9]{{{TELEFONO_DIGITS}}}$");
    Regex::new(&pattern).expect("valid regex")
});

/// DNI rule for `#[validate(custom(function = "validate_dni_field"))]`.
pub fn validate_dni_field(value: &str) -> Result<(), ValidationError> {
    validate_dni(value).map_err(|err| {
        let mut error = ValidationError::new(match err {
            DniError::InvalidFormat => "dni_format",
            _ => "dni_letter",
        });
        error.message = Some(Cow::from(err.message("dni")));
        if let DniError::InvalidCheckLetter { expected } = err {
            error.add_param(Cow::from("expected"), &expected.to_string());
        }
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefono_is_nine_digits() {
        assert!(TELEFONO_REGEX.is_match("612345678"));
        assert!(!TELEFONO_REGEX.is_match("61234567"));
        assert!(!TELEFONO_REGEX.is_match("6123456789"));
        assert!(!TELEFONO_REGEX.is_match("612 345 67"));
    }

    #[test]
    fn dni_rule_messages() {
        assert!(validate_dni_field("12345678Z").is_ok());

        let format = validate_dni_field("1234567").unwrap_err();
        assert_eq!(format.code, "dni_format");
        assert_eq!(
            format.message.as_deref(),
            Some("The dni must be a valid DNI format (8 numbers followed by a letter).")
        );

        let letter = validate_dni_field("12345678A").unwrap_err();
        assert_eq!(letter.code, "dni_letter");
        assert_eq!(
            letter.message.as_deref(),
            Some("The letter in the dni is not valid for the given number.")
        );
        assert_eq!(letter.params["expected"], "Z");
    }
}

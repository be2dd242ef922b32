//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// JSON extractor that validates the payload before the handler runs.
///
/// Malformed bodies are rejected with 400, rule violations with 422.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// An absent field is a rule violation like any other; anything else that
/// fails to deserialize is a malformed body.
fn rejection_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    if let JsonRejection::JsonDataError(_) = rejection {
        if let Some(field) = missing_field(&text) {
            return AppError::validation(format!("The {field} field is required."));
        }
    }
    AppError::bad_request(text)
}

/// Field name from serde's "missing field `name`" message.
fn missing_field(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

/// Message of the first failing field, in field-name order.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields
        .into_iter()
        .filter_map(|field| field_errors.get(field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_name_is_extracted() {
        assert_eq!(
            missing_field(
                "Failed to deserialize the JSON body into the target type: \
                 missing field `dni` at line 1 column 73"
            ),
            Some("dni")
        );
        assert_eq!(
            missing_field("invalid type: string \"x\", expected i32 at line 1 column 9"),
            None
        );
    }
}

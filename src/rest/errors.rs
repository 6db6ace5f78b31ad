//! Canned request errors.
//!
//! Parameter errors share the `invalid_param_type` / `invalid_param_value`
//! codes so status mapping and alert routing can branch on them without
//! looking at the message text.

use std::sync::OnceLock;

use crate::error::Error;

static INVALID_CONTENT_TYPE: OnceLock<Error> = OnceLock::new();

/// The request's content type is not accepted by the endpoint.
pub fn invalid_content_type() -> &'static Error {
    INVALID_CONTENT_TYPE.get_or_init(|| Error::new("invalid content type", "invalid_content_type"))
}

/// A parameter that must be a string was not one.
pub fn invalid_string_param(name: &str) -> Error {
    Error::new(
        format!("'{name}' must be a valid string"),
        "invalid_param_type",
    )
}

/// A parameter that must be a boolean was not one.
pub fn invalid_bool_param(name: &str) -> Error {
    Error::new(
        format!("'{name}' must be a valid bool value (true or false)"),
        "invalid_param_type",
    )
}

/// A parameter that must be a number was not one.
pub fn invalid_number_param(name: &str) -> Error {
    Error::new(
        format!("'{name}' must be a valid number"),
        "invalid_param_type",
    )
}

/// An array parameter failed validation.
pub fn invalid_array_param(name: &str) -> Error {
    Error::new(format!("'{name}' is not valid"), "invalid_param_value")
}

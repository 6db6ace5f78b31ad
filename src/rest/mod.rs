//! REST response boundary.
//!
//! Renders handler results and error chains into transport-ready
//! responses. Only the head node of an error chain ever reaches a caller:
//! its code and message populate a `{ "description", "code" }` body, with
//! the HTTP status chosen by the handler, never derived from the chain.
//! Interior causes stay in the logs.

pub mod errors;
pub mod response;

pub use errors::{
    invalid_array_param, invalid_bool_param, invalid_content_type, invalid_number_param,
    invalid_string_param,
};
pub use response::{ErrorBody, Response};

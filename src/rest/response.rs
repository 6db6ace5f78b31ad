//! Transport-ready response values.

use axum::http::header::{HeaderName, HeaderValue, LOCATION};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::Error;

/// The body rendered for error responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// The head node's message, already lower-cased.
    pub description: String,
    /// The head node's classification code.
    pub code: String,
}

/// A response for all entry points: status, optional JSON payload,
/// optional error body, optional headers.
#[derive(Clone, Debug)]
pub struct Response {
    status: StatusCode,
    data: Option<serde_json::Value>,
    error: Option<ErrorBody>,
    headers: Vec<(String, String)>,
}

impl Response {
    /// Creates a response with the given status, payload and headers.
    pub fn new(
        status: StatusCode,
        data: Option<serde_json::Value>,
        headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            status,
            data,
            error: None,
            headers,
        }
    }

    /// Creates an error response from the head of `err`'s chain.
    ///
    /// Only the outermost node's message and code are rendered; causes
    /// never leak to callers. With no error, the response carries the
    /// status alone and no body.
    pub fn from_error(status: StatusCode, err: Option<&Error>) -> Self {
        Self {
            status,
            data: None,
            error: err.map(|err| ErrorBody {
                description: err.message().to_string(),
                code: err.code().to_string(),
            }),
            headers: Vec::new(),
        }
    }

    /// 200 OK with a JSON payload.
    pub fn ok(data: impl Serialize) -> Self {
        Self::with_data(StatusCode::OK, data)
    }

    /// 201 Created with a JSON payload.
    pub fn created(data: impl Serialize) -> Self {
        Self::with_data(StatusCode::CREATED, data)
    }

    /// 204 No Content.
    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, None, Vec::new())
    }

    /// 302 Found redirect.
    pub fn found(redirect_url: impl Into<String>) -> Self {
        Self::new(
            StatusCode::FOUND,
            None,
            vec![(LOCATION.to_string(), redirect_url.into())],
        )
    }

    /// 400 Bad Request.
    pub fn bad_request(err: &Error) -> Self {
        Self::from_error(StatusCode::BAD_REQUEST, Some(err))
    }

    /// 404 Not Found.
    pub fn not_found(err: &Error) -> Self {
        Self::from_error(StatusCode::NOT_FOUND, Some(err))
    }

    /// Caller is not allowed to perform the operation. Rendered with a
    /// 403 status, same as [`Response::forbidden`].
    pub fn unauthorized(err: &Error) -> Self {
        Self::from_error(StatusCode::FORBIDDEN, Some(err))
    }

    /// 403 Forbidden, no body.
    pub fn forbidden() -> Self {
        Self::from_error(StatusCode::FORBIDDEN, None)
    }

    /// 500 Internal Server Error, no body.
    pub fn internal_server_error() -> Self {
        Self::from_error(StatusCode::INTERNAL_SERVER_ERROR, None)
    }

    /// 413 Request Entity Too Large, no body.
    pub fn request_entity_too_large() -> Self {
        Self::from_error(StatusCode::PAYLOAD_TOO_LARGE, None)
    }

    /// 425 Too Early.
    pub fn too_early(err: &Error) -> Self {
        Self::from_error(StatusCode::TOO_EARLY, Some(err))
    }

    /// 419 Page Expired, no body. Used for expired CSRF/session pages.
    pub fn page_expired() -> Self {
        // 419 has no named constant; it is in the valid range so the
        // fallback never actually applies
        let status = StatusCode::from_u16(419).unwrap_or(StatusCode::BAD_REQUEST);
        Self::from_error(status, None)
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The JSON payload, if any.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// The error body, if any.
    pub fn error(&self) -> Option<&ErrorBody> {
        self.error.as_ref()
    }

    fn with_data(status: StatusCode, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self::new(status, Some(value), Vec::new()),
            Err(err) => {
                error!(error = %err, "couldn't marshal response");
                Self::internal_server_error()
            }
        }
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let mut response = if let Some(body) = self.error {
            (self.status, Json(body)).into_response()
        } else if let Some(data) = self.data {
            (self.status, Json(data)).into_response()
        } else {
            self.status.into_response()
        };

        for (name, value) in self.headers {
            let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) else {
                warn!(header = %name, "skipping invalid response header");
                continue;
            };
            response.headers_mut().insert(name, value);
        }
        response
    }
}

//! Protocol responses.
//!
//! # Responsibilities
//! - Serialize success and error bodies as LLSD+XML
//! - Attach `error_code` to every error body
//! - Carry the error description as the HTTP/1 reason phrase
//! - Set `Location` for created resources
//!
//! # Design Decisions
//! - `AisResponse` is consumed when turned into an axum response, so a
//!   request can only ever produce one

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use hyper::ext::ReasonPhrase;

use crate::ais::AisErrorCode;
use crate::llsd::{self, Map, Value, LLSD_XML_CONTENT_TYPE};

/// A response ready to be written to the client.
#[derive(Debug, Clone)]
pub struct AisResponse {
    status: StatusCode,
    reason: Option<String>,
    location: Option<String>,
    error_code: Option<AisErrorCode>,
    body: Map,
}

impl AisResponse {
    /// 200 with the given body.
    pub fn success(body: Map) -> Self {
        Self::with_status(StatusCode::OK, body, None)
    }

    /// 200 with an empty map.
    pub fn empty() -> Self {
        Self::success(Map::new())
    }

    /// Explicit status and optional `Location`, e.g. 201 on creation.
    pub fn with_status(status: StatusCode, body: Map, location: Option<String>) -> Self {
        Self {
            status,
            reason: None,
            location,
            error_code: None,
            body,
        }
    }

    pub fn error(status: StatusCode, code: AisErrorCode, description: &str) -> Self {
        Self::error_with(status, code, description, Map::new())
    }

    /// Error with handler-specific fields alongside `error_code`.
    pub fn error_with(status: StatusCode, code: AisErrorCode, description: &str, mut extra: Map) -> Self {
        extra.insert("error_code".to_string(), Value::Integer(code.code()));
        Self {
            status,
            reason: Some(description.to_string()),
            location: None,
            error_code: Some(code),
            body: extra,
        }
    }

    pub fn not_found() -> Self {
        Self::error(StatusCode::NOT_FOUND, AisErrorCode::NotFound, "Not Found")
    }

    pub fn internal_error() -> Self {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            AisErrorCode::InternalError,
            "Internal Server Error",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error_code(&self) -> Option<AisErrorCode> {
        self.error_code
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn body(&self) -> &Map {
        &self.body
    }
}

impl IntoResponse for AisResponse {
    fn into_response(self) -> Response {
        let xml = llsd::to_xml(&Value::Map(self.body));
        let mut response = Response::new(Body::from(xml));
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(LLSD_XML_CONTENT_TYPE),
        );

        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(_) => tracing::warn!(location = %location, "Dropping invalid Location header"),
            }
        }

        if let Some(reason) = self.reason {
            // Descriptions that are not valid reason-phrase bytes fall back
            // to the canonical phrase.
            if let Ok(phrase) = ReasonPhrase::try_from(reason.into_bytes()) {
                response.extensions_mut().insert(phrase);
            }
        }

        response
    }
}

//! Protocol error taxonomy and internal failure kinds.

use std::num::ParseIntError;
use thiserror::Error;

use crate::inventory::InventoryError;

/// Protocol-level error code attached to every non-success body as
/// `error_code`. Discriminants are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AisErrorCode {
    InvalidRequest = 0,
    InvalidShape = 1,
    InvalidDepth = 2,
    BrokenLink = 3,
    NotFound = 4,
    AgentNotFound = 5,
    NoInventoryRoot = 6,
    MethodNotAllowed = 7,
    Conflict = 8,
    Gone = 9,
    ConditionFailed = 10,
    InternalError = 11,
    QueryFailed = 12,
    QueryExpectationFailed = 13,
    InvalidPermissions = 14,
    NotSupported = 15,
    Unknown = 16,
    UnsupportedMedia = 17,
}

impl AisErrorCode {
    /// Numeric wire value.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Failures that escape a handler and reach the router boundary.
#[derive(Debug, Error)]
pub enum AisError {
    /// The peer closed the connection; no response is produced.
    #[error("client connection closed")]
    ConnectionClosed,

    /// `depth=` carried something other than `*` or an integer.
    #[error("invalid depth option: {0}")]
    InvalidDepth(#[from] ParseIntError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("handler failure: {0}")]
    Handler(String),
}

impl From<std::io::Error> for AisError {
    fn from(e: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match e.kind() {
            ErrorKind::BrokenPipe | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
                AisError::ConnectionClosed
            }
            _ => AisError::Handler(e.to_string()),
        }
    }
}

/// Result type for request processing.
pub type AisResult<T> = Result<T, AisError>;

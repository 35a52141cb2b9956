//! Structured tree values carried in request and response bodies.
//!
//! # Data Flow
//! ```text
//! handlers build Value::Map
//!     → http/response.rs (AisResponse)
//!     → xml.rs (LLSD+XML serialization)
//!     → body bytes with LLSD_XML_CONTENT_TYPE
//! ```
//!
//! # Design Decisions
//! - Maps are ordered (BTreeMap) so serialized output is deterministic
//! - Only the value kinds the read surface emits are modelled

pub mod xml;

use std::collections::BTreeMap;
use uuid::Uuid;

pub use xml::to_xml;

/// Media type of the LLSD+XML wire format.
pub const LLSD_XML_CONTENT_TYPE: &str = "application/llsd+xml";

/// An LLSD map.
pub type Map = BTreeMap<String, Value>;

/// A single LLSD value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undef,
    Boolean(bool),
    Integer(i32),
    Real(f64),
    String(String),
    Uuid(Uuid),
    Uri(String),
    Array(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Borrow the inner map, if this is a map.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Uri(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

/// Build a `{ "href": <uri> }` link object.
pub fn href_link(href: impl Into<String>) -> Value {
    let mut link = Map::new();
    link.insert("href".to_string(), Value::Uri(href.into()));
    Value::Map(link)
}

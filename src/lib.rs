//! Agent Inventory Service (AIS v3) server library.

pub mod ais;
pub mod config;
pub mod handlers;
pub mod http;
pub mod inventory;
pub mod lifecycle;
pub mod llsd;
pub mod observability;
pub mod routing;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

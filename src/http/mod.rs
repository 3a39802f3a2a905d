//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → routing::RouteTable::dispatch
//!     → templates.rs (index, package and go-get pages)
//!     → Send to client
//! ```

pub mod request;
pub mod server;
pub mod templates;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};

//! Nearby Server
//!
//! HTTP API over the [`nearby`] listing search pipeline.
//!
//! # Example
//!
//! ```ignore
//! use nearby_server::run_server;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! run_server(listener, search, shutdown).await?;
//! ```

pub mod handler;
pub mod transport;

pub use handler::ApiError;
pub use transport::http::{router, run_server};

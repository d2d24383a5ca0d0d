//! HTTP protocol implementation.
//!
//! This module implements the single-request HTTP/1.1 cycle: each connection
//! carries exactly one GET request and one `Connection: close` response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a single pass of a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received (or degraded to not-found)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve the file, build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, flush, shut down
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close (no keep-alive)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use tinyserve::config::SiteConfig;
//! use tinyserve::http::connection::Connection;
//! use tinyserve::site::resolver::Resolver;
//! use std::time::Duration;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let resolver = Resolver::new(SiteConfig::default());
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let resolver = resolver.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, resolver, Duration::from_secs(30));
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

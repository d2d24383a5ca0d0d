//! tinyserve - Minimal static file server
//!
//! Core library for HTTP parsing, file resolution and response writing.

pub mod config;
pub mod http;
pub mod server;
pub mod site;

//! Static site serving
//!
//! This module maps requested paths to files under the document root and
//! substitutes template tokens in HTML bodies at serve time.

pub mod resolver;
pub mod template;

pub use resolver::{Resolution, Resolver};

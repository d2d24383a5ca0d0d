//! Resource resolution
//!
//! This module maps a requested path to a file under the document root,
//! rejecting paths that would escape it.

use std::path::{Component, Path, PathBuf};

use tokio::fs;

use crate::config::SiteConfig;
use crate::http::mime;

/// Body served with a 404 when the configured not-found page is itself
/// missing. The server must always produce some response.
const FALLBACK_NOT_FOUND: &[u8] =
    b"<html><head></head><body>\n<h2>404 Not Found</h2>\n</body></html>\n";

/// Outcome of resolving a requested path.
#[derive(Debug)]
pub enum Resolution {
    /// The path mapped to a readable file under the document root.
    Found {
        body: Vec<u8>,
        content_type: &'static str,
    },
    /// Missing file, rejected path, or unreadable file.
    NotFound,
}

/// Maps requested paths to files under the document root.
///
/// Holds only read-only configuration, so each connection gets its own
/// clone and no state is shared between workers.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: SiteConfig,
}

impl Resolver {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// The fixed identifying string for the Server header and template token.
    pub fn server_name(&self) -> &str {
        &self.config.server_name
    }

    /// Resolves a requested path (relative, leading slashes already
    /// stripped) to a file under the document root.
    ///
    /// The path is normalized lexically before touching the filesystem:
    /// `..` components pop, and popping past the root rejects the request,
    /// so a traversal attempt can never read outside the document root.
    /// The empty path resolves to the configured index file. Any read
    /// failure (missing file, directory, permissions, deleted in a race)
    /// is NotFound.
    pub async fn resolve(&self, path: &str) -> Resolution {
        let Some(relative) = normalize(path) else {
            tracing::warn!(path = %path, "rejected path escaping document root");
            return Resolution::NotFound;
        };

        let relative = if relative.as_os_str().is_empty() {
            PathBuf::from(&self.config.index_file)
        } else {
            relative
        };

        let full = self.config.doc_root.join(&relative);

        match fs::read(&full).await {
            Ok(body) => Resolution::Found {
                body,
                content_type: mime::content_type(&full),
            },
            Err(e) => {
                tracing::debug!(path = %full.display(), error = %e, "file not readable");
                Resolution::NotFound
            }
        }
    }

    /// Body for 404 responses: the configured not-found page, or the
    /// inline fallback when that page does not exist.
    pub async fn not_found_body(&self) -> Vec<u8> {
        let page = self.config.doc_root.join(&self.config.not_found_page);

        match fs::read(&page).await {
            Ok(body) => body,
            Err(_) => FALLBACK_NOT_FOUND.to_vec(),
        }
    }
}

/// Lexically normalizes a relative request path.
///
/// Returns None when the path would escape the document root or carries an
/// absolute component.
fn normalize(path: &str) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(normalized)
}

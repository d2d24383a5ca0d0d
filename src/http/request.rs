/// Represents a parsed HTTP request from a client.
///
/// Only the request line carries meaning for this server: the method must be
/// GET (enforced by the parser) and header lines are read but discarded, so
/// neither is stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The requested path, relative to the document root (leading slashes
    /// stripped). Empty means "serve the index page".
    pub path: String,
    /// HTTP version from the request line (typically "HTTP/1.1").
    pub version: String,
}

impl Request {
    /// True when the client asked for the root, i.e. the index page.
    pub fn is_index(&self) -> bool {
        self.path.is_empty()
    }
}

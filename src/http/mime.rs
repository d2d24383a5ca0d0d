//! Content-type detection based on file extensions.

use std::path::Path;

pub const TEXT_HTML: &str = "text/html";
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Maps a file extension to its content type.
///
/// Unknown extensions (and files without one) map to
/// `application/octet-stream` so the Content-Type header is never empty.
pub fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html") => TEXT_HTML,
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type(Path::new("index.html")), "text/html");
        assert_eq!(content_type(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(content_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(content_type(Path::new("logo.png")), "image/png");
        assert_eq!(content_type(Path::new("anim.gif")), "image/gif");
    }

    #[test]
    fn unknown_extension_defaults_to_binary() {
        assert_eq!(content_type(Path::new("data.bin")), OCTET_STREAM);
        assert_eq!(content_type(Path::new("noextension")), OCTET_STREAM);
    }
}

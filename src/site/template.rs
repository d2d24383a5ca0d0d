//! Serve-time template token substitution
//!
//! HTML bodies may contain two literal placeholder tokens that are replaced
//! on every request. Replacement is plain substring matching on bytes, not
//! HTML-aware, so it is safe to run on any text/html body.

/// Replaced with the current date.
pub const DATE_TOKEN: &[u8] = b"<cs371date>";
/// Replaced with the configured server name.
pub const SERVER_TOKEN: &[u8] = b"<cs371server>";

/// Substitutes every occurrence of both tokens in an HTML body.
///
/// The date here is a human-readable `dd/mm/yyyy`, not the RFC-1123 form
/// used in the Date header.
pub fn render(input: &[u8], server_name: &str) -> Vec<u8> {
    let date = chrono::Utc::now().format("%d/%m/%Y").to_string();

    let output = replace_all(input, DATE_TOKEN, date.as_bytes());
    replace_all(&output, SERVER_TOKEN, server_name.as_bytes())
}

fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(pos) = find(rest, needle) {
        output.extend_from_slice(&rest[..pos]);
        output.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }

    output.extend_from_slice(rest);
    output
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_all_multiple_occurrences() {
        let out = replace_all(b"x<t>y<t>z", b"<t>", b"!");
        assert_eq!(out, b"x!y!z");
    }

    #[test]
    fn replace_all_no_match_is_identity() {
        let out = replace_all(b"plain text", b"<t>", b"!");
        assert_eq!(out, b"plain text");
    }

    #[test]
    fn replace_all_adjacent_needles() {
        let out = replace_all(b"<t><t>", b"<t>", b"ab");
        assert_eq!(out, b"abab");
    }
}

use tinyserve::http::response::{ResponseBuilder, StatusCode, http_date};
use tinyserve::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_headers_keep_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Date", "today")
        .header("Server", "tinyserve")
        .header("Connection", "close")
        .header("Content-Type", "text/html")
        .body(b"test".to_vec())
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["Date", "Server", "Connection", "Content-Type"]);
}

#[test]
fn test_response_header_lookup_is_case_insensitive() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "image/png")
        .build();

    assert_eq!(response.header("content-type"), Some("image/png"));
    assert_eq!(response.header("X-Missing"), None);
}

#[test]
fn test_serialize_status_line() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();
    let wire = serialize_response(&response);

    assert!(wire.starts_with(b"HTTP/1.1 404 Not Found\n"));
}

#[test]
fn test_serialize_header_block_format() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Connection", "close")
        .header("Content-Type", "text/html")
        .body(b"<html></html>".to_vec())
        .build();

    let wire = serialize_response(&response);
    let text = String::from_utf8(wire).unwrap();
    let (head, body) = text.split_once("\n\n").unwrap();

    assert_eq!(body, "<html></html>");
    for line in head.lines().skip(1) {
        let (name, value) = line.split_once(": ").unwrap();
        assert!(!name.is_empty());
        assert!(!value.is_empty());
    }
}

#[test]
fn test_serialize_single_blank_line_before_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .body(b"body".to_vec())
        .build();

    let wire = serialize_response(&response);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.contains("\n\nbody"));
    assert!(!text.contains("\n\n\nbody"));
}

#[test]
fn test_serialize_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .build();

    let wire = serialize_response(&response);

    assert!(wire.ends_with(b"\n\n"));
}

#[test]
fn test_http_date_format() {
    let date = http_date();

    // E.g. "Sat, 30 Aug 2026 12:00:00 GMT"
    assert!(date.ends_with(" GMT"));
    assert_eq!(date.len(), "Sat, 30 Aug 2026 12:00:00 GMT".len());
    assert_eq!(&date[3..5], ", ");
}

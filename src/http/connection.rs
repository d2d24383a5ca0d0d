use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::mime;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode, http_date};
use crate::http::writer::ResponseWriter;
use crate::site::resolver::{Resolution, Resolver};
use crate::site::template;

/// Handles one connection end-to-end: exactly one request, one response,
/// then close. Generic over the stream so tests can drive it with an
/// in-memory duplex pipe.
pub struct Connection<S> {
    stream: S,
    buffer: Vec<u8>,
    state: ConnectionState,
    resolver: Resolver,
    deadline: Duration,
}

enum ConnectionState {
    Reading,
    Processing(RequestOutcome),
    Writing(ResponseWriter),
    Closed,
}

/// What the read phase produced. A malformed, truncated or non-GET request
/// is not an error; it degrades to the not-found response.
enum RequestOutcome {
    Request(Request),
    Malformed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Resolver, deadline: Duration) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(4096),
            state: ConnectionState::Reading,
            resolver,
            deadline,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => {
                    let outcome = timeout(self.deadline, self.read_request())
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out reading request"))??;
                    ConnectionState::Processing(outcome)
                }

                ConnectionState::Processing(outcome) => {
                    let response = self.handle_request(&outcome).await;
                    ConnectionState::Writing(ResponseWriter::new(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    timeout(self.deadline, writer.write_to_stream(&mut self.stream))
                        .await
                        .map_err(|_| anyhow::anyhow!("timed out writing response"))??;

                    // One request per connection: writing always closes.
                    self.stream.shutdown().await.ok();
                    ConnectionState::Closed
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<RequestOutcome> {
        loop {
            // Try parsing whatever we already have
            match parser::parse_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.drain(..consumed);
                    return Ok(RequestOutcome::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    tracing::debug!(error = ?e, "malformed request");
                    return Ok(RequestOutcome::Malformed);
                }
            }

            // Read more data
            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Stream ended before the header block was terminated.
                // Whatever request line made it through still gets served.
                return Ok(self.parse_partial());
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    fn parse_partial(&self) -> RequestOutcome {
        let text = String::from_utf8_lossy(&self.buffer);
        let first_line = text.lines().next().unwrap_or("");

        match parser::parse_request_line(first_line) {
            Ok(request) => RequestOutcome::Request(request),
            Err(e) => {
                tracing::debug!(error = ?e, "unusable partial request");
                RequestOutcome::Malformed
            }
        }
    }

    async fn handle_request(&self, outcome: &RequestOutcome) -> Response {
        match outcome {
            RequestOutcome::Request(request) => {
                tracing::debug!(path = %request.path, "resolving request");

                match self.resolver.resolve(&request.path).await {
                    Resolution::Found { body, content_type } => {
                        self.build_response(StatusCode::Ok, content_type, body)
                    }
                    Resolution::NotFound => self.not_found_response().await,
                }
            }
            RequestOutcome::Malformed => self.not_found_response().await,
        }
    }

    async fn not_found_response(&self) -> Response {
        let body = self.resolver.not_found_body().await;
        self.build_response(StatusCode::NotFound, mime::TEXT_HTML, body)
    }

    fn build_response(&self, status: StatusCode, content_type: &str, body: Vec<u8>) -> Response {
        // Template tokens are only recognized inside HTML bodies; anything
        // else is served byte-identical.
        let body = if content_type == mime::TEXT_HTML {
            template::render(&body, self.resolver.server_name())
        } else {
            body
        };

        ResponseBuilder::new(status)
            .header("Date", http_date())
            .header("Server", self.resolver.server_name())
            .header("Connection", "close")
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }
}

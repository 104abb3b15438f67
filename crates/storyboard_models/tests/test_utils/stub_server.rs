//! Minimal single-request HTTP server for exercising the REST client.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the client sent.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request line, e.g. `POST /models/x:generateContent HTTP/1.1`
    pub request_line: String,
    /// Header block, lowercased
    pub headers: String,
    /// Parsed JSON body
    pub body: serde_json::Value,
}

/// Serves exactly one canned response.
pub struct StubServer {
    /// Base URL to configure the client with
    pub base_url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl StubServer {
    /// Start a server answering with `status` (e.g. `200 OK`) and a JSON body.
    pub async fn start(status: &'static str, body: serde_json::Value) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers were complete");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find(&buf, b"\r\n\r\n") {
                    break pos;
                }
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let mut lines = head.split("\r\n");
            let request_line = lines.next().unwrap_or_default().to_string();
            let headers = lines.collect::<Vec<_>>().join("\n").to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);

            let body_start = header_end + 4;
            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body was complete");
                buf.extend_from_slice(&chunk[..n]);
            }
            let request_body =
                serde_json::from_slice(&buf[body_start..body_start + content_length])
                    .unwrap_or(serde_json::Value::Null);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            CapturedRequest {
                request_line,
                headers,
                body: request_body,
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    /// Wait for the request to be served and return what was captured.
    pub async fn captured(self) -> CapturedRequest {
        self.handle.await.unwrap()
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

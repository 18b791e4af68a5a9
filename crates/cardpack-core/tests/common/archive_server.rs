//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body to every GET. Can be told to answer with a
//! fixed error status, or to reject requests whose User-Agent does not look
//! like a browser (the real card host does this).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// Status line sent with the body.
    pub status: &'static str,
    /// If true, answer 403 unless the User-Agent starts with "Mozilla/".
    pub require_browser_agent: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            require_browser_agent: false,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the URL
/// (e.g. "http://127.0.0.1:12345/cards.zip"). The server runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, ServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/cards.zip", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, user_agent) = parse_request(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let browser = user_agent.is_some_and(|ua| ua.starts_with("Mozilla/"));
    let (status, payload): (&str, &[u8]) = if opts.require_browser_agent && !browser {
        ("403 Forbidden", &b"<html><body>Forbidden</body></html>"[..])
    } else {
        (opts.status, body)
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        payload.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(payload);
}

/// Returns (method, User-Agent header value if present).
fn parse_request(request: &str) -> (&str, Option<&str>) {
    let mut method = "";
    let mut user_agent = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if method.is_empty() {
            method = line.split_whitespace().next().unwrap_or("");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim());
            }
        }
    }
    (method, user_agent)
}

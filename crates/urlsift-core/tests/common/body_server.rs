//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed bodies per request path. Each route can override the status,
//! redirect elsewhere, or lie about `Content-Length` to cut the body short.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub body: Vec<u8>,
    /// Sent as `Location` when set.
    pub location: Option<String>,
    /// Advertise this many extra bytes that never arrive.
    pub short_by: usize,
    /// Hold the connection this long without answering.
    pub stall: Option<Duration>,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self {
            status: "200 OK",
            body: body.as_bytes().to_vec(),
            location: None,
            short_by: 0,
            stall: None,
        }
    }

    pub fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            ..Self::ok(body)
        }
    }

    pub fn redirect(to: &str) -> Self {
        Self {
            status: "302 Found",
            body: Vec::new(),
            location: Some(to.to_string()),
            short_by: 0,
            stall: None,
        }
    }

    /// Reads the request and never sends a response.
    pub fn stalled(hold: Duration) -> Self {
        Self {
            stall: Some(hold),
            ..Self::ok("")
        }
    }

    pub fn truncated(body: &str, short_by: usize) -> Self {
        Self {
            short_by,
            ..Self::ok(body)
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let route = match routes.get(path) {
        Some(r) => r.clone(),
        None => Route::status("404 Not Found", ""),
    };
    if let Some(stall) = route.stall {
        thread::sleep(stall);
        return;
    }
    let location = route
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        route.status,
        route.body.len() + route.short_by,
        location
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
}

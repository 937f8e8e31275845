//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of paths, each with its own status and body, and
//! records every request line and headers it receives. Routes can be added
//! after start so a search page can point back at the server's own images.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
struct Route {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

/// A received request: first line plus header lines.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub request_line: String,
    pub headers: Vec<String>,
}

impl Recorded {
    pub fn path(&self) -> &str {
        self.request_line.split_whitespace().nth(1).unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find_map(|h| {
            let (k, v) = h.split_once(':')?;
            k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }
}

#[derive(Clone)]
pub struct ImageServer {
    base: String,
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl ImageServer {
    /// Starts a server in a background thread. Unknown paths get 404.
    /// The server runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let server = Self {
            base: format!("http://127.0.0.1:{}", port),
            routes: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let routes = Arc::clone(&server.routes);
        let requests = Arc::clone(&server.requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&requests);
                thread::spawn(move || handle(stream, &routes, &requests));
            }
        });
        server
    }

    /// Absolute URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn image(&self, path: &str, body: &[u8]) {
        self.route(path, 200, "image/jpeg", body.to_vec());
    }

    pub fn html(&self, path: &str, body: &str) {
        self.route(path, 200, "text/html; charset=utf-8", body.as_bytes().to_vec());
    }

    pub fn status(&self, path: &str, status: u16) {
        self.route(path, status, "text/plain", b"error".to_vec());
    }

    fn route(&self, path: &str, status: u16, content_type: &'static str, body: Vec<u8>) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            Route {
                status,
                content_type,
                body,
            },
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// A results page with one `.iusc` element per URL, metadata entity-encoded
/// the way the provider sends it.
pub fn results_page(murls: &[String]) -> String {
    let items: String = murls
        .iter()
        .map(|u| {
            format!(
                "<li><div class=\"imgpt\"><a class=\"iusc\" m=\"{{&quot;purl&quot;:&quot;https://site.example/p&quot;,&quot;murl&quot;:&quot;{}&quot;}}\" href=\"/images/search?view=detailV2\"><img class=\"mimg\" src=\"/th?id=x\"></a></div></li>",
                u
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>results</title></head><body><ul class=\"dgControl_list\">{}</ul></body></html>",
        items
    )
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &Mutex<HashMap<String, Route>>,
    requests: &Mutex<Vec<Recorded>>,
) {
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

    let mut lines = request.lines().map(str::trim).take_while(|l| !l.is_empty());
    let request_line = lines.next().unwrap_or("").to_string();
    let headers: Vec<String> = lines.map(str::to_string).collect();
    let recorded = Recorded {
        request_line,
        headers,
    };
    let path = recorded.path().split('?').next().unwrap_or("").to_string();
    requests.lock().unwrap().push(recorded);

    let route = routes.lock().unwrap().get(&path).cloned();
    let route = route.unwrap_or(Route {
        status: 404,
        content_type: "text/plain",
        body: b"not found".to_vec(),
    });
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

//! Minimal HTTP/1.1 responder for tests. Serves canned bodies by path,
//! 404 for anything else, and records every requested path. A route can
//! declare a longer Content-Length than it sends to cut the body short.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

struct Route {
    status: u16,
    body: Vec<u8>,
    content_length: usize,
}

type Routes = HashMap<String, Route>;

pub struct TestServer {
    addr: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn start(routes: &[(&str, u16, &[u8])]) -> Self {
        let routes = routes
            .iter()
            .map(|(path, status, body)| {
                let route = Route {
                    status: *status,
                    body: body.to_vec(),
                    content_length: body.len(),
                };
                (path.to_string(), route)
            })
            .collect();
        Self::spawn(routes)
    }

    /// Answer `path` with 200, announce `content_length` bytes, send `body`
    /// and close the connection.
    pub fn start_truncated(path: &str, content_length: usize, body: &[u8]) -> Self {
        let route = Route {
            status: 200,
            body: body.to_vec(),
            content_length,
        };
        Self::spawn([(path.to_string(), route)].into())
    }

    fn spawn(routes: Routes) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                serve(stream, &routes, &seen);
            }
        });
        Self { addr, requests }
    }

    /// URL of a port nothing listens on.
    pub fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(stream: TcpStream, routes: &Routes, seen: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }
    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(path.clone());

    let not_found = Route {
        status: 404,
        body: b"not found".to_vec(),
        content_length: 9,
    };
    let route = routes.get(&path).unwrap_or(&not_found);
    let mut stream = reader.into_inner();
    let head = format!(
        "HTTP/1.1 {} X\r\nContent-Length: {}\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n",
        route.status, route.content_length
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
    let _ = stream.shutdown(Shutdown::Write);
}

/// A client that ignores proxy settings from the environment.
pub fn test_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

// tests/common/mod.rs

//! Shared fixtures for the integration tests: a loopback HTTP server with
//! canned responses, a gzip helper, and a reporter that collects messages.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Mutex;
use std::thread;

use aptsync::Reporter;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Gzip-compress a byte string
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Reporter that records every message for later assertions
#[derive(Default)]
pub struct CollectingReporter {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_messages(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Reporter for CollectingReporter {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Serve canned bodies over loopback HTTP
///
/// Routes map request paths to response bodies; any other path gets a 404.
/// The acceptor thread runs for the rest of the test process.
pub fn spawn_http_server(routes: HashMap<String, Vec<u8>>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            let routes = routes.clone();
            thread::spawn(move || handle_connection(stream, &routes));
        }
    });

    addr
}

fn handle_connection(stream: TcpStream, routes: &HashMap<String, Vec<u8>>) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }

    // Drain headers up to the blank line.
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) => return,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let mut stream = reader.into_inner();

    match routes.get(path) {
        Some(body) => {
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}

/// An address nothing listens on
///
/// Binds an ephemeral port and immediately releases it; connecting to it
/// afterwards is refused.
pub fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

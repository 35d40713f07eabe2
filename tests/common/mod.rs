#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Canned reply for one request path.
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }
    }
}

/// Start a throwaway HTTP server answering from `routes`; unknown paths get
/// a 404. Returns the base URL to hand to `--api-base`.
pub fn serve(routes: Vec<(&str, Reply)>) -> String {
    let routes: HashMap<String, Reply> = routes
        .into_iter()
        .map(|(path, reply)| (path.to_string(), reply))
        .collect();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let _ = answer(stream, &routes);
        }
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn answer(stream: TcpStream, routes: &HashMap<String, Reply>) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
    let reply = routes.get(&path).cloned().unwrap_or_else(Reply::not_found);
    let reason = if reply.status == 200 { "OK" } else { "Not Found" };

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason,
        reply.body.len(),
        reply.body
    )?;
    stream.flush()
}

pub fn octocat_profile() -> String {
    r#"{
        "login": "octocat",
        "name": "The Octocat",
        "bio": null,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "public_repos": 8,
        "followers": 100,
        "following": 9,
        "company": "@github"
    }"#
    .to_string()
}

pub fn octocat_repos() -> String {
    r#"[
        {"name": "five", "html_url": "https://github.com/octocat/five", "description": "five stars", "stargazers_count": 5, "forks_count": 2, "language": "Ruby"},
        {"name": "one", "html_url": "https://github.com/octocat/one", "description": null, "stargazers_count": 1, "forks_count": 0, "language": null},
        {"name": "nine", "html_url": "https://github.com/octocat/nine", "description": "nine stars", "stargazers_count": 9, "forks_count": 4, "language": "Ruby"}
    ]"#
    .to_string()
}

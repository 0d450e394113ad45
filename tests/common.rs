#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

/// Binary under test, isolated from the user's real config directory.
pub fn rti() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("shared_alfahub_home");
    fs::create_dir_all(&home).ok();
    rti_in(&home)
}

/// Binary under test with HOME pointing at `home`.
pub fn rti_in(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("alfahub");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("RUST_LOG");
    cmd
}

/// Per-test fake home directory, created empty.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_alfahub_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_alfahub.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const EVENTS_CSV: &str = "Title,Date,Venue\n\
Tech Talk,2025-01-10,Hall A\n\
Hackathon 2025,2025-03-14,Lab 3\n\
Cultural Night,2025-02-01,Auditorium\n";

/// Same rows, upstream order changed.
pub const EVENTS_CSV_REORDERED: &str = "Title,Date,Venue\n\
Cultural Night,2025-02-01,Auditorium\n\
Tech Talk,2025-01-10,Hall A\n\
Hackathon 2025,2025-03-14,Lab 3\n";

pub const HTML_PAGE: &str = "<!DOCTYPE html><html><head><script></script></head><body>Sign in</body></html>";

/// Tiny HTTP server serving canned responses in order; the last one repeats.
pub struct FixtureServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    pub fn serve(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let responses: Vec<(u16, String)> =
            responses.into_iter().map(|(s, b)| (s, b.to_string())).collect();

        thread::spawn(move || {
            for (served, stream) in listener.incoming().enumerate() {
                let Ok(mut stream) = stream else { continue };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf);
                let path = head
                    .lines()
                    .next()
                    .and_then(|l| l.split_whitespace().nth(1))
                    .unwrap_or("")
                    .to_string();
                seen.lock().expect("lock").push(path);

                let (status, body) = &responses[served.min(responses.len() - 1)];
                let reason = if *status == 200 { "OK" } else { "Error" };
                let reply = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(reply.as_bytes());
            }
        });

        Self {
            base: format!("http://{addr}"),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock").clone()
    }
}

/// Write a config file into a fake home, with every source pointing at `url`.
pub fn write_config(home: &PathBuf, db_path: &str, url: &str) {
    let dir = home.join(".alfahub");
    fs::create_dir_all(&dir).expect("config dir");
    let sources = [
        "notifications",
        "clubs",
        "events",
        "pg_rooms",
        "duty_leaves",
        "notes",
        "free_courses",
        "deals",
        "ai_tools",
        "youtube_channels",
    ]
    .iter()
    .map(|k| format!("  {k}: {url}\n"))
    .collect::<String>();

    let yaml = format!(
        "database: {db_path}\nsources:\n{sources}retries: 1\nbackoff_ms: 10\ntimeout_secs: 5\npoll_interval_secs: 1\norigin: localhost\n"
    );
    fs::write(dir.join("alfahub.conf"), yaml).expect("write config");
}

// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use prefixlog::{Capabilities, Logger, LoggerBuilder};

/// In-memory writer that can be handed to a logger and read back afterwards
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Build a logger whose output and diagnostics are captured
pub fn captured(builder: LoggerBuilder, color_available: bool) -> (Logger, Capture, Capture) {
    let out = Capture::default();
    let diag = Capture::default();
    let log = builder
        .capabilities(Capabilities {
            color: color_available,
        })
        .output(out.clone())
        .diagnostics(diag.clone())
        .build();
    (log, out, diag)
}

/// Check that `prefix` starts with a `[HH:MM:SS.mmm]` segment and return the rest
pub fn strip_time_segment(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() < 14 || bytes[0] != b'[' || bytes[13] != b']' {
        return None;
    }
    let digits_at = [1, 2, 4, 5, 7, 8, 10, 11, 12];
    let separators_ok = bytes[3] == b':' && bytes[6] == b':' && bytes[9] == b'.';
    if !separators_ok || !digits_at.iter().all(|&i| bytes[i].is_ascii_digit()) {
        return None;
    }
    Some(&line[14..])
}

/// Run the built binary with the given arguments
pub fn run_prefixlog(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_prefixlog"))
        .args(args)
        .env_remove("FORCE_COLOR")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute prefixlog");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

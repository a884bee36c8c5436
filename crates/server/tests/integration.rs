// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the lq-server binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Helper to spawn a server process and clean it up on drop.
struct ServerProcess {
    child: Child,
    port: u16,
}

impl ServerProcess {
    fn spawn() -> Self {
        // High ephemeral port, varied per test process
        let port = 50152 + (std::process::id() % 1000) as u16;

        let child = Command::new(env!("CARGO_BIN_EXE_lq-server"))
            .arg("--bind")
            .arg(format!("127.0.0.1:{}", port))
            .arg("--jq")
            .arg("/nonexistent/lq-server-test/jq")
            .env_remove("PORT")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn server process");

        ServerProcess { child, port }
    }

    async fn request(&self, method: &str, path: &str, body: &str) -> Option<String> {
        let mut stream = TcpStream::connect(("127.0.0.1", self.port)).await.ok()?;
        let request = format!(
            "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
             Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(request.as_bytes()).await.ok()?;
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.ok()?;
        Some(raw)
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[tokio::test]
async fn test_server_lifecycle() {
    let server = ServerProcess::spawn();

    // CI runners can be slow, so retry generously
    let mut version = None;
    for _ in 0..20 {
        if let Ok(Some(raw)) = tokio::time::timeout(
            Duration::from_millis(500),
            server.request("GET", "/api/version", ""),
        )
        .await
        {
            version = Some(raw);
            break;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    let version = version.expect("should reach server within retries");
    assert!(version.starts_with("HTTP/1.1 200"), "got: {version}");
    assert!(version.contains(r#""version":"unknown""#), "got: {version}");

    let explain = server
        .request("POST", "/api/explain", r#"{"filter":".a | keys"}"#)
        .await
        .expect("explain response");
    assert!(explain.contains(r#""category":"builtin""#), "got: {explain}");

    // jq is missing: evaluation fails as data, not as a transport error
    let eval = server
        .request("POST", "/api/jq", r#"{"filter":"."}"#)
        .await
        .expect("eval response");
    assert!(eval.starts_with("HTTP/1.1 200"), "got: {eval}");
    assert!(eval.contains(r#""error":"failed to launch"#), "got: {eval}");
}

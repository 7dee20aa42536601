//! Shared test harness: a scripted bridge daemon answering the JSON Lines
//! protocol on a real Unix socket.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;

use cursor_pool_client::{ClientConfig, IpcReply, IpcRequest, PoolClient};

/// Atomic counter for generating unique socket paths across parallel tests.
static TEST_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Generates a unique socket path within a temporary directory.
///
/// This ensures test isolation when running tests in parallel.
pub fn unique_socket_path(temp_dir: &TempDir, prefix: &str) -> PathBuf {
    let count = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    temp_dir.path().join(format!("{}_{}.sock", prefix, count))
}

/// A scripted bridge daemon on a Unix socket.
///
/// Serves one request per connection, matching the client's one-round-trip-
/// per-invocation behavior: reads a request line, pops the next scripted
/// reply for that command, writes it back. Commands without a scripted reply
/// are rejected with a recognizable diagnostic. Every received request is
/// recorded for assertions.
pub struct MockBackend {
    /// Path of the listening socket.
    pub socket_path: PathBuf,
    requests: Arc<Mutex<Vec<IpcRequest>>>,
    accept_handle: tokio::task::JoinHandle<()>,
    _temp_dir: TempDir,
}

impl MockBackend {
    /// Starts the daemon with a per-command reply script.
    pub async fn start(script: Vec<(&str, Vec<IpcReply>)>) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let socket_path = unique_socket_path(&temp_dir, "bridge");
        let listener = UnixListener::bind(&socket_path).expect("failed to bind mock socket");

        let script: Arc<Mutex<HashMap<String, VecDeque<IpcReply>>>> = Arc::new(Mutex::new(
            script
                .into_iter()
                .map(|(cmd, replies)| (cmd.to_string(), replies.into()))
                .collect(),
        ));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let accept_handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let script = Arc::clone(&script);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let (read_half, mut write_half) = stream.into_split();
                    let mut reader = BufReader::new(read_half);
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        return;
                    }
                    let request: IpcRequest =
                        serde_json::from_str(&line).expect("malformed request line");
                    let reply = {
                        let mut script = script.lock().unwrap();
                        script.get_mut(&request.cmd).and_then(|q| q.pop_front())
                    }
                    .unwrap_or_else(|| {
                        IpcReply::rejected(format!("unscripted command: {}", request.cmd))
                    });
                    recorded.lock().unwrap().push(request);
                    let _ = write_half.write_all(reply.to_json_line().as_bytes()).await;
                });
            }
        });

        Self {
            socket_path,
            requests,
            accept_handle,
            _temp_dir: temp_dir,
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<IpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Client config pointing at this backend, with short poll timings so
    /// waiting tests stay fast.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            socket_path: self.socket_path.display().to_string(),
            poll_interval: "20ms".to_string(),
            close_timeout: "200ms".to_string(),
            ..ClientConfig::default()
        }
    }

    /// A client wired to this backend.
    pub fn client(&self) -> PoolClient {
        PoolClient::new(&self.config())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.accept_handle.abort();
    }
}

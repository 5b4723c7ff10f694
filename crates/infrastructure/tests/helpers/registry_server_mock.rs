#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Mutex};

/// Canned HTTP response served by `MockRegistryServer`.
#[derive(Clone)]
pub struct MockResponse {
    status_line: String,
    body: Vec<u8>,
    content_length: bool,
    hang: bool,
}

impl MockResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_line: "HTTP/1.1 200 OK".to_string(),
            body: body.into(),
            content_length: true,
            hang: false,
        }
    }

    pub fn status(code: u16, reason: &str) -> Self {
        Self {
            status_line: format!("HTTP/1.1 {} {}", code, reason),
            ..Self::ok("")
        }
    }

    /// Never answer; the connection stays open until shutdown.
    pub fn hang() -> Self {
        Self {
            hang: true,
            ..Self::ok("")
        }
    }

    /// Omit `Content-Length` and delimit the body by closing the connection.
    pub fn without_content_length(mut self) -> Self {
        self.content_length = false;
        self
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "{}\r\nContent-Type: application/json\r\nConnection: close\r\n",
            self.status_line
        );
        if self.content_length {
            head.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        }
        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// A captured HTTP request: lower-cased head and raw body.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Minimal HTTP/1.1 registry daemon answering every request with one response.
pub struct MockRegistryServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRegistryServer {
    pub async fn start(response: MockResponse) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let captured = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        if response.hang {
                            // Hold the socket open without answering.
                            tokio::spawn(async move {
                                tokio::time::sleep(Duration::from_secs(30)).await;
                                drop(stream);
                            });
                            continue;
                        }
                        let _ = Self::serve(stream, &response, &captured).await;
                    }
                }
            }
        });

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// "host:port" form used by `RegistryEndpoint`.
    pub fn server(&self) -> String {
        self.addr.to_string()
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }

    async fn serve(
        mut stream: TcpStream,
        response: &MockResponse,
        captured: &Mutex<Vec<CapturedRequest>>,
    ) -> Result<(), std::io::Error> {
        let mut buf = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];

        let head_end = loop {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                return Ok(());
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < head_end + content_length {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let body = String::from_utf8_lossy(&buf[head_end..]).to_string();
        captured.lock().await.push(CapturedRequest { head, body });

        stream.write_all(&response.to_bytes()).await?;
        stream.shutdown().await?;
        Ok(())
    }
}

impl Drop for MockRegistryServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use super::session::SharedDataset;
use crate::data::Dataset;
use crate::protocol::LoadStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl HttpResponse {
    fn json(status: u16, value: &impl serde::Serialize) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self::error(500, "serialization failed")
            }
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: Some(serde_json::json!({ "error": message }).to_string()),
        }
    }

    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            204 => "No Content",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Internal Server Error",
        }
    }

    pub fn to_http(&self) -> String {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\n\
            Access-Control-Allow-Origin: *\r\n\
            Access-Control-Allow-Methods: GET, OPTIONS\r\n\
            Access-Control-Allow-Headers: Content-Type\r\n",
            self.status,
            self.reason()
        );
        match &self.body {
            Some(body) => out.push_str(&format!(
                "Content-Type: application/json\r\n\
                Content-Length: {}\r\n\
                \r\n\
                {}",
                body.len(),
                body
            )),
            None => out.push_str("\r\n"),
        }
        out
    }
}

/// Routes one raw request against the current dataset.
///
/// - `GET /api/benchmarks` – every category
/// - `GET /api/benchmarks/{id}` – one category, 404 if unknown
/// - `GET /api/health` – load status
/// - `OPTIONS *` – CORS preflight
pub fn route(request: &str, dataset: &Dataset) -> HttpResponse {
    let mut parts = request.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default();
    let target = parts.next().unwrap_or_default();
    let path = target.split('?').next().unwrap_or_default().trim_end_matches('/');

    if method == "OPTIONS" {
        return HttpResponse {
            status: 204,
            body: None,
        };
    }
    if method != "GET" {
        return HttpResponse::error(405, "only GET is supported");
    }

    match path {
        "/api/benchmarks" => HttpResponse::json(200, &dataset.categories()),
        "/api/health" => {
            let body = match dataset.status() {
                LoadStatus::Ready => serde_json::json!({
                    "status": "ready",
                    "categories": dataset.categories().len(),
                }),
                LoadStatus::Unavailable { message } => serde_json::json!({
                    "status": "unavailable",
                    "message": message,
                    "categories": dataset.categories().len(),
                }),
            };
            HttpResponse::json(200, &body)
        }
        _ => match path.strip_prefix("/api/benchmarks/") {
            // Exact lookup here: an unknown id is a 404, not the first tab.
            Some(id) => match dataset.categories().iter().find(|c| c.id == id) {
                Some(category) => HttpResponse::json(200, category),
                None => HttpResponse::error(404, "unknown category"),
            },
            None => HttpResponse::error(404, "not found"),
        },
    }
}

/// Lightweight JSON API for the raw leaderboard data.
pub async fn start(addr: String, dataset: SharedDataset) {
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind HTTP API on {}: {}", addr, e);
            return;
        }
    };

    info!("HTTP API listening on http://{}", addr);

    loop {
        let (mut stream, _) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("HTTP API accept error: {}", e);
                continue;
            }
        };

        let dataset = dataset.clone();
        tokio::spawn(async move {
            let mut buf = [0u8; 4096];
            let n = match stream.read(&mut buf).await {
                Ok(n) => n,
                Err(_) => return,
            };
            let request = String::from_utf8_lossy(&buf[..n]);
            let snapshot = dataset.snapshot().await;
            let response = route(&request, &snapshot);
            debug!(
                "HTTP {} -> {}",
                request.lines().next().unwrap_or_default(),
                response.status
            );
            let _ = stream.write_all(response.to_http().as_bytes()).await;
        });
    }
}

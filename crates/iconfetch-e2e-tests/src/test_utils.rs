use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use eyre::Result;
use iconfetch_lib::manifest::{Manifest, Record};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use url::Url;

pub const ICON_PREFIX: &str = "/icon/";

#[derive(Clone, Debug)]
pub enum MockResponse {
    Ok(Vec<u8>),
    Status(u16),
    /// Accepts the request and never answers
    Stall,
}

#[derive(Default)]
struct MockState {
    /// Scripted responses per identifier; the last one is repeated once the queue drains
    responses: HashMap<String, VecDeque<MockResponse>>,
    requests: Vec<String>,
}

type SharedState = Arc<Mutex<MockState>>;

/// Icon host stand-in serving scripted responses under `/icon/{identifier}`.
pub struct MockIconServer {
    addr: std::net::SocketAddr,
    state: SharedState,
    handle: tokio::task::JoinHandle<()>,
}

impl MockIconServer {
    pub async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = SharedState::default();

        let app = Router::new()
            .route("/icon/{identifier}", get(serve_icon))
            .with_state(state.clone());
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::debug!("Mock icon server stopped: {}", err);
            }
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Queues a response for `<base_url>/<identifier>`.
    pub fn respond(&self, identifier: &str, response: MockResponse) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state
            .responses
            .entry(identifier.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn serve(&self, identifier: &str, body: &[u8]) {
        self.respond(identifier, MockResponse::Ok(body.to_vec()));
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}{}", self.addr, ICON_PREFIX)).expect("valid mock URL")
    }

    /// Identifiers requested so far, in arrival order.
    pub fn requested(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("mock state poisoned")
            .requests
            .clone()
    }
}

impl Drop for MockIconServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn next_response(state: &Mutex<MockState>, identifier: &str) -> MockResponse {
    let mut state = state.lock().expect("mock state poisoned");
    state.requests.push(identifier.to_string());
    match state.responses.get_mut(identifier) {
        Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or(MockResponse::Status(404)),
        Some(queue) => queue.front().cloned().unwrap_or(MockResponse::Status(404)),
        None => MockResponse::Status(404),
    }
}

async fn serve_icon(
    State(state): State<SharedState>,
    UrlPath(identifier): UrlPath<String>,
) -> Response {
    match next_response(&state, &identifier) {
        MockResponse::Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            body,
        )
            .into_response(),
        MockResponse::Status(status) => StatusCode::from_u16(status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockResponse::Stall => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
    }
}

pub fn manifest_of(support: &[&str], chara: &[&str]) -> Manifest {
    Manifest {
        support: support.iter().map(|id| Record::new(*id)).collect(),
        chara: chara.iter().map(|id| Record::new(*id)).collect(),
    }
}

/// Creates a temporary workspace holding `data.json` and an existing `icon/` directory.
pub fn setup_test_environment(manifest: &Manifest) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let manifest_path = temp_dir.path().join("data.json");
    std::fs::write(&manifest_path, serde_json::to_string_pretty(manifest)?)?;

    let output_dir = temp_dir.path().join("icon");
    std::fs::create_dir(&output_dir)?;

    Ok((temp_dir, manifest_path, output_dir))
}

pub fn read_output_dir(output_dir: &Path) -> Result<Vec<String>> {
    let mut names = std::fs::read_dir(output_dir)?
        .map(|entry| -> Result<String> { Ok(entry?.file_name().to_string_lossy().into_owned()) })
        .collect::<Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

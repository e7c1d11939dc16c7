//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Uri};
use axum::Router;
use tokio::sync::Notify;

use pathbot_cli::api::MazeApi;
use pathbot_cli::error::{ExplorerError, Result};
use pathbot_cli::location::{DirectionCommand, Location};
use reqwest::StatusCode;

/// Maze server replaying canned locations and recording every call.
#[derive(Default)]
pub struct ScriptedMaze {
    pub start: Option<Location>,
    pub responses: VecDeque<Location>,
    pub starts: usize,
    /// (path, direction) of each submission, in order.
    pub submissions: Vec<(String, String)>,
}

impl ScriptedMaze {
    pub fn new(start: Location, responses: impl IntoIterator<Item = Location>) -> Self {
        Self {
            start: Some(start),
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl MazeApi for ScriptedMaze {
    fn start(&mut self) -> Result<Location> {
        self.starts += 1;
        self.start.take().ok_or(ExplorerError::Protocol {
            status: StatusCode::CONFLICT,
            body: "session already started".into(),
        })
    }

    fn submit(&mut self, path: &str, command: &DirectionCommand) -> Result<Location> {
        self.submissions
            .push((path.to_string(), command.direction.clone()));
        self.responses.pop_front().ok_or(ExplorerError::Protocol {
            status: StatusCode::NOT_FOUND,
            body: "no more locations scripted".into(),
        })
    }
}

pub fn location(json: serde_json::Value) -> Location {
    Location::from_json(json.to_string().as_bytes()).expect("fixture is a valid location")
}

/// Request captured by [`serve_once`].
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct CannedReply {
    status: axum::http::StatusCode,
    body: &'static str,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    done: Arc<Notify>,
}

async fn record(
    State(reply): State<CannedReply>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (axum::http::StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *reply.captured.lock().expect("capture lock") = Some(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type,
        body,
    });
    reply.done.notify_one();
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Serve a single request on a local port with an axum router answering
/// `status` and `body`, then shut down and hand back what the client sent.
pub fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    listener.set_nonblocking(true).expect("non-blocking listener");
    let origin = format!("http://{}", listener.local_addr().expect("local addr"));

    let reply = CannedReply {
        status: axum::http::StatusCode::from_u16(status).expect("valid status code"),
        body,
        captured: Arc::new(Mutex::new(None)),
        done: Arc::new(Notify::new()),
    };

    let handle = thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let done = Arc::clone(&reply.done);
            let captured = Arc::clone(&reply.captured);
            let app = Router::new().fallback(record).with_state(reply);

            axum::serve(listener, app)
                .with_graceful_shutdown(async move { done.notified().await })
                .await
                .expect("test server");

            let request = captured.lock().expect("capture lock").take();
            request.expect("server saw a request")
        })
    });

    (origin, handle)
}

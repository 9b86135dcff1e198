//! Mock JSON-RPC node for client integration tests

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use valreg_rpc::{RpcErrorObject, RpcRequest, RpcResponse};

/// What the mock answers to one request
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    Result(serde_json::Value),
    Error(RpcErrorObject),
    Status(u16),
}

pub struct MockNode {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

struct MockState {
    queue: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<RpcRequest>>,
}

#[allow(dead_code)]
impl MockNode {
    /// Start a node that answers from `queue` in order, then with `fallback`.
    pub async fn start(queue: Vec<Reply>, fallback: Reply) -> Self {
        let state = Arc::new(MockState {
            queue: Mutex::new(queue.into()),
            fallback,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/", post(handle_rpc_post))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock node");
        let addr = listener.local_addr().expect("mock node address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock node server");
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle_rpc_post(
    State(state): State<Arc<MockState>>,
    Json(request): Json<RpcRequest>,
) -> axum::response::Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(request.clone());

    let reply = state
        .queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| state.fallback.clone());

    match reply {
        Reply::Result(value) => Json(RpcResponse::success(request.id, value)).into_response(),
        Reply::Error(error) => Json(RpcResponse::error(request.id, error)).into_response(),
        Reply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
    }
}

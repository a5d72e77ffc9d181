//! Web mode: every request renders a fresh animation and returns it as the
//! response body.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::animation::{DEFAULT_CYCLES, lissajous};
use crate::error::LissajousError;

pub const DEFAULT_ADDR: &str = "localhost:8000";

/// Per-server settings shared read-only by all requests.
#[derive(Debug, Clone, Default)]
pub struct ServerState {
    /// Seed every request's generator with this value instead of OS entropy.
    pub seed: Option<u64>,
}

/// Parse the `cycles` query value, falling back to `DEFAULT_CYCLES` when it
/// is missing or not a decimal integer. Zero and negative values pass
/// through unchanged.
pub fn parse_cycles(raw: Option<&str>) -> i64 {
    match raw {
        None => {
            warn!("missing cycles query parameter, using {}", DEFAULT_CYCLES);
            DEFAULT_CYCLES
        }
        Some(s) => s.parse::<i64>().unwrap_or_else(|e| {
            warn!("invalid cycles value {:?} ({}), using {}", s, e, DEFAULT_CYCLES);
            DEFAULT_CYCLES
        }),
    }
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", any(lissajous_handler))
        .fallback(lissajous_handler)
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the listener fails.
pub async fn serve(addr: &str, state: ServerState) -> Result<(), LissajousError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| LissajousError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    serve_listener(listener, state).await
}

pub async fn serve_listener(
    listener: TcpListener,
    state: ServerState,
) -> Result<(), LissajousError> {
    info!("Lissajous server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .map_err(LissajousError::Server)
}

async fn lissajous_handler(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let raw = params
        .iter()
        .find(|(key, _)| key == "cycles")
        .map(|(_, value)| value.as_str());
    let cycles = parse_cycles(raw);
    let seed = state.seed;
    debug!(cycles, ?seed, "rendering lissajous for request");

    match tokio::task::spawn_blocking(move || render(cycles, seed)).await {
        Ok(body) => ([(header::CONTENT_TYPE, "image/gif")], body).into_response(),
        Err(e) => {
            error!("{}", LissajousError::Task(e.to_string()));
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Encoding failures are logged; the partially written buffer is still sent.
fn render(cycles: i64, seed: Option<u64>) -> Vec<u8> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut body = Vec::new();
    if let Err(e) = lissajous(&mut body, cycles, &mut rng) {
        error!("failed to encode animation: {}", e);
    }
    body
}

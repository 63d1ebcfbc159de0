use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::PackError;
use crate::service::PackCalculator;
use crate::types::{PackResult, PackSize};

const INDEX_HTML: &str = include_str!("../templates/index.html");

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub calculator: PackCalculator,
}

impl AppState {
    pub fn new(calculator: PackCalculator) -> Self {
        Self { calculator }
    }
}

type ApiResult<T> = Result<T, Response>;

impl IntoResponse for PackError {
    fn into_response(self) -> Response {
        let status = match self {
            PackError::NoPackSizes => StatusCode::NOT_FOUND,
            PackError::OrderSizePositive
            | PackError::EmptyPackSizes
            | PackError::InvalidPackSize(_)
            | PackError::TooManyPackSizes(_)
            | PackError::OrderTooLarge { .. } => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}

fn bad_request(msg: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, msg).into_response()
}

/// First `orderSize` value wins when the key is repeated.
fn parse_order_size(pairs: &[(String, String)]) -> Option<i64> {
    pairs
        .iter()
        .find(|(key, _)| key == "orderSize")
        .and_then(|(_, value)| value.trim().parse().ok())
}

async fn calculate(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<PackResult>>> {
    let order_size = parse_order_size(&pairs).ok_or_else(|| bad_request("Invalid order size"))?;

    tracing::info!(order_size, "GET /api/calculate");

    let results = state
        .calculator
        .calculate(order_size)
        .map_err(IntoResponse::into_response)?;
    Ok(Json(results))
}

async fn get_pack_sizes(State(state): State<AppState>) -> Json<Vec<PackSize>> {
    Json(state.calculator.pack_sizes())
}

async fn update_pack_sizes(State(state): State<AppState>, body: Bytes) -> ApiResult<&'static str> {
    let sizes: Vec<i64> =
        serde_json::from_slice(&body).map_err(|_| bad_request("Invalid request body"))?;

    tracing::info!(?sizes, "PUT /api/pack-sizes");

    state
        .calculator
        .update_pack_sizes(&sizes)
        .map_err(IntoResponse::into_response)?;
    Ok("Pack sizes updated successfully")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Wraps `router` in the middleware stack every served route gets.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::new())
}

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/calculate", get(calculate))
        .route(
            "/api/pack-sizes",
            get(get_pack_sizes).put(update_pack_sizes),
        )
        .with_state(state);
    with_middleware(routes)
}

/// Serves `app` until `shutdown` resolves, then gives in-flight requests
/// `deadline` to finish before returning.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
    deadline: Duration,
) -> std::io::Result<()> {
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(deadline).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        res = server => res,
        _ = drain_deadline => {
            tracing::warn!(?deadline, "graceful shutdown timed out, dropping open connections");
            Ok(())
        }
    }
}

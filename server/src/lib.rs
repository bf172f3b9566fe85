//! HTTP surface of the todo service.
//!
//! # Design
//! - One `TodoStore` behind one `RwLock`, injected into the router as state.
//!   `app()` builds a fresh store, so every test gets an isolated service.
//! - Reads take the read lock, writes the write lock. The lock is held for a
//!   single store call; body decode and response encode run outside it.
//! - Cross-origin headers are a response layer over the whole router, so
//!   errors, 405s and preflights carry them too.

use std::{future::Future, sync::Arc};

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
        HeaderValue,
    },
    routing::{get, MethodRouter},
    Router,
};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers;

pub use todo_core::{Todo, TodoPayload};

pub type Db = Arc<RwLock<TodoStore>>;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

pub fn new_db() -> Db {
    Arc::new(RwLock::new(TodoStore::new()))
}

pub fn app() -> Router {
    app_with_db(new_db())
}

/// Build the router around an existing store handle.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/api/todos", collection_routes())
        .route("/api/todos/", item_routes())
        .route("/api/todos/{*id}", item_routes())
        .fallback(handlers::route_not_found)
        .with_state(db)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn collection_routes() -> MethodRouter<Db> {
    get(handlers::list_todos)
        .post(handlers::create_todo)
        .options(handlers::preflight)
        .head(handlers::collection_method_not_allowed)
        .fallback(handlers::collection_method_not_allowed)
}

fn item_routes() -> MethodRouter<Db> {
    get(handlers::get_todo)
        .put(handlers::replace_todo)
        .delete(handlers::delete_todo)
        .options(handlers::preflight)
        .head(handlers::item_method_not_allowed)
        .fallback(handlers::item_method_not_allowed)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_until(listener, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

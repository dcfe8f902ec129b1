pub mod booking;
pub mod catalog;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod settings;
pub mod timezone;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{book_class, get_bookings, get_classes, healthz_live, healthz_ready, root};
use http::{HeaderValue, Method, header};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::booking::{BookingEngine, BookingQuery};
use crate::catalog::ClassCatalog;
use crate::db::Database;
use crate::openapi::ApiDoc;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Arc<ClassCatalog>,
    pub engine: Arc<BookingEngine>,
    pub bookings: Arc<BookingQuery>,
}

impl AppState {
    pub fn new(settings: Settings, db: Database) -> Self {
        Self {
            settings,
            catalog: Arc::new(ClassCatalog::new(db.pool.clone())),
            engine: Arc::new(BookingEngine::new(db.pool.clone())),
            bookings: Arc::new(BookingQuery::new(db.pool)),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let db = Database::connect(&settings.database_url).await?;
    db.run_migrations().await?;

    let state = AppState::new(settings, db);
    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting Fitness Studio Booking API on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let cors_layer = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost"),
            HeaderValue::from_static("http://localhost:8000"),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let mut router = Router::new()
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/api/fitness_classes/", get(root))
        .route("/api/fitness_classes/classes", get(get_classes))
        .route("/api/fitness_classes/book", post(book_class))
        .route("/api/fitness_classes/bookings", get(get_bookings))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer).layer(cors_layer)
}

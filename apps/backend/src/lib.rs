pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use prepmate_core::RevisionScheduler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::sessions::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scheduler: Arc<Mutex<RevisionScheduler>>,
    pub sessions: Arc<SessionStore>,
    pub daily_reset_hour: u32,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(RevisionScheduler::new(config.intervals.clone()))),
            sessions: Arc::new(SessionStore::new()),
            daily_reset_hour: config.daily_reset_hour,
        }
    }

    /// Lock the scheduler for a single operation.
    ///
    /// Guards must be dropped before any `.await`.
    pub fn scheduler(&self) -> Result<MutexGuard<'_, RevisionScheduler>> {
        self.scheduler
            .lock()
            .map_err(|_| ApiError::Internal("scheduler lock poisoned".to_string()))
    }

    /// Current study day.
    pub fn today(&self) -> NaiveDate {
        prepmate_core::today(self.daily_reset_hour)
    }
}

/// Build the API router around `state`.
pub fn router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Session routes (sign-in is let through by the middleware)
        .route(
            "/api/session",
            get(routes::session::current)
                .post(routes::session::create)
                .delete(routes::session::delete),
        )
        // Revision routes
        .route("/api/revisions", get(routes::revisions::list))
        .route("/api/revisions/grouped", get(routes::revisions::grouped))
        .route("/api/revisions/stats", get(routes::revisions::stats))
        .route("/api/revisions/:id/toggle", post(routes::revisions::toggle))
        // Topic routes
        .route("/api/topics/complete", post(routes::topics::complete))
        // Planner routes
        .route("/api/planner/week", get(routes::planner::week))
        .route("/api/planner/tasks/validate", post(routes::planner::validate))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Revision intervals: {:?}, daily reset hour: {}",
        config.intervals.days(),
        config.daily_reset_hour
    );

    let state = AppState::new(&config);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

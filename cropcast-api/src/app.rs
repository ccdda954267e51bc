/// Application state and router builder
///
/// The shared state is built once in `main` — database pool, configuration,
/// and the two loaded models — and injected into every handler through
/// Axum's `State` extractor. Handlers hold no globals.
///
/// # Example
///
/// ```no_run
/// use cropcast_api::{app::AppState, config::Config};
/// use cropcast_shared::predict::{CropPredictor, FertilizerPredictor};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let crop = CropPredictor::load(&config.models.crop_path)?;
/// let fertilizer = FertilizerPredictor::load(&config.models.fertilizer_path)?;
/// let state = AppState::new(pool, config, crop, fertilizer);
/// let app = cropcast_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use cropcast_shared::predict::{CropPredictor, FertilizerPredictor};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Loaded crop recommendation model
    pub crop: Arc<CropPredictor>,

    /// Loaded fertilizer recommendation model
    pub fertilizer: Arc<FertilizerPredictor>,
}

impl AppState {
    /// Creates new application state
    pub fn new(
        db: PgPool,
        config: Config,
        crop: CropPredictor,
        fertilizer: FertilizerPredictor,
    ) -> Self {
        Self {
            db,
            config: Arc::new(config),
            crop: Arc::new(crop),
            fertilizer: Arc::new(fertilizer),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// GET  /health              # Health check
/// POST /register            # Create an account
/// POST /login               # Verify credentials
/// PUT  /update-profile      # Sparse profile update
/// POST /get-profile         # Profile read (hash-free projection)
/// POST /predict-crop        # Crop recommendation
/// POST /predict-fertilizer  # Fertilizer recommendation
/// ```
///
/// # Middleware Stack
///
/// Request logging (tower-http `TraceLayer`) and CORS, configured from
/// `Config`.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let account_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/update-profile", put(routes::profile::update_profile))
        .route("/get-profile", post(routes::profile::get_profile));

    let predict_routes = Router::new()
        .route("/predict-crop", post(routes::predict::predict_crop))
        .route(
            "/predict-fertilizer",
            post(routes::predict::predict_fertilizer),
        );

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .merge(account_routes)
        .merge(predict_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

use axum::{
    routing::{get, post},
    Router,
};
use playstyle::{
    analysis::{self, AnalysisRepository, AnalysisSettings, PostgresAnalysisRepository},
    AppConfig, AppError, AppState, InMemoryAnalysisRepository, RiotClient, StatsService,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playstyle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    info!("Starting playstyle analysis server");

    // Postgres when DATABASE_URL is set, in-memory otherwise
    let analysis_repository: Arc<dyn AnalysisRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            let repository = PostgresAnalysisRepository::new(pool);
            repository.ensure_schema().await?;
            info!("Using PostgreSQL analysis store");
            Arc::new(repository)
        }
        None => {
            info!("Using in-memory analysis store");
            Arc::new(InMemoryAnalysisRepository::new())
        }
    };

    let match_source = Arc::new(RiotClient::from_config(&config));
    let stats_service = Arc::new(
        StatsService::builder()
            .with_mastery_top_n(config.mastery_top_n)
            .build(),
    );

    let app_state = AppState::new(
        match_source,
        analysis_repository,
        stats_service,
        AnalysisSettings::from_config(&config),
    );

    let app = Router::new()
        .route("/health", get(analysis::health))
        .route("/analysis", post(analysis::analyze_player))
        .route("/compare", post(analysis::compare_players))
        .route("/summary", post(analysis::summarize_player))
        .route("/agent", post(analysis::invoke_agent))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind {}: {e}", config.bind_addr)))?;
    info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| {
            error!(error = %e, "Server failed");
            AppError::Internal
        })?;
    Ok(())
}

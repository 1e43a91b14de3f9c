use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{DatabaseConfig, init_pool, run_migrations};
use tokio::net::TcpListener;

use stories::{MIGRATOR, procedures::StoredProcedureService, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting stories service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Apply schema and stored-function migrations
    run_migrations(&pool, &MIGRATOR).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Initialize the stored-procedure adapter
    let procedures = StoredProcedureService::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        procedures,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Stories service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

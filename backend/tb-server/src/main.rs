use tb_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = tb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting tb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = tb_db::open_pool(
        &database_path,
        config.database.max_connections,
        Duration::from_millis(config.database.busy_timeout_ms),
    )
    .await?;
    info!("Database connection established");

    info!("Running database migrations...");
    tb_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let default_user_id = match config.server.default_user()? {
        Some(id) => id,
        None => {
            warn!("server.default_user_id not set, requests without X-User-Id act as the nil user");
            Uuid::nil()
        }
    };

    // Build router
    let app_state = AppState::new(pool.clone(), &config, default_user_id);
    let app = build_router(app_state, config.server.max_connections);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

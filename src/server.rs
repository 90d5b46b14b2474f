//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, codec construction, hit worker
//! spawning, and the Axum server lifecycle.

use crate::application::services::{AccessService, ShortenerService};
use crate::config::Config;
use crate::domain::hit_worker::run_hit_worker;
use crate::infrastructure::persistence::PgShortLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alphabet::Alphabet;
use crate::utils::codec::ShortCodec;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - The codec (alphabet + salt + padding), immutable from here on
/// - Background hit worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The configured alphabet is unusable
/// - Server bind fails or a runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let alphabet = Alphabet::new(&config.alphabet)?;
    let codec = ShortCodec::new(alphabet, config.salt.clone(), config.padding);

    let pool = Arc::new(pool);
    let repository = Arc::new(PgShortLinkRepository::new(pool.clone()));

    let (hit_tx, hit_rx) = mpsc::channel(config.hit_queue_capacity);
    tokio::spawn(run_hit_worker(hit_rx, repository.clone()));
    tracing::info!("Hit worker started");

    let shortener_service = Arc::new(ShortenerService::new(
        repository,
        codec,
        config.hostname.clone(),
    ));
    let access_service = Arc::new(AccessService::new(
        config.whitelist.clone(),
        config.password.clone(),
        config.behind_proxy,
    ));

    let state = AppState {
        shortener_service,
        access_service,
        hit_sender: hit_tx,
        track_hits: config.track_hits,
        db: pool,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

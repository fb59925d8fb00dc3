use tracing_subscriber::{EnvFilter, fmt};

use time_logs::shell::config::Config;
use time_logs::shell::{build_state, http, workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    tracing::info!(table = %config.table, "starting time logs");

    let state = build_state(&config).await?;
    let ticker = workers::spawn_elapsed_ticker(state.tracker.clone(), config.tick_period);

    let app = http::router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP endpoint: http://{}/time-logs", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app).await?;

    ticker.abort();
    Ok(())
}

//! webstats gateway
//!
//! - Stats endpoint: GET {stats_path}?format=json|monitor&stats=a,b
//! - Liveness: GET /healthz
//! - Config: YAML, path from argv[1], $WEBSTATS_CONFIG, or `webstats.yaml`

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use webstats_gateway::{app_state, config, error::GatewayError, router};

const DEFAULT_CONFIG_PATH: &str = "webstats.yaml";

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WEBSTATS_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .map_err(|e: std::net::AddrParseError| GatewayError::InvalidListen {
            addr: cfg.gateway.listen.clone(),
            reason: e.to_string(),
        })?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "webstats-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

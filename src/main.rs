use nutriopt::logging::LoggingConfig;
use nutriopt::{start_server, GoodLpSolver, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    LoggingConfig::from_env().init()?;

    // Create solver instance
    let solver = Arc::new(GoodLpSolver::new());

    // Configure and start server
    let config = ServerConfig::from_env(solver)?;
    start_server(config).await?;

    Ok(())
}

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::SolverService;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0:50051";
pub const ADDRESS_ENV: &str = "NUTRIOPT_ADDRESS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid NUTRIOPT_ADDRESS value '{value}': {source}")]
    InvalidAddress {
        value: String,
        source: std::net::AddrParseError,
    },
}

pub struct ServerConfig {
    pub address: SocketAddr,
    pub solver: Arc<dyn SolverService>,
    pub solver_name: String,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, solver: Arc<dyn SolverService>) -> Self {
        let solver_name = solver.name().to_string();
        Self {
            address,
            solver,
            solver_name,
        }
    }

    /// Address from `NUTRIOPT_ADDRESS`, falling back to `0.0.0.0:50051`
    pub fn from_env(solver: Arc<dyn SolverService>) -> Result<Self, ConfigError> {
        let value = env::var(ADDRESS_ENV).unwrap_or_else(|_| DEFAULT_ADDRESS.to_string());
        Ok(Self::new(parse_address(&value)?, solver))
    }
}

fn parse_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidAddress {
        value: value.to_string(),
        source,
    })
}

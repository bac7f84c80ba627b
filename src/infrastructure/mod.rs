// Infrastructure: External concerns (gRPC, server)

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::start_server;

// Infrastructure: Server setup and configuration

use tonic::transport::Server;

use super::config::ServerConfig;
use crate::application::mappers::nutrition_optimizer::nutrition_optimizer_server::NutritionOptimizerServer;
use crate::application::{GrpcNutritionService, NutritionOptimizer};

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let optimizer = NutritionOptimizer::new(config.solver);
    let service = GrpcNutritionService::new(optimizer);

    tracing::info!(
        address = %config.address,
        solver = %config.solver_name,
        "nutriopt gRPC server listening"
    );

    Server::builder()
        .add_service(NutritionOptimizerServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}

use tonic::{Request, Response, Status};

use super::mappers::{self, nutrition_optimizer as proto};
use super::optimizer::NutritionOptimizer;

/// gRPC service implementation
pub struct GrpcNutritionService {
    optimizer: NutritionOptimizer,
}

impl GrpcNutritionService {
    pub fn new(optimizer: NutritionOptimizer) -> Self {
        Self { optimizer }
    }
}

#[tonic::async_trait]
impl proto::nutrition_optimizer_server::NutritionOptimizer for GrpcNutritionService {
    async fn optimize(
        &self,
        request: Request<proto::OptimizationRequest>,
    ) -> Result<Response<proto::OptimizationResponse>, Status> {
        let proto_request = request.into_inner();
        tracing::info!(
            foods = proto_request.food_information.len(),
            constraints = proto_request.constraints.len(),
            "optimize request received"
        );

        // Convert protobuf to domain model
        let domain_request = mappers::proto_to_domain_request(proto_request).map_err(|e| *e)?;

        // The solve is CPU-bound and blocking
        let optimizer = self.optimizer.clone();
        let result = tokio::task::spawn_blocking(move || optimizer.optimize(domain_request))
            .await
            .map_err(|e| Status::internal(format!("Solver task failed: {}", e)))?
            .map_err(mappers::error_to_status)?;

        tracing::info!(status = %result.status(), "optimize request finished");

        Ok(Response::new(mappers::domain_to_proto_result(result)))
    }

    async fn validate_request(
        &self,
        request: Request<proto::OptimizationRequest>,
    ) -> Result<Response<proto::ValidationResult>, Status> {
        let domain_request = match mappers::proto_to_domain_request(request.into_inner()) {
            Ok(domain_request) => domain_request,
            Err(status) => {
                return Ok(Response::new(proto::ValidationResult {
                    is_valid: false,
                    errors: vec![status.message().to_string()],
                    num_variables: 0,
                    num_constraints: 0,
                }))
            }
        };

        let validation = match self.optimizer.prepare(domain_request) {
            Ok(problem) => proto::ValidationResult {
                is_valid: true,
                errors: Vec::new(),
                num_variables: problem.num_variables() as u32,
                num_constraints: problem.num_constraints() as u32,
            },
            Err(e) => proto::ValidationResult {
                is_valid: false,
                errors: vec![e.to_string()],
                num_variables: 0,
                num_constraints: 0,
            },
        };

        Ok(Response::new(validation))
    }
}

// Application layer: Use cases and boundary adapters

pub mod model_builder;
pub mod optimizer;
pub mod payload;
pub mod result_extractor;

#[cfg(feature = "server")]
pub mod grpc_service;
#[cfg(feature = "server")]
pub mod mappers;

pub use model_builder::{build_problem, ModelBuilder, NutrientExpressions};
pub use optimizer::NutritionOptimizer;
pub use result_extractor::extract_result;

#[cfg(feature = "server")]
pub use grpc_service::GrpcNutritionService;

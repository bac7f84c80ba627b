// Mappers: Convert between gRPC protobuf types and domain models
// This keeps protobuf dependencies isolated from business logic

use tonic::Status;

use crate::domain::{
    Constraint, FoodItem, NutrientValues, NutritionError, Objective, OptimizationRequest,
    OptimizationResult, PfcRatio,
};

pub mod nutrition_optimizer {
    tonic::include_proto!("nutrition_optimizer");
}

use nutrition_optimizer as proto;

pub fn error_to_status(error: NutritionError) -> Status {
    match error {
        NutritionError::InvalidInput(_) | NutritionError::InvalidConstraint(_) => {
            Status::invalid_argument(error.to_string())
        }
        NutritionError::Solver(e) => Status::internal(format!("Solver error: {}", e)),
    }
}

/// Convert protobuf FoodInformation to domain FoodItem
pub fn proto_to_domain_food(proto_food: proto::FoodInformation) -> crate::domain::Result<FoodItem> {
    FoodItem::new(
        proto_food.name,
        NutrientValues::new(
            proto_food.energy,
            proto_food.protein,
            proto_food.fat,
            proto_food.carbohydrates,
        ),
        proto_food.grams_per_unit,
        proto_food.minimum_intake,
        proto_food.maximum_intake,
    )
}

/// Convert protobuf OptimizationRequest to domain OptimizationRequest
pub fn proto_to_domain_request(
    proto_req: proto::OptimizationRequest,
) -> std::result::Result<OptimizationRequest, Box<Status>> {
    let objective = proto_req
        .objective
        .ok_or_else(|| Box::new(Status::invalid_argument("Objective is required")))?;

    let to_request = || -> crate::domain::Result<OptimizationRequest> {
        let objective = Objective::parse(&objective.sense, &objective.nutrient)?;

        let foods = proto_req
            .food_information
            .into_iter()
            .map(proto_to_domain_food)
            .collect::<crate::domain::Result<Vec<_>>>()?;

        let constraints = proto_req
            .constraints
            .iter()
            .map(|c| Constraint::parse(&c.min_max, &c.nutrient, &c.unit, c.value))
            .collect::<crate::domain::Result<Vec<_>>>()?;

        OptimizationRequest::new(foods, objective, constraints)
    };

    to_request().map_err(|e| Box::new(error_to_status(e)))
}

fn domain_to_proto_nutrients(values: NutrientValues) -> proto::NutrientValues {
    proto::NutrientValues {
        energy: values.energy,
        protein: values.protein,
        fat: values.fat,
        carbohydrates: values.carbohydrates,
    }
}

fn domain_to_proto_ratio(ratio: PfcRatio) -> proto::PfcRatio {
    proto::PfcRatio {
        protein: ratio.protein,
        fat: ratio.fat,
        carbohydrates: ratio.carbohydrates,
    }
}

/// Convert domain OptimizationResult to protobuf OptimizationResponse
pub fn domain_to_proto_result(result: OptimizationResult) -> proto::OptimizationResponse {
    let status = result.status().to_string();

    match result {
        OptimizationResult::Optimal(solution) => proto::OptimizationResponse {
            status,
            food_intake: solution.food_intake.into_iter().collect(),
            total_nutrient_values: Some(domain_to_proto_nutrients(solution.total_nutrient_values)),
            pfc_ratio: Some(domain_to_proto_ratio(solution.pfc_ratio)),
            message: String::new(),
        },
        OptimizationResult::Unsolved { message, .. } => proto::OptimizationResponse {
            status,
            food_intake: Default::default(),
            total_nutrient_values: None,
            pfc_ratio: None,
            message,
        },
    }
}

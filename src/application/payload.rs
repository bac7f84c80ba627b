// JSON boundary: camelCase payloads as sent by the web front-end, mapped to
// and from the domain model. Serde stays out of the domain layer.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Constraint, FoodItem, NutrientValues, NutritionError, Objective, OptimizationRequest,
    OptimizationResult, PfcRatio,
};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Nutrition(#[from] NutritionError),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPayload {
    pub name: String,
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub grams_per_unit: f64,
    pub minimum_intake: i64,
    pub maximum_intake: i64,
}

impl FoodPayload {
    pub fn into_domain(self) -> crate::domain::Result<FoodItem> {
        FoodItem::new(
            self.name,
            NutrientValues::new(self.energy, self.protein, self.fat, self.carbohydrates),
            self.grams_per_unit,
            self.minimum_intake,
            self.maximum_intake,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectivePayload {
    pub sense: String,
    pub nutrient: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintPayload {
    pub min_max: String,
    pub nutrient: String,
    pub unit: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub food_information: Vec<FoodPayload>,
    pub objective: ObjectivePayload,
    #[serde(default)]
    pub constraints: Vec<ConstraintPayload>,
}

impl RequestPayload {
    pub fn into_domain(self) -> crate::domain::Result<OptimizationRequest> {
        let foods = self
            .food_information
            .into_iter()
            .map(FoodPayload::into_domain)
            .collect::<crate::domain::Result<Vec<_>>>()?;

        let objective = Objective::parse(&self.objective.sense, &self.objective.nutrient)?;

        let constraints = self
            .constraints
            .iter()
            .map(|c| Constraint::parse(&c.min_max, &c.nutrient, &c.unit, c.value))
            .collect::<crate::domain::Result<Vec<_>>>()?;

        OptimizationRequest::new(foods, objective, constraints)
    }
}

pub fn read_request(reader: impl Read) -> Result<OptimizationRequest, PayloadError> {
    let payload: RequestPayload = serde_json::from_reader(reader)?;
    Ok(payload.into_domain()?)
}

pub fn parse_request(json: &str) -> Result<OptimizationRequest, PayloadError> {
    let payload: RequestPayload = serde_json::from_str(json)?;
    Ok(payload.into_domain()?)
}

#[derive(Debug, Clone, Serialize)]
pub struct NutrientValuesPayload {
    pub energy: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl From<NutrientValues> for NutrientValuesPayload {
    fn from(values: NutrientValues) -> Self {
        Self {
            energy: values.energy,
            protein: values.protein,
            fat: values.fat,
            carbohydrates: values.carbohydrates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PfcRatioPayload {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl From<PfcRatio> for PfcRatioPayload {
    fn from(ratio: PfcRatio) -> Self {
        Self {
            protein: ratio.protein,
            fat: ratio.fat,
            carbohydrates: ratio.carbohydrates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    #[serde(rename_all = "camelCase")]
    Optimal {
        status: String,
        food_intake: BTreeMap<String, u32>,
        total_nutrient_values: NutrientValuesPayload,
        pfc_ratio: PfcRatioPayload,
    },
    Message {
        status: String,
        message: String,
    },
}

impl ResponsePayload {
    pub fn error(error: &impl std::fmt::Display) -> Self {
        ResponsePayload::Message {
            status: "Error".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<OptimizationResult> for ResponsePayload {
    fn from(result: OptimizationResult) -> Self {
        let status = result.status().to_string();
        match result {
            OptimizationResult::Optimal(solution) => ResponsePayload::Optimal {
                status,
                food_intake: solution.food_intake,
                total_nutrient_values: solution.total_nutrient_values.into(),
                pfc_ratio: solution.pfc_ratio.into(),
            },
            OptimizationResult::Unsolved { message, .. } => {
                ResponsePayload::Message { status, message }
            }
        }
    }
}

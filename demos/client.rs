// Example client for the nutrition optimizer gRPC service
//
// Plans a day of high-protein meals:
// - rice is counted in 100 g bowls, the others in 50 g / 30 g portions
// - protein must supply at least 30% of energy
// - energy must stay below 2000 kcal
//
// Objective: maximize protein

use tonic::Request;

pub mod nutrition_optimizer {
    tonic::include_proto!("nutrition_optimizer");
}

use nutrition_optimizer::{
    nutrition_optimizer_client::NutritionOptimizerClient, Constraint, FoodInformation, Objective,
    OptimizationRequest,
};

fn food(
    name: &str,
    (energy, protein, fat, carbohydrates): (f64, f64, f64, f64),
    grams_per_unit: f64,
    (minimum_intake, maximum_intake): (i64, i64),
) -> FoodInformation {
    FoodInformation {
        name: name.to_string(),
        energy,
        protein,
        fat,
        carbohydrates,
        grams_per_unit,
        minimum_intake,
        maximum_intake,
    }
}

fn constraint(min_max: &str, nutrient: &str, unit: &str, value: f64) -> Constraint {
    Constraint {
        min_max: min_max.to_string(),
        nutrient: nutrient.to_string(),
        unit: unit.to_string(),
        value,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = NutritionOptimizerClient::connect("http://127.0.0.1:50051").await?;

    println!("=== High-Protein Meal Plan ===\n");

    let request = OptimizationRequest {
        food_information: vec![
            food("rice", (152.0, 2.8, 1.0, 35.6), 100.0, (2, 6)),
            food("chicken_fillet", (121.0, 29.6, 1.0, 0.0), 50.0, (3, 6)),
            food("boiled_egg", (134.0, 12.5, 10.4, 0.3), 50.0, (3, 4)),
            food("broccoli", (30.0, 3.9, 0.4, 5.2), 15.0, (3, 6)),
            food("protein_shake", (386.0, 70.1, 6.4, 14.6), 30.0, (1, 4)),
        ],
        objective: Some(Objective {
            sense: "maximize".to_string(),
            nutrient: "protein".to_string(),
        }),
        constraints: vec![
            constraint("max", "energy", "energy", 2000.0),
            constraint("min", "protein", "ratio", 30.0),
        ],
    };

    let validation = client
        .validate_request(Request::new(request.clone()))
        .await?
        .into_inner();
    if !validation.is_valid {
        println!("✗ Request rejected: {}", validation.errors.join("; "));
        return Ok(());
    }
    println!(
        "Model: {} variables, {} constraints\n",
        validation.num_variables, validation.num_constraints
    );

    let result = client.optimize(Request::new(request)).await?.into_inner();

    println!("Status: {}", result.status);
    if result.status != "Optimal" {
        println!("Message: {}", result.message);
        return Ok(());
    }

    println!("\nIntake:");
    let mut intake: Vec<_> = result.food_intake.iter().collect();
    intake.sort();
    for (name, units) in intake {
        println!("  {:<16} {} units", name, units);
    }

    if let Some(totals) = result.total_nutrient_values {
        println!("\nTotals:");
        println!("  Energy:        {:.1} kcal", totals.energy);
        println!("  Protein:       {:.1} g", totals.protein);
        println!("  Fat:           {:.1} g", totals.fat);
        println!("  Carbohydrates: {:.1} g", totals.carbohydrates);
    }

    if let Some(ratio) = result.pfc_ratio {
        println!(
            "\nPFC: P {:.1}% / F {:.1}% / C {:.1}%",
            ratio.protein, ratio.fat, ratio.carbohydrates
        );
    }

    Ok(())
}

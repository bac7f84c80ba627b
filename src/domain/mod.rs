// Domain module: Business logic and models

pub mod errors;
pub mod events;
pub mod models;
pub mod nutrition;
pub mod solver_service;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use models::*;
pub use nutrition::*;
pub use solver_service::{SolverError, SolverService};
pub use value_objects::*;

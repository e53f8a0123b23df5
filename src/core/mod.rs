pub mod engine;
pub mod gravity;
pub mod ingredients;
pub mod policy;

pub use crate::domain::model::{
    BrewPlan, BrewRequest, FermentationMode, GravityTarget, IngredientResult, SweetnessLevel,
    UnitSystem,
};
pub use crate::domain::ports::{CeilingPolicy, PolicyProvider};
pub use crate::utils::error::Result;

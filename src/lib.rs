pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::console::ConsoleSession;
pub use crate::app::report::OutputFormat;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::engine::RecipeEngine;
pub use crate::core::gravity::{target_gravity, target_gravity_for};
pub use crate::core::ingredients::calculate_ingredients;
pub use crate::core::policy::CalculationPolicy;
pub use crate::core::{
    BrewPlan, BrewRequest, CeilingPolicy, FermentationMode, GravityTarget, IngredientResult,
    PolicyProvider, SweetnessLevel, UnitSystem,
};
pub use crate::utils::error::{MeadError, Result};

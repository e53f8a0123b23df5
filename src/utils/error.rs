use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeadError {
    #[error("Invalid sweetness level: '{label}'")]
    InvalidSweetness { label: String },

    #[error("Calculated original gravity {og:.3} exceeds the plausibility ceiling {ceiling:.3}")]
    ImplausibleGravityTarget { og: f64, ceiling: f64 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Policy,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MeadError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        MeadError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MeadError::InvalidSweetness { .. } | MeadError::InvalidInput { .. } => {
                ErrorCategory::Input
            }
            MeadError::ImplausibleGravityTarget { .. } => ErrorCategory::Policy,
            MeadError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            MeadError::IoError(_) | MeadError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Policy => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MeadError::InvalidSweetness { .. } => {
                "Use one of: Dry, Semi-Sweet, Sweet, Dessert".to_string()
            }
            MeadError::ImplausibleGravityTarget { .. } => {
                "Try a lower ABV or a drier sweetness level".to_string()
            }
            MeadError::InvalidInput { field, .. } => {
                format!("Check the value entered for {}", field)
            }
            MeadError::ConfigValidationError { .. } => {
                "Check the settings file and command line flags".to_string()
            }
            MeadError::IoError(_) => "Check that the file exists and is readable".to_string(),
            MeadError::SerializationError(_) => "Try the text output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MeadError::InvalidSweetness { .. } => {
                "Error: Invalid sweetness level entered. Please use Dry, Semi-Sweet, Sweet, or Dessert."
                    .to_string()
            }
            MeadError::ImplausibleGravityTarget { og, .. } => format!(
                "WARNING: Calculated Original Gravity (OG={:.3}) is extremely high. \
                 This OG requires an impractical amount of honey and exceeds the tolerance \
                 of most mead yeasts (max OG is usually around 1.220).",
                og
            ),
            MeadError::InvalidInput {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}.", field, value, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeadError>;

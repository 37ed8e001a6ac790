use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("Invalid input for tier '{tier}': {field} must be non-negative, got {value}")]
    InvalidInput {
        tier: String,
        field: &'static str,
        value: i64,
    },

    #[error("Cannot compute reduction percentage: baseline annual cost is zero")]
    DivisionByZero,

    #[error("Arithmetic overflow while computing {context}")]
    ArithmeticOverflow { context: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CostError {
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::ArithmeticOverflow {
            context: context.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => {
                "Check that every tier has a non-negative quantity and unit cost"
            }
            Self::DivisionByZero => {
                "Give the baseline scenario at least one tier with a non-zero cost"
            }
            Self::ArithmeticOverflow { .. } => "Use smaller quantities or unit costs",
            Self::IoError(_) => "Make sure the comparison file exists and is readable",
            Self::TomlError(_) => "Fix the TOML syntax of the comparison file",
            Self::SerializationError(_) => "Try the summary output format instead",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the comparison file against the documented layout"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { tier, field, .. } => {
                format!("Tier '{}' has a negative {}", tier, field)
            }
            Self::DivisionByZero => {
                "The current license mix costs nothing, so no reduction can be shown".to_string()
            }
            Self::IoError(e) => format!("Could not read the comparison file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => 1,
            Self::DivisionByZero | Self::ArithmeticOverflow { .. } => 2,
            Self::IoError(_) | Self::SerializationError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_tier_and_field() {
        let err = CostError::InvalidInput {
            tier: "Analyst".to_string(),
            field: "quantity",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input for tier 'Analyst': quantity must be non-negative, got -3"
        );
        assert_eq!(err.user_friendly_message(), "Tier 'Analyst' has a negative quantity");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes_by_kind() {
        assert_eq!(CostError::DivisionByZero.exit_code(), 2);
        assert_eq!(CostError::overflow("subtotal").exit_code(), 2);
        let io = CostError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), 3);
    }
}

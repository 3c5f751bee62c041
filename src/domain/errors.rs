//! Domain errors - Business logic errors

use thiserror::Error;

/// Domain-specific errors that represent business rule violations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid argument '{parameter}': value is missing")]
    InvalidArgument { parameter: String },

    #[error("Invalid argument '{parameter}': value cannot be empty or whitespace")]
    EmptyValue { parameter: String },

    #[error("Rule set '{name}' is not registered")]
    UnknownRuleSet { name: String },

    #[error("Rule set '{rule_set}' failed to evaluate: {reason}")]
    RuleEvaluation { rule_set: String, reason: String },
}

impl DomainError {
    pub fn invalid_argument(parameter: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
        }
    }

    pub fn empty_value(parameter: impl Into<String>) -> Self {
        Self::EmptyValue {
            parameter: parameter.into(),
        }
    }

    pub fn unknown_rule_set(name: impl Into<String>) -> Self {
        Self::UnknownRuleSet { name: name.into() }
    }

    pub fn rule_evaluation(rule_set: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleEvaluation {
            rule_set: rule_set.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter for argument errors
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { parameter } | Self::EmptyValue { parameter } => {
                Some(parameter)
            }
            _ => None,
        }
    }

    pub fn is_argument_error(&self) -> bool {
        self.parameter().is_some()
    }
}

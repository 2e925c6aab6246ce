use crate::domain::{Category, Formula};

/// Errors produced by the catalog and evaluation engine.
///
/// The taxonomy is deliberately small:
/// - `UnknownFormula`: the (category, formula) pair is not in the registry
/// - `InvalidInput`: an input is outside the formula's mathematical domain
///
/// No variant is retryable; every evaluation is synchronous and deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    UnknownFormula {
        category: Category,
        formula: Formula,
    },
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl EvalError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        EvalError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnknownFormula { category, formula } => {
                write!(
                    f,
                    "formula {formula:?} is not registered under category {category:?}"
                )
            }
            EvalError::InvalidInput { field, reason } => {
                write!(f, "invalid input `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// CLI-facing error carrying a process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        AppError::new(3, err.to_string())
    }
}

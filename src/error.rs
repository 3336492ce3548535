use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenableErrorKind {
    InvalidCallable,
    UnrecognizedParameterKind,
    MalformedSignature,
    Argument,
    NoMethod,
    Callee,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AmenableError {
    pub kind: AmenableErrorKind,
    pub message: String,
}

impl AmenableError {
    pub fn new(kind: AmenableErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_argument_error(&self) -> bool {
        self.kind == AmenableErrorKind::Argument
    }
}

pub fn invalid_callable(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::InvalidCallable, message)
}

pub fn unrecognized_parameter_kind(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::UnrecognizedParameterKind, message)
}

pub fn malformed_signature(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::MalformedSignature, message)
}

pub fn argument_error(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::Argument, message)
}

pub fn no_method(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::NoMethod, message)
}

pub fn callee_failure(message: impl Into<String>) -> AmenableError {
    AmenableError::new(AmenableErrorKind::Callee, message)
}

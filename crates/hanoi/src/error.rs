use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DiskCount;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    #[error(
        "disk count {requested} is out of range ({}..={})",
        DiskCount::MIN,
        DiskCount::MAX
    )]
    InvalidDiskCount { requested: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
}

/// JSON error body returned by every HTTP front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<HanoiError> for ApiError {
    fn from(value: HanoiError) -> Self {
        match value {
            HanoiError::InvalidDiskCount { .. } => {
                Self::new(ErrorCode::Validation, value.to_string())
            }
        }
    }
}

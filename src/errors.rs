//! Order log errors
//!
//! Every failure carries a category ([`ErrorKind`]) and a numeric
//! [`ErrorCode`] so callers can discriminate programmatically, plus a
//! human-readable message via `Display`.

use crate::types::{EaterId, MenuItemId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Broad error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Unknown,
    Authorization,
    IncorrectInput,
    NotFound,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Unknown => write!(f, "unknown"),
            ErrorKind::Authorization => write!(f, "authorization"),
            ErrorKind::IncorrectInput => write!(f, "incorrect-input"),
            ErrorKind::NotFound => write!(f, "not-found"),
        }
    }
}

/// Numeric error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const UNKNOWN: ErrorCode = ErrorCode(-1);
    pub const INVALID_FILE: ErrorCode = ErrorCode(700);
    pub const FILE_NOT_FOUND: ErrorCode = ErrorCode(701);
    pub const INCORRECT_INPUT: ErrorCode = ErrorCode(702);
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which field of an order line failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    EaterId,
    FoodMenuId,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::EaterId => write!(f, "eater_id"),
            Field::FoodMenuId => write!(f, "foodmenu_id"),
        }
    }
}

/// Errors that can occur while ranking an order log
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid file type: {} (expected a .txt file)", .path.display())]
    InvalidFile { path: PathBuf },

    #[error("File not found: {} ({reason})", .path.display())]
    FileNotFound { path: PathBuf, reason: String },

    #[error("Invalid order log entry at line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid {field} at line {line}: {value:?}")]
    InvalidField {
        field: Field,
        line: usize,
        value: String,
    },

    #[error("Duplicate entry found for eater_id={eater_id} and foodmenu_id={food_menu_id} at line {line}")]
    DuplicateEntry {
        eater_id: EaterId,
        food_menu_id: MenuItemId,
        line: usize,
    },

    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidFile { .. } | OrderError::Read { .. } => ErrorKind::Unknown,
            OrderError::FileNotFound { .. } => ErrorKind::NotFound,
            OrderError::MalformedLine { .. }
            | OrderError::InvalidField { .. }
            | OrderError::DuplicateEntry { .. } => ErrorKind::IncorrectInput,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::InvalidFile { .. } => ErrorCode::INVALID_FILE,
            OrderError::FileNotFound { .. } => ErrorCode::FILE_NOT_FOUND,
            OrderError::MalformedLine { .. }
            | OrderError::InvalidField { .. }
            | OrderError::DuplicateEntry { .. } => ErrorCode::INCORRECT_INPUT,
            OrderError::Read { .. } => ErrorCode::UNKNOWN,
        }
    }
}

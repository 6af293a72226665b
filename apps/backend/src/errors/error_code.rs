//! Error codes for the bowling backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All
//! codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the bowling backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// A roll broke one or more frame rules
    InvalidRoll,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Game state
    /// The game's frame set is structurally invalid
    InvalidGameState,
    /// All ten frames are complete; no further rolls accepted
    GameComplete,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Concurrent roll submissions raced for the same slot
    ConcurrentRoll,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidRoll => "INVALID_ROLL",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::InvalidGameState => "INVALID_GAME_STATE",
            Self::GameComplete => "GAME_COMPLETE",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConcurrentRoll => "CONCURRENT_ROLL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Domain-level error type used across services and repos.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Frame,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Two submissions raced for the same (frame, roll_number) slot.
    ConcurrentRoll,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The game's frame set fails the structural validity check.
    /// Fatal to further scoring/rolling until the data is corrected.
    InvalidState(String),
    /// A candidate roll failed the validator. Recoverable: the caller may
    /// resubmit different pins. Carries every reason, in check order.
    RuleViolation(Vec<String>),
    /// No frame can accept a roll: the game is finished. A terminal,
    /// expected outcome rather than an exceptional condition.
    GameComplete,
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidState(d) => write!(f, "invalid state: {d}"),
            DomainError::RuleViolation(reasons) => {
                write!(f, "rule violation: {}", reasons.join(", "))
            }
            DomainError::GameComplete => write!(f, "game is already complete"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into())
    }
    pub fn rule_violation(reasons: Vec<String>) -> Self {
        Self::RuleViolation(reasons)
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn game_not_found(game_id: i64) -> Self {
        Self::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        match &e {
            DbErr::RecordNotFound(d) => {
                DomainError::NotFound(NotFoundKind::Other(d.clone()), d.clone())
            }
            DbErr::ConnectionAcquire(_) => DomainError::Infra(
                InfraErrorKind::DbUnavailable,
                format!("db connection acquire failed: {e}"),
            ),
            _ => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(d)) => DomainError::Conflict(
                    ConflictKind::ConcurrentRoll,
                    format!("unique constraint violated: {d}"),
                ),
                _ => DomainError::Infra(InfraErrorKind::Other("db".into()), e.to_string()),
            },
        }
    }
}

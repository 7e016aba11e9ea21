//! The module contains the errors the engine can throw.
//!
//! All variants except [`Database`] are expected, request-scoped failures:
//! they leave persisted state untouched because every workflow operation
//! runs inside a single database transaction.
//!
//! [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("account not found: {0}")]
    AccountNotFound(String),
    #[error("campaign not found: {0}")]
    CampaignNotFound(i64),
    #[error("town not found: {0}")]
    TownNotFound(i64),
    #[error("keyword not found: {0}")]
    KeywordNotFound(i64),
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountNotFound(a), Self::AccountNotFound(b)) => a == b,
            (Self::CampaignNotFound(a), Self::CampaignNotFound(b)) => a == b,
            (Self::TownNotFound(a), Self::TownNotFound(b)) => a == b,
            (Self::KeywordNotFound(a), Self::KeywordNotFound(b)) => a == b,
            (Self::InsufficientFunds(a), Self::InsufficientFunds(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

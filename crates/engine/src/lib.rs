//! Campaign fund-reservation engine.
//!
//! The engine owns the business rule of the system: every campaign's
//! committed fund is mirrored by a debit on a single ledger account, and the
//! two are changed together inside one database transaction. Everything else
//! (catalog reads, projections) carries no invariants.

use sea_orm::DatabaseConnection;

pub use accounts::Account;
pub use campaigns::{Campaign, CampaignDraft, CampaignStatus};
pub use error::EngineError;
pub use keywords::Keyword;
pub use money::Money;
pub use ops::AccountBalance;
pub use towns::Town;

pub mod accounts;
pub mod campaign_keywords;
pub mod campaigns;
mod error;
pub mod keywords;
mod money;
mod ops;
pub mod towns;

pub(crate) type ResultEngine<T> = Result<T, EngineError>;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}

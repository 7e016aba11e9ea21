use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};

use crate::{EngineError, Money, ResultEngine, accounts};

mod balances;
mod campaigns;
mod catalog;

pub use balances::AccountBalance;

/// Loads the account row for `name`, failing when it does not exist.
///
/// Works on both a live transaction and a plain connection so read paths can
/// skip the transaction overhead.
pub(crate) async fn require_account<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> ResultEngine<accounts::Model> {
    accounts::Entity::find()
        .filter(accounts::Column::AccountName.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| EngineError::AccountNotFound(name.to_string()))
}

/// Persists a changed account balance, bumping `updated_at`.
pub(crate) async fn persist_balance<C: ConnectionTrait>(
    db: &C,
    account_id: i64,
    balance: Money,
    now: chrono::DateTime<chrono::Utc>,
) -> ResultEngine<()> {
    let model = accounts::ActiveModel {
        id: sea_orm::ActiveValue::Set(account_id),
        balance: sea_orm::ActiveValue::Set(balance.cents()),
        updated_at: sea_orm::ActiveValue::Set(now),
        ..Default::default()
    };
    model.update(db).await?;
    Ok(())
}

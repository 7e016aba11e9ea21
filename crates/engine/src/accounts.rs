//! The module contains the ledger account and its persistence model.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{EngineError, Money, ResultEngine};

/// The ledger account campaign funds are reserved from.
///
/// The balance can never go below zero: every debit is checked first and
/// rejected with [`EngineError::InsufficientFunds`] when it would overdraw
/// the account. Credits are unbounded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub balance: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn has_enough_funds(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Removes `amount` from the balance, failing if the account would be
    /// overdrawn. The struct is left untouched on error.
    pub fn deduct_funds(&mut self, amount: Money) -> ResultEngine<()> {
        if !self.has_enough_funds(amount) {
            return Err(EngineError::InsufficientFunds(self.name.clone()));
        }
        self.balance -= amount;
        Ok(())
    }

    /// Adds `amount` to the balance. Credits have no ceiling, but an amount
    /// that would overflow the cents representation is rejected and leaves
    /// the struct untouched.
    pub fn add_funds(&mut self, amount: Money) -> ResultEngine<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| EngineError::Validation("balance overflow".to_string()))?;
        Ok(())
    }
}

impl From<Model> for Account {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.account_name,
            balance: Money::new(model.balance),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub account_name: String,
    pub balance: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

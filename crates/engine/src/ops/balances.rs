use crate::{Engine, Money, ResultEngine};

use super::require_account;

/// Read-only view of an account's spendable balance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountBalance {
    pub name: String,
    pub balance: Money,
}

impl Engine {
    /// Returns the current balance of the named account.
    pub async fn account_balance(&self, account_name: &str) -> ResultEngine<AccountBalance> {
        let model = require_account(&self.database, account_name).await?;
        Ok(AccountBalance {
            name: model.account_name,
            balance: Money::new(model.balance),
        })
    }
}

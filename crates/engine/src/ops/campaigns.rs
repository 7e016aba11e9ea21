//! Create/update/delete of campaigns together with the account debit or
//! credit that mirrors each fund change. Every write path here is one
//! database transaction: the campaign row and the account balance commit
//! together or not at all.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ConnectionTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
    prelude::*,
};

use crate::{
    Account, Campaign, CampaignDraft, CampaignStatus, Engine, EngineError, Money, ResultEngine,
    campaign_keywords, campaigns, keywords, towns, with_tx,
};

use super::{persist_balance, require_account};

impl Engine {
    /// Creates a campaign and reserves its fund from `account_name`.
    ///
    /// Fails without persisting anything when the account is missing, the
    /// balance cannot cover the fund, or any referenced town/keyword does
    /// not exist.
    pub async fn create_campaign(
        &self,
        account_name: &str,
        draft: CampaignDraft,
    ) -> ResultEngine<Campaign> {
        draft.validate()?;
        let keyword_ids = draft.keyword_ids.clone().ok_or_else(|| {
            EngineError::Validation("at least one keyword is required".to_string())
        })?;

        with_tx!(self, |db_tx| {
            let mut account = Account::from(require_account(&db_tx, account_name).await?);
            if !account.has_enough_funds(draft.campaign_fund) {
                return Err(EngineError::InsufficientFunds(account.name));
            }

            let keyword_models = resolve_keywords(&db_tx, &keyword_ids).await?;
            let town = match draft.town_id {
                Some(town_id) => Some(require_town(&db_tx, town_id).await?),
                None => None,
            };

            let now = Utc::now();
            let inserted = campaigns::ActiveModel {
                campaign_name: ActiveValue::Set(draft.name.trim().to_string()),
                bid_amount: ActiveValue::Set(draft.bid_amount.cents()),
                campaign_fund: ActiveValue::Set(draft.campaign_fund.cents()),
                status: ActiveValue::Set(draft.status.as_str().to_string()),
                town_id: ActiveValue::Set(town.as_ref().map(|t| t.id)),
                radius: ActiveValue::Set(draft.radius),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&db_tx)
            .await?;

            insert_keyword_links(&db_tx, inserted.id, &keyword_models).await?;

            account.deduct_funds(draft.campaign_fund)?;
            persist_balance(&db_tx, account.id, account.balance, now).await?;

            build_projection(inserted, town, keyword_models)
        })
    }

    /// Updates a campaign, settling the fund delta against the account.
    ///
    /// A fund increase debits the difference (checked against the balance),
    /// a decrease credits it back, an unchanged fund leaves the account
    /// untouched. Town and keyword associations are re-resolved only when
    /// new ids are supplied; omission keeps the stored ones.
    pub async fn update_campaign(
        &self,
        account_name: &str,
        id: i64,
        draft: CampaignDraft,
    ) -> ResultEngine<Campaign> {
        draft.validate()?;

        with_tx!(self, |db_tx| {
            let existing = campaigns::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or(EngineError::CampaignNotFound(id))?;

            let now = Utc::now();
            let delta = draft.campaign_fund - Money::new(existing.campaign_fund);
            if delta.is_positive() {
                let mut account = Account::from(require_account(&db_tx, account_name).await?);
                if !account.has_enough_funds(delta) {
                    return Err(EngineError::InsufficientFunds(account.name));
                }
                account.deduct_funds(delta)?;
                persist_balance(&db_tx, account.id, account.balance, now).await?;
            } else if delta.is_negative() {
                let mut account = Account::from(require_account(&db_tx, account_name).await?);
                account.add_funds(delta.abs())?;
                persist_balance(&db_tx, account.id, account.balance, now).await?;
            }

            let town = match draft.town_id {
                Some(town_id) => Some(require_town(&db_tx, town_id).await?),
                None => match existing.town_id {
                    Some(town_id) => towns::Entity::find_by_id(town_id).one(&db_tx).await?,
                    None => None,
                },
            };

            let keyword_models = match &draft.keyword_ids {
                Some(ids) => {
                    let resolved = resolve_keywords(&db_tx, ids).await?;
                    campaign_keywords::Entity::delete_many()
                        .filter(campaign_keywords::Column::CampaignId.eq(existing.id))
                        .exec(&db_tx)
                        .await?;
                    insert_keyword_links(&db_tx, existing.id, &resolved).await?;
                    resolved
                }
                None => {
                    existing
                        .find_related(keywords::Entity)
                        .order_by_asc(keywords::Column::Id)
                        .all(&db_tx)
                        .await?
                }
            };

            let updated = campaigns::ActiveModel {
                id: ActiveValue::Set(existing.id),
                campaign_name: ActiveValue::Set(draft.name.trim().to_string()),
                bid_amount: ActiveValue::Set(draft.bid_amount.cents()),
                campaign_fund: ActiveValue::Set(draft.campaign_fund.cents()),
                status: ActiveValue::Set(draft.status.as_str().to_string()),
                town_id: ActiveValue::Set(town.as_ref().map(|t| t.id)),
                radius: ActiveValue::Set(draft.radius),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .update(&db_tx)
            .await?;

            build_projection(updated, town, keyword_models)
        })
    }

    /// Deletes a campaign and releases its full fund back to the account.
    pub async fn delete_campaign(&self, account_name: &str, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let existing = campaigns::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or(EngineError::CampaignNotFound(id))?;

            let mut account = Account::from(require_account(&db_tx, account_name).await?);
            account.add_funds(Money::new(existing.campaign_fund))?;
            persist_balance(&db_tx, account.id, account.balance, Utc::now()).await?;

            campaign_keywords::Entity::delete_many()
                .filter(campaign_keywords::Column::CampaignId.eq(existing.id))
                .exec(&db_tx)
                .await?;
            campaigns::Entity::delete_by_id(existing.id)
                .exec(&db_tx)
                .await?;

            Ok(())
        })
    }

    /// Returns one campaign projected with its town name and keyword texts.
    pub async fn campaign(&self, id: i64) -> ResultEngine<Campaign> {
        let model = campaigns::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::CampaignNotFound(id))?;
        load_projection(&self.database, model).await
    }

    /// Returns all campaigns, each fully projected.
    pub async fn campaigns(&self) -> ResultEngine<Vec<Campaign>> {
        let models = campaigns::Entity::find()
            .order_by_asc(campaigns::Column::Id)
            .all(&self.database)
            .await?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            out.push(load_projection(&self.database, model).await?);
        }
        Ok(out)
    }
}

/// Resolves every keyword id, reporting the first missing one.
///
/// Duplicated ids are collapsed so the association behaves like a set.
async fn resolve_keywords<C: ConnectionTrait>(
    db: &C,
    ids: &[i64],
) -> ResultEngine<Vec<keywords::Model>> {
    let mut seen = std::collections::BTreeSet::new();
    let mut out = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        let model = keywords::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(EngineError::KeywordNotFound(id))?;
        out.push(model);
    }
    out.sort_by_key(|model| model.id);
    Ok(out)
}

async fn require_town<C: ConnectionTrait>(db: &C, id: i64) -> ResultEngine<towns::Model> {
    towns::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(EngineError::TownNotFound(id))
}

async fn insert_keyword_links<C: ConnectionTrait>(
    db: &C,
    campaign_id: i64,
    keyword_models: &[keywords::Model],
) -> ResultEngine<()> {
    for keyword in keyword_models {
        campaign_keywords::ActiveModel {
            campaign_id: ActiveValue::Set(campaign_id),
            keyword_id: ActiveValue::Set(keyword.id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

/// Fetches the associations of a stored campaign and projects it.
async fn load_projection<C: ConnectionTrait>(
    db: &C,
    model: campaigns::Model,
) -> ResultEngine<Campaign> {
    let town = match model.town_id {
        Some(town_id) => towns::Entity::find_by_id(town_id).one(db).await?,
        None => None,
    };
    let keyword_models = model
        .find_related(keywords::Entity)
        .order_by_asc(keywords::Column::Id)
        .all(db)
        .await?;
    build_projection(model, town, keyword_models)
}

/// Pure model-to-domain mapping; no queries, no invariants.
fn build_projection(
    model: campaigns::Model,
    town: Option<towns::Model>,
    keyword_models: Vec<keywords::Model>,
) -> ResultEngine<Campaign> {
    let status = CampaignStatus::try_from(model.status.as_str())?;
    let keyword_ids = keyword_models.iter().map(|k| k.id).collect();
    let keyword_texts = keyword_models
        .into_iter()
        .map(|k| k.keyword_text)
        .collect();

    Ok(Campaign {
        id: model.id,
        name: model.campaign_name,
        bid_amount: Money::new(model.bid_amount),
        campaign_fund: Money::new(model.campaign_fund),
        status,
        town_id: town.as_ref().map(|t| t.id),
        town_name: town.map(|t| t.town_name),
        radius: model.radius,
        keyword_ids,
        keyword_texts,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

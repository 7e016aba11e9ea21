//! Bootstrap data loaded on startup.
//!
//! Each loader only runs when its table is empty, so restarting against an
//! existing database never duplicates rows or resets the account balance.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use engine::{EngineError, Money, accounts, keywords, towns};

use crate::settings;

const TOWNS: [(&str, &str); 15] = [
    ("London", "SW1A 1AA"),
    ("New York", "10001"),
    ("Paris", "75000"),
    ("Berlin", "10115"),
    ("Tokyo", "100-0001"),
    ("Sydney", "2000"),
    ("Rome", "00100"),
    ("Madrid", "28001"),
    ("Toronto", "M5V 3L9"),
    ("Dubai", "00000"),
    ("Singapore", "018960"),
    ("Los Angeles", "90001"),
    ("Chicago", "60601"),
    ("Hong Kong", "999077"),
    ("Barcelona", "08001"),
];

const KEYWORDS: [&str; 35] = [
    "electronics",
    "smartphones",
    "computers",
    "gaming",
    "fashion",
    "clothing",
    "shoes",
    "accessories",
    "home",
    "garden",
    "furniture",
    "decor",
    "sports",
    "fitness",
    "bicycles",
    "books",
    "education",
    "courses",
    "automotive",
    "cars",
    "parts",
    "health",
    "beauty",
    "cosmetics",
    "food",
    "restaurants",
    "travel",
    "vacations",
    "hotels",
    "business",
    "marketing",
    "finance",
    "real estate",
    "rentals",
    "sales",
];

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error("invalid starting balance: {0}")]
    Balance(EngineError),
}

pub async fn load_defaults(
    db: &DatabaseConnection,
    account: &settings::Account,
) -> Result<(), SeedError> {
    load_towns(db).await?;
    load_keywords(db).await?;
    load_account(db, account).await?;
    Ok(())
}

async fn load_towns(db: &DatabaseConnection) -> Result<(), SeedError> {
    if towns::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    towns::Entity::insert_many(TOWNS.map(|(name, postal_code)| towns::ActiveModel {
        town_name: ActiveValue::Set(name.to_string()),
        postal_code: ActiveValue::Set(Some(postal_code.to_string())),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    tracing::info!("Loaded {} towns", TOWNS.len());
    Ok(())
}

async fn load_keywords(db: &DatabaseConnection) -> Result<(), SeedError> {
    if keywords::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    keywords::Entity::insert_many(KEYWORDS.map(|text| keywords::ActiveModel {
        keyword_text: ActiveValue::Set(text.to_string()),
        ..Default::default()
    }))
    .exec(db)
    .await?;

    tracing::info!("Loaded {} keywords", KEYWORDS.len());
    Ok(())
}

async fn load_account(
    db: &DatabaseConnection,
    account: &settings::Account,
) -> Result<(), SeedError> {
    if accounts::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let balance: Money = account
        .starting_balance
        .parse()
        .map_err(SeedError::Balance)?;

    let now = Utc::now();
    accounts::Entity::insert(accounts::ActiveModel {
        account_name: ActiveValue::Set(account.name.clone()),
        balance: ActiveValue::Set(balance.cents()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    })
    .exec(db)
    .await?;

    tracing::info!("Created account {} with balance {balance}", account.name);
    Ok(())
}

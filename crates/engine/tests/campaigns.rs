use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DatabaseConnection, EntityTrait};

use engine::{
    CampaignDraft, CampaignStatus, Engine, EngineError, Money, accounts, keywords, towns,
};
use migration::MigratorTrait;

const ACCOUNT: &str = "Emerald Account";

async fn engine_with_balance(balance: &str) -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let now = Utc::now();
    let balance: Money = balance.parse().unwrap();
    accounts::ActiveModel {
        account_name: ActiveValue::Set(ACCOUNT.to_string()),
        balance: ActiveValue::Set(balance.cents()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    // Towns get ids 1..=3, keywords 1..=5, in insertion order.
    towns::Entity::insert_many([
        towns::ActiveModel {
            town_name: ActiveValue::Set("Szczecin".to_string()),
            postal_code: ActiveValue::Set(Some("70-001".to_string())),
            ..Default::default()
        },
        towns::ActiveModel {
            town_name: ActiveValue::Set("Gdynia".to_string()),
            postal_code: ActiveValue::Set(Some("81-001".to_string())),
            ..Default::default()
        },
        towns::ActiveModel {
            town_name: ActiveValue::Set("Radom".to_string()),
            postal_code: ActiveValue::Set(None),
            ..Default::default()
        },
    ])
    .exec(&db)
    .await
    .unwrap();

    keywords::Entity::insert_many(
        ["java", "javascript", "python", "rust", "sql"].map(|text| keywords::ActiveModel {
            keyword_text: ActiveValue::Set(text.to_string()),
            ..Default::default()
        }),
    )
    .exec(&db)
    .await
    .unwrap();

    let engine = Engine::builder().database(db.clone()).build();
    (engine, db)
}

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    engine_with_balance("10000.00").await
}

fn draft(fund: &str, keyword_ids: Option<Vec<i64>>) -> CampaignDraft {
    CampaignDraft {
        name: "Summer sale".to_string(),
        bid_amount: "1.50".parse().unwrap(),
        campaign_fund: fund.parse().unwrap(),
        status: CampaignStatus::On,
        town_id: Some(1),
        radius: 10,
        keyword_ids,
    }
}

async fn balance(engine: &Engine) -> Money {
    engine.account_balance(ACCOUNT).await.unwrap().balance
}

#[tokio::test]
async fn create_reserves_fund_from_balance() {
    let (engine, _db) = engine_with_db().await;

    let campaign = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1, 2])))
        .await
        .unwrap();

    assert_eq!(campaign.campaign_fund, "100.00".parse().unwrap());
    assert_eq!(campaign.town_name.as_deref(), Some("Szczecin"));
    assert_eq!(campaign.keyword_texts, vec!["java", "javascript"]);
    assert_eq!(balance(&engine).await, "9900.00".parse().unwrap());
}

#[tokio::test]
async fn create_with_insufficient_funds_changes_nothing() {
    let (engine, _db) = engine_with_balance("50.00").await;

    let err = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::InsufficientFunds(ACCOUNT.to_string()));
    assert_eq!(balance(&engine).await, "50.00".parse().unwrap());
    assert!(engine.campaigns().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_without_keywords_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_campaign(ACCOUNT, draft("100.00", None))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let err = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(Vec::new())))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

#[tokio::test]
async fn create_with_unknown_keyword_rolls_back() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1, 999])))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::KeywordNotFound(999));
    assert_eq!(balance(&engine).await, "10000.00".parse().unwrap());
    assert!(engine.campaigns().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_unknown_town_rolls_back() {
    let (engine, _db) = engine_with_db().await;

    let mut draft = draft("100.00", Some(vec![1]));
    draft.town_id = Some(999);
    let err = engine.create_campaign(ACCOUNT, draft).await.unwrap_err();

    assert_eq!(err, EngineError::TownNotFound(999));
    assert_eq!(balance(&engine).await, "10000.00".parse().unwrap());
}

#[tokio::test]
async fn duplicate_keyword_ids_collapse() {
    let (engine, _db) = engine_with_db().await;

    let campaign = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![2, 1, 2, 1])))
        .await
        .unwrap();

    assert_eq!(campaign.keyword_ids, vec![1, 2]);
}

#[tokio::test]
async fn fetch_returns_what_create_stored() {
    let (engine, _db) = engine_with_db().await;

    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1, 3])))
        .await
        .unwrap();
    let fetched = engine.campaign(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_fund_increase_debits_difference() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap();

    let updated = engine
        .update_campaign(ACCOUNT, created.id, draft("150.00", Some(vec![1])))
        .await
        .unwrap();

    assert_eq!(updated.campaign_fund, "150.00".parse().unwrap());
    assert_eq!(balance(&engine).await, "9850.00".parse().unwrap());
}

#[tokio::test]
async fn update_fund_decrease_credits_difference() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap();

    let updated = engine
        .update_campaign(ACCOUNT, created.id, draft("80.00", Some(vec![1])))
        .await
        .unwrap();

    assert_eq!(updated.campaign_fund, "80.00".parse().unwrap());
    assert_eq!(balance(&engine).await, "9920.00".parse().unwrap());
}

#[tokio::test]
async fn update_with_unchanged_fund_leaves_balance_alone() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap();

    let mut next = draft("100.00", Some(vec![1]));
    next.name = "Winter sale".to_string();
    let updated = engine
        .update_campaign(ACCOUNT, created.id, next)
        .await
        .unwrap();

    assert_eq!(updated.name, "Winter sale");
    assert_eq!(balance(&engine).await, "9900.00".parse().unwrap());
}

#[tokio::test]
async fn update_insufficient_funds_aborts_whole_change() {
    let (engine, _db) = engine_with_balance("150.00").await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap();

    let err = engine
        .update_campaign(ACCOUNT, created.id, draft("500.00", Some(vec![2])))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::InsufficientFunds(ACCOUNT.to_string()));
    assert_eq!(balance(&engine).await, "50.00".parse().unwrap());
    let unchanged = engine.campaign(created.id).await.unwrap();
    assert_eq!(unchanged.campaign_fund, "100.00".parse().unwrap());
    assert_eq!(unchanged.keyword_ids, vec![1]);
}

#[tokio::test]
async fn update_without_keyword_ids_keeps_association() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1, 2])))
        .await
        .unwrap();

    let updated = engine
        .update_campaign(ACCOUNT, created.id, draft("100.00", None))
        .await
        .unwrap();

    assert_eq!(updated.keyword_ids, vec![1, 2]);
}

#[tokio::test]
async fn update_with_keyword_ids_replaces_association() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1, 2])))
        .await
        .unwrap();

    let updated = engine
        .update_campaign(ACCOUNT, created.id, draft("100.00", Some(vec![3])))
        .await
        .unwrap();

    assert_eq!(updated.keyword_ids, vec![3]);
    assert_eq!(updated.keyword_texts, vec!["python"]);
}

#[tokio::test]
async fn update_missing_campaign_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .update_campaign(ACCOUNT, 42, draft("100.00", Some(vec![1])))
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::CampaignNotFound(42));
    assert_eq!(balance(&engine).await, "10000.00".parse().unwrap());
}

#[tokio::test]
async fn delete_releases_full_fund() {
    let (engine, _db) = engine_with_db().await;
    let created = engine
        .create_campaign(ACCOUNT, draft("100.00", Some(vec![1])))
        .await
        .unwrap();
    assert_eq!(balance(&engine).await, "9900.00".parse().unwrap());

    engine.delete_campaign(ACCOUNT, created.id).await.unwrap();

    assert_eq!(balance(&engine).await, "10000.00".parse().unwrap());
    let err = engine.campaign(created.id).await.unwrap_err();
    assert_eq!(err, EngineError::CampaignNotFound(created.id));
}

#[tokio::test]
async fn delete_missing_campaign_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.delete_campaign(ACCOUNT, 42).await.unwrap_err();
    assert_eq!(err, EngineError::CampaignNotFound(42));
}

#[tokio::test]
async fn unknown_account_is_reported() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_campaign("Ruby Account", draft("100.00", Some(vec![1])))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::AccountNotFound("Ruby Account".to_string()));
}

#[tokio::test]
async fn towns_are_ordered_by_name() {
    let (engine, _db) = engine_with_db().await;

    let names: Vec<String> = engine
        .towns()
        .await
        .unwrap()
        .into_iter()
        .map(|town| town.name)
        .collect();

    assert_eq!(names, vec!["Gdynia", "Radom", "Szczecin"]);
}

#[tokio::test]
async fn keyword_search_is_substring_and_case_insensitive() {
    let (engine, _db) = engine_with_db().await;

    let hits: Vec<String> = engine
        .search_keywords(Some("JAVA"))
        .await
        .unwrap()
        .into_iter()
        .map(|keyword| keyword.text)
        .collect();

    assert_eq!(hits, vec!["java", "javascript"]);
}

#[tokio::test]
async fn keyword_search_caps_at_ten_lexically_first_hits() {
    let (engine, db) = engine_with_db().await;

    let extras: Vec<keywords::ActiveModel> = (0..15)
        .map(|n| keywords::ActiveModel {
            keyword_text: ActiveValue::Set(format!("topic{n:02}")),
            ..Default::default()
        })
        .collect();
    keywords::Entity::insert_many(extras).exec(&db).await.unwrap();

    let hits: Vec<String> = engine
        .search_keywords(Some("topic"))
        .await
        .unwrap()
        .into_iter()
        .map(|keyword| keyword.text)
        .collect();

    let expected: Vec<String> = (0..10).map(|n| format!("topic{n:02}")).collect();
    assert_eq!(hits, expected);
}

#[tokio::test]
async fn blank_keyword_query_returns_full_list() {
    let (engine, _db) = engine_with_db().await;

    let all = engine.search_keywords(Some("   ")).await.unwrap();
    assert_eq!(all.len(), 5);

    let listed = engine.search_keywords(None).await.unwrap();
    assert_eq!(listed, all);
}

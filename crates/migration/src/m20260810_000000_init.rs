//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for the campaign manager:
//!
//! - `accounts`: ledger accounts with a spendable balance
//! - `towns`: targeting towns (catalog data)
//! - `keywords`: targeting keywords (catalog data)
//! - `campaigns`: funded campaigns referencing a town
//! - `campaign_keywords`: campaign/keyword many-to-many association

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Accounts {
    Table,
    Id,
    AccountName,
    Balance,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Towns {
    Table,
    Id,
    TownName,
    PostalCode,
}

#[derive(Iden)]
enum Keywords {
    Table,
    Id,
    KeywordText,
}

#[derive(Iden)]
enum Campaigns {
    Table,
    Id,
    CampaignName,
    BidAmount,
    CampaignFund,
    Status,
    TownId,
    Radius,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CampaignKeywords {
    Table,
    CampaignId,
    KeywordId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Accounts
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::AccountName).string().not_null())
                    .col(ColumnDef::new(Accounts::Balance).big_integer().not_null())
                    .col(ColumnDef::new(Accounts::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Accounts::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-account_name-unique")
                    .table(Accounts::Table)
                    .col(Accounts::AccountName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Towns
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Towns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Towns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Towns::TownName).string().not_null())
                    .col(ColumnDef::new(Towns::PostalCode).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-towns-town_name-unique")
                    .table(Towns::Table)
                    .col(Towns::TownName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Keywords
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Keywords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Keywords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Keywords::KeywordText).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-keywords-keyword_text-unique")
                    .table(Keywords::Table)
                    .col(Keywords::KeywordText)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Campaigns
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaigns::CampaignName).string().not_null())
                    .col(
                        ColumnDef::new(Campaigns::BidAmount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Campaigns::CampaignFund)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Campaigns::Status).string().not_null())
                    .col(ColumnDef::new(Campaigns::TownId).big_integer())
                    .col(ColumnDef::new(Campaigns::Radius).integer().not_null())
                    .col(ColumnDef::new(Campaigns::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Campaigns::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-campaigns-town_id")
                            .from(Campaigns::Table, Campaigns::TownId)
                            .to(Towns::Table, Towns::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-campaigns-town_id")
                    .table(Campaigns::Table)
                    .col(Campaigns::TownId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Campaign Keywords
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CampaignKeywords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignKeywords::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignKeywords::KeywordId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CampaignKeywords::CampaignId)
                            .col(CampaignKeywords::KeywordId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-campaign_keywords-campaign_id")
                            .from(CampaignKeywords::Table, CampaignKeywords::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-campaign_keywords-keyword_id")
                            .from(CampaignKeywords::Table, CampaignKeywords::KeywordId)
                            .to(Keywords::Table, Keywords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-campaign_keywords-keyword_id")
                    .table(CampaignKeywords::Table)
                    .col(CampaignKeywords::KeywordId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(CampaignKeywords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Keywords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Towns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

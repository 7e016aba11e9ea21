//! The module contains the campaign entity and its workflow-facing shapes.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{EngineError, Money, ResultEngine};

/// On/off switch stored verbatim on every campaign.
///
/// The fund-reservation workflow never interprets it: it carries no side
/// effect on the account balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    On,
    Off,
}

impl CampaignStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl TryFrom<&str> for CampaignStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            other => Err(EngineError::Validation(format!(
                "invalid campaign status: {other}"
            ))),
        }
    }
}

/// A campaign as seen by callers: stored fields plus the denormalized town
/// name and keyword texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub bid_amount: Money,
    pub campaign_fund: Money,
    pub status: CampaignStatus,
    pub town_id: Option<i64>,
    pub town_name: Option<String>,
    pub radius: i32,
    pub keyword_ids: Vec<i64>,
    pub keyword_texts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming campaign fields for create and update.
///
/// `keyword_ids` is optional so that updates can leave the association
/// unchanged; creation requires it.
#[derive(Clone, Debug)]
pub struct CampaignDraft {
    pub name: String,
    pub bid_amount: Money,
    pub campaign_fund: Money,
    pub status: CampaignStatus,
    pub town_id: Option<i64>,
    pub radius: i32,
    pub keyword_ids: Option<Vec<i64>>,
}

impl CampaignDraft {
    /// Checks the field-level constraints shared by create and update.
    pub(crate) fn validate(&self) -> ResultEngine<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::Validation(
                "campaign name is mandatory".to_string(),
            ));
        }
        if self.bid_amount < Money::new(1) {
            return Err(EngineError::Validation(
                "minimum bid amount is 0.01".to_string(),
            ));
        }
        if self.campaign_fund < Money::new(1) {
            return Err(EngineError::Validation(
                "minimum campaign fund is 0.01".to_string(),
            ));
        }
        if self.radius < 1 {
            return Err(EngineError::Validation(
                "minimum radius is 1 km".to_string(),
            ));
        }
        if let Some(ids) = &self.keyword_ids
            && ids.is_empty()
        {
            return Err(EngineError::Validation(
                "at least one keyword is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_name: String,
    pub bid_amount: i64,
    pub campaign_fund: i64,
    pub status: String,
    pub town_id: Option<i64>,
    pub radius: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::towns::Entity",
        from = "Column::TownId",
        to = "super::towns::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Towns,
    #[sea_orm(has_many = "super::campaign_keywords::Entity")]
    CampaignKeywords,
}

impl Related<super::towns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Towns.def()
    }
}

impl Related<super::campaign_keywords::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignKeywords.def()
    }
}

impl Related<super::keywords::Entity> for Entity {
    fn to() -> RelationDef {
        super::campaign_keywords::Relation::Keywords.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::campaign_keywords::Relation::Campaigns.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

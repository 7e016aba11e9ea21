//! The module contains the keyword catalog entity.

use std::hash::{Hash, Hasher};

use sea_orm::entity::prelude::*;

/// A targeting keyword.
///
/// Keywords are unique by text and shared by many campaigns. Equality is
/// keyed by the text, not the surrogate id.
#[derive(Clone, Debug)]
pub struct Keyword {
    pub id: i64,
    pub text: String,
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl From<Model> for Keyword {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.keyword_text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "keywords")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub keyword_text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_keywords::Entity")]
    CampaignKeywords,
}

impl Related<super::campaign_keywords::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignKeywords.def()
    }
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        super::campaign_keywords::Relation::Campaigns.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::campaign_keywords::Relation::Keywords.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! The module contains the town catalog entity.

use std::hash::{Hash, Hasher};

use sea_orm::entity::prelude::*;

/// A targeting town.
///
/// Towns are reference data: campaigns point at them, the workflow never
/// mutates them. Equality is keyed by the town name, not the surrogate id,
/// so deduplication behaves the same as name-unique storage.
#[derive(Clone, Debug)]
pub struct Town {
    pub id: i64,
    pub name: String,
    pub postal_code: Option<String>,
}

impl PartialEq for Town {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Town {}

impl Hash for Town {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl From<Model> for Town {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.town_name,
            postal_code: model.postal_code,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "towns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub town_name: String,
    pub postal_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaigns::Entity")]
    Campaigns,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaigns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

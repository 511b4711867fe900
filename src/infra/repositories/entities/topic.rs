//! Topic database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Topic, TopicStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_vi: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity. `content_count` is derived
/// at read time from the content collection, so it starts at zero here.
impl From<Model> for Topic {
    fn from(model: Model) -> Self {
        Topic {
            id: model.id,
            name: model.name,
            name_vi: model.name_vi,
            description: model.description,
            icon: model.icon,
            color: model.color,
            status: TopicStatus::parse(&model.status),
            content_count: 0,
            created_at: model.created_at,
        }
    }
}

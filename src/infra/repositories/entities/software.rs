//! Software database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Software, TopicStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "software")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tag: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Software {
    fn from(model: Model) -> Self {
        Software {
            id: model.id,
            name: model.name,
            description: model.description,
            tag: model.tag,
            status: TopicStatus::parse(&model.status),
            created_at: model.created_at,
        }
    }
}

//! Content database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Content, ContentStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub topic_id: Option<Uuid>,
    pub software_id: Option<Uuid>,
    /// JSON array of platform names.
    pub platforms: Json,
    pub purpose: String,
    pub status: String,
    pub image_url: Option<String>,
    pub copy_count: i64,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Content {
    fn from(model: Model) -> Self {
        Content {
            id: model.id,
            title: model.title,
            body: model.body,
            topic_id: model.topic_id,
            software_id: model.software_id,
            platforms: serde_json::from_value(model.platforms).unwrap_or_default(),
            purpose: model.purpose,
            status: ContentStatus::parse(&model.status),
            image_url: model.image_url,
            copy_count: model.copy_count,
            owner_id: model.owner_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

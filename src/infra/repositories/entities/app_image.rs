//! Library image database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::AppImage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub url: String,
    pub content_id: Option<Uuid>,
    pub content_title: String,
    pub description: Option<String>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AppImage {
    fn from(model: Model) -> Self {
        AppImage {
            id: model.id,
            url: model.url,
            content_id: model.content_id,
            content_title: model.content_title,
            description: model.description,
            uploaded_at: model.uploaded_at,
        }
    }
}

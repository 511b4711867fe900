//! Program banner database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{BannerStatus, ProgramBanner};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "program_banners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: String,
    pub link_url: Option<String>,
    pub title: Option<String>,
    pub status: String,
    pub order_index: i32,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProgramBanner {
    fn from(model: Model) -> Self {
        ProgramBanner {
            id: model.id,
            image_url: model.image_url,
            link_url: model.link_url,
            title: model.title,
            status: BannerStatus::parse(&model.status),
            order_index: model.order_index,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
        }
    }
}

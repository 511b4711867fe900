//! Profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{AccountStatus, Profile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// Same value as the owning user's id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub signature_text: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Profile {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            phone_number: model.phone_number,
            signature_text: model.signature_text,
            status: AccountStatus::parse(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

//! Activation request database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{ActivationRequest, ActivationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activation_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub processed_at: Option<DateTimeUtc>,
    pub processed_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ActivationRequest {
    fn from(model: Model) -> Self {
        ActivationRequest {
            id: model.id,
            user_id: model.user_id,
            user_email: model.user_email,
            status: ActivationStatus::parse(&model.status),
            created_at: model.created_at,
            processed_at: model.processed_at,
            processed_by: model.processed_by,
        }
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rolls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "frame_id")]
    pub frame_id: i64,
    #[sea_orm(column_name = "roll_number")]
    pub roll_number: i32,
    pub pins: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::frames::Entity",
        from = "Column::FrameId",
        to = "super::frames::Column::Id"
    )]
    Frame,
}

impl Related<super::frames::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Frame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

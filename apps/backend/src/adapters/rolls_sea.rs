//! SeaORM adapter for the rolls table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::rolls;

pub async fn create_roll<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    frame_id: i64,
    roll_number: i32,
    pins: i32,
) -> Result<rolls::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let roll_active = rolls::ActiveModel {
        id: NotSet,
        frame_id: Set(frame_id),
        roll_number: Set(roll_number),
        pins: Set(pins),
        created_at: Set(now),
        updated_at: Set(now),
    };
    roll_active.insert(conn).await
}

/// All rolls belonging to the given frames, ordered by roll number.
/// Callers group them per frame.
pub async fn by_frame_ids_ordered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    frame_ids: Vec<i64>,
) -> Result<Vec<rolls::Model>, sea_orm::DbErr> {
    rolls::Entity::find()
        .filter(rolls::Column::FrameId.is_in(frame_ids))
        .order_by_asc(rolls::Column::RollNumber)
        .all(conn)
        .await
}

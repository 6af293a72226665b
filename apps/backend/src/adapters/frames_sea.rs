//! SeaORM adapter for the frames table - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::frames;

pub async fn create_frame<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    number: i32,
) -> Result<frames::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let frame_active = frames::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        number: Set(number),
        created_at: Set(now),
        updated_at: Set(now),
    };
    frame_active.insert(conn).await
}

/// All frames of a game, ordered by frame number.
pub async fn by_game_ordered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<frames::Model>, sea_orm::DbErr> {
    frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .order_by_asc(frames::Column::Number)
        .all(conn)
        .await
}

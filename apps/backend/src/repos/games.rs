//! Game repository functions for the domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::games_sea;
use crate::entities::games;
use crate::errors::domain::DomainError;

/// Game domain row: identity plus bookkeeping timestamps. The playable
/// state lives in the game's frames and rolls.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<games::Model> for Game {
    fn from(m: games::Model) -> Self {
        Self {
            id: m.id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn create_game(txn: &DatabaseTransaction) -> Result<Game, DomainError> {
    let game = games_sea::create_game(txn).await?;
    Ok(Game::from(game))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_sea::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

/// Find game by ID or return a domain NotFound.
///
/// Convenience helper that converts `None` into a DomainError,
/// eliminating the repetitive `ok_or_else` pattern when a game must
/// exist.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| DomainError::game_not_found(game_id))
}

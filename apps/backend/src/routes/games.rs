//! Game lifecycle and read-side HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::GameId;
use crate::services::games::{GameInfo, GameService};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    game_id: i64,
    message: String,
}

/// POST /api/v1/games
///
/// Creates a game with its ten empty frames pre-allocated.
async fn create_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let created = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = GameService::new();
            Ok(service.create_game(txn).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(CreateGameResponse {
        game_id: created.game_id,
        message: "New bowling game created successfully".to_string(),
    }))
}

/// GET /api/v1/games/{game_id}
///
/// Current progress: per-frame rolls, completion flags, roll count.
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameInfo>, AppError> {
    let service = GameService::new();
    let info = service.game_info(&app_state.db, game_id.0).await?;
    Ok(web::Json(info))
}

/// GET /api/v1/games/{game_id}/score
///
/// Frame-by-frame scores plus the running total, valid mid-game too.
async fn get_score(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let service = GameService::new();
    let score = service.score(&app_state.db, game_id.0).await?;
    Ok(HttpResponse::Ok().json(score))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/score").route(web::get().to(get_score)));
}

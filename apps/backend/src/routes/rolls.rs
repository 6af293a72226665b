//! Roll submission HTTP route.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::rolls::RollService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RollBody {
    pub pins: i64,
}

/// Request body: `{ "roll": { "pins": <n> } }`
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    pub roll: RollBody,
}

#[derive(Debug, Serialize)]
struct RollResponse {
    frame: i32,
    roll: i32,
    pins: i32,
    message: String,
}

/// POST /api/v1/games/{game_id}/rolls
///
/// Records one roll against the first frame that can accept it.
async fn submit_roll(
    game_id: GameId,
    body: ValidatedJson<RollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    // Values outside i32 saturate; anything beyond 0..=10 fails the
    // validator with the same pin-count message either way.
    let pins = i32::try_from(body.roll.pins).unwrap_or_else(|_| {
        if body.roll.pins > 0 {
            i32::MAX
        } else {
            i32::MIN
        }
    });

    let outcome = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = RollService::new();
            Ok(service.submit_roll(txn, id, pins).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(RollResponse {
        frame: outcome.frame,
        roll: outcome.roll,
        pins: outcome.pins,
        message: outcome.message,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{game_id}/rolls").route(web::post().to(submit_roll)));
}

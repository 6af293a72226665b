use actix_web::web;

pub mod games;
pub mod health;
pub mod rolls;

/// Single composition point for all routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);

    // Game and roll endpoints live under one versioned scope
    cfg.service(
        web::scope("/api/v1/games")
            .configure(games::configure_routes)
            .configure(rolls::configure_routes),
    );
}

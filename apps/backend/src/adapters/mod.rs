//! SeaORM adapters: thin query layers over the entities, returning DbErr.

pub mod frames_sea;
pub mod games_sea;
pub mod rolls_sea;

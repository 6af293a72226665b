//! SeaORM entities mirroring the games / frames / rolls tables.

pub mod frames;
pub mod games;
pub mod rolls;

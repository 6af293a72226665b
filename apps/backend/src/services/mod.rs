pub mod games;
pub mod rolls;

//! Repository layer: domain-facing rows, DomainError at the boundary.

pub mod frames;
pub mod games;
pub mod rolls;

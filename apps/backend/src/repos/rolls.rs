//! Roll repository functions for the domain layer.

use sea_orm::DatabaseTransaction;

use crate::adapters::rolls_sea;
use crate::entities::rolls;
use crate::errors::domain::DomainError;

/// A persisted roll.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub id: i64,
    pub frame_id: i64,
    pub roll_number: i32,
    pub pins: i32,
}

impl From<rolls::Model> for Roll {
    fn from(m: rolls::Model) -> Self {
        Self {
            id: m.id,
            frame_id: m.frame_id,
            roll_number: m.roll_number,
            pins: m.pins,
        }
    }
}

/// Append a validated roll to a frame.
///
/// The unique (frame_id, roll_number) index makes this the commit point
/// for optimistic concurrency: if another submission claimed the slot
/// first, the insert fails and surfaces as a conflict.
pub async fn create_roll(
    txn: &DatabaseTransaction,
    frame_id: i64,
    roll_number: i32,
    pins: i32,
) -> Result<Roll, DomainError> {
    let roll = rolls_sea::create_roll(txn, frame_id, roll_number, pins).await?;
    Ok(Roll::from(roll))
}

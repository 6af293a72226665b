use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the app's connection, runs the closure,
/// commits on Ok and rolls back on Err. Roll submission relies on this:
/// validate-then-append happens inside one transaction, and the unique
/// (frame_id, roll_number) index rejects the loser of a race at commit
/// time.
///
/// The closure returns a boxed future so it can borrow the transaction
/// for the future's whole lifetime; callers write
/// `|txn| Box::pin(async move { ... })`.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> LocalBoxFuture<'a, Result<R, AppError>>,
{
    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

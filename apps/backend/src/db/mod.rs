//! Database access helpers.

pub mod txn;

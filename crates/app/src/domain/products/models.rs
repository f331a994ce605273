//! Product Models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub name: String,
    pub shopping_cart: bool,
}

/// Outcome of a partial product update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub rows_affected: u64,
    pub applied: Vec<String>,
    pub rejected: Vec<String>,
}

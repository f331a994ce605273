//! Grocery Domain Concerns

pub mod products;

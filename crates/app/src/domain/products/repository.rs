//! Products Repository

use sqlx::{Postgres, QueryBuilder, Transaction, query, query_as};

use crate::domain::products::{
    data::{FieldAssignment, ProductUpdate},
    models::Product,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        in_cart: bool,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(in_cart)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a product and read back the stored row.
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Product, sqlx::Error> {
        query(CREATE_PRODUCT_SQL)
            .bind(name)
            .execute(&mut **tx)
            .await?;

        self.get_product(tx, name).await
    }

    /// Apply the update's assignments to the named product.
    ///
    /// Returns zero without issuing a statement when there is nothing to assign.
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        update: &ProductUpdate,
    ) -> Result<u64, sqlx::Error> {
        let Some(mut builder) = update_statement(name, update) else {
            return Ok(0);
        };

        let rows_affected = builder.build().execute(&mut **tx).await?.rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(name)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Build `UPDATE products SET col = $1, ... WHERE name = $n`.
///
/// Placeholders follow the assignment order; the name is always bound last.
fn update_statement<'args>(
    name: &'args str,
    update: &ProductUpdate,
) -> Option<QueryBuilder<'args, Postgres>> {
    if update.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::new("UPDATE products SET ");
    let mut columns = builder.separated(", ");

    for assignment in &update.assignments {
        columns.push(assignment.field().column());
        columns.push_unseparated(" = ");

        match *assignment {
            FieldAssignment::ShoppingCart(value) => columns.push_bind_unseparated(value),
        };
    }

    builder.push(" WHERE name = ").push_bind(name);

    Some(builder)
}

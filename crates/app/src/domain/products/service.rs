//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        models::{Product, UpdateOutcome},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self, in_cart: bool) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, in_cart).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, name: &str) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, name).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, &product.name)
            .await?;

        tx.commit().await?;

        tracing::debug!(name = %created.name, "product stored");

        Ok(created)
    }

    async fn update_product(
        &self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<UpdateOutcome, ProductsServiceError> {
        if update.is_empty() {
            return Err(ProductsServiceError::NoUpdatableFields {
                rejected: update.rejected,
            });
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .update_product(&mut tx, name, &update)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(UpdateOutcome {
            rows_affected,
            applied: update.applied(),
            rejected: update.rejected,
        })
    }

    async fn delete_product(&self, name: &str) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, name).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, or only those in the shopping cart.
    async fn list_products(&self, in_cart: bool) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product by name.
    async fn get_product(&self, name: &str) -> Result<Product, ProductsServiceError>;

    /// Creates a new product outside the shopping cart.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Applies the allowed fields of an update to the named product.
    async fn update_product(
        &self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<UpdateOutcome, ProductsServiceError>;

    /// Deletes the named product.
    async fn delete_product(&self, name: &str) -> Result<(), ProductsServiceError>;
}

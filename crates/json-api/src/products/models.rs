//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use grocery_app::domain::products::models::Product;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique name of the product
    pub name: String,

    /// Whether the product is on the shopping list
    pub shopping_cart: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            name: product.name,
            shopping_cart: product.shopping_cart,
        }
    }
}

//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::TextError, extensions::*, products::errors::into_text_error, state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(name, depot),
    fields(product = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<String, TextError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let name = name.into_inner();

    tracing::Span::current().record("product", name.as_str());

    state
        .app
        .products
        .delete_product(&name)
        .await
        .map_err(|error| into_text_error(error, &name))?;

    tracing::info!(product = %name, "deleted product");

    Ok(format!("Product \"{name}\" was deleted successfully"))
}

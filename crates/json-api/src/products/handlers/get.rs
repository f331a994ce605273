//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::TextError,
    extensions::*,
    products::{errors::into_text_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product by name.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.get",
    skip(name, depot),
    fields(product = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, TextError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let name = name.into_inner();

    tracing::Span::current().record("product", name.as_str());

    let product = state
        .app
        .products
        .get_product(&name)
        .await
        .map_err(|error| into_text_error(error, &name))?;

    Ok(Json(product.into()))
}

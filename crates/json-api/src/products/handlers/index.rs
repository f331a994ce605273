//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    errors::TextError,
    extensions::*,
    products::{errors::unhandled, models::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, or only the shopping list when `shop=true`.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "products.index",
    skip(shop, depot),
    fields(in_cart = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    shop: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, TextError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let in_cart = shop.into_inner().as_deref() == Some("true");

    tracing::Span::current().record("in_cart", in_cart);

    let products = state
        .app
        .products
        .list_products(in_cart)
        .await
        .map_err(|error| unhandled(&error))?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

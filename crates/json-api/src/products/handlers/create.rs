//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use grocery_app::domain::products::data::NewProduct;

use crate::{
    errors::TextError,
    extensions::*,
    products::{
        errors::{NAME_REQUIRED, into_text_error},
        handlers::json_object,
        models::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
///
/// Body: `{"name": "..."}`. New products start outside the shopping cart.
/// Any body that does not carry a usable name is answered the same way.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing name or product already registered"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(req, depot, res),
    fields(product = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, TextError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = json_object(req)
        .await
        .ok()
        .flatten()
        .as_ref()
        .and_then(|fields| fields.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_owned)
        .ok_or_else(|| TextError::bad_request(NAME_REQUIRED))?;

    tracing::Span::current().record("product", name.as_str());

    let product = state
        .app
        .products
        .create_product(NewProduct { name: name.clone() })
        .await
        .map_err(|error| into_text_error(error, &name))?;

    tracing::info!(product = %product.name, "created product");

    res.status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

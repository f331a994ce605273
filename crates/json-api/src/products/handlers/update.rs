//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use grocery_app::domain::products::{data::ProductUpdate, models::UpdateOutcome};

use crate::{
    errors::TextError,
    extensions::*,
    products::{
        errors::{NO_FIELDS, into_text_error},
        handlers::json_object,
    },
    state::State,
};

/// Product Update Handler
///
/// Body: a JSON object of fields. Only `shopping_cart` may change; every other
/// key is reported back as not updated.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Summary of updated and rejected fields"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "No fields, no updatable fields or invalid value"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(name, req, depot),
    fields(product = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<String, TextError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let name = name.into_inner();

    tracing::Span::current().record("product", name.as_str());

    let fields = json_object(req)
        .await?
        .filter(|fields| !fields.is_empty())
        .ok_or_else(|| TextError::bad_request(NO_FIELDS))?;

    let update =
        ProductUpdate::from_fields(fields).map_err(|error| into_text_error(error, &name))?;

    let outcome = state
        .app
        .products
        .update_product(&name, update)
        .await
        .map_err(|error| into_text_error(error, &name))?;

    tracing::info!(
        product = %name,
        applied = ?outcome.applied,
        rejected = ?outcome.rejected,
        "updated product"
    );

    Ok(summary(&name, &outcome))
}

fn summary(name: &str, outcome: &UpdateOutcome) -> String {
    format!(
        "Product: \"{name}\"\nFields updated: {}\nFields not updated: {}",
        outcome.applied.join(","),
        outcome.rejected.join(",")
    )
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use grocery_app::domain::products::{
        MockProductsService, ProductsServiceError, data::FieldAssignment,
    };

    use crate::test_helpers::{products_service, strict_products_mock};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("v1/products/{name}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_reports_applied_and_rejected() -> TestResult {
        let mut repo = strict_products_mock();

        repo.expect_update_product()
            .once()
            .withf(|name, update| {
                name == "apples"
                    && *update
                        == ProductUpdate {
                            assignments: vec![FieldAssignment::ShoppingCart(true)],
                            rejected: vec!["color".to_string()],
                        }
            })
            .return_once(|_, update| {
                Ok(UpdateOutcome {
                    rows_affected: 1,
                    applied: update.applied(),
                    rejected: update.rejected,
                })
            });

        let mut res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!({ "shopping_cart": true, "color": "red" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_string().await?,
            "Product: \"apples\"\nFields updated: shopping_cart\nFields not updated: color"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let mut repo = strict_products_mock();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put("http://example.com/v1/products/pears")
            .json(&json!({ "shopping_cart": true }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await?, "Product \"pears\" not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_empty_body_never_reaches_storage() -> TestResult {
        let mut res = TestClient::put("http://example.com/v1/products/apples")
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.take_string().await?, NO_FIELDS);

        let mut res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!({}))
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.take_string().await?, NO_FIELDS);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_accepts_string_boolean() -> TestResult {
        let mut repo = strict_products_mock();

        repo.expect_update_product()
            .once()
            .withf(|_, update| update.assignments == [FieldAssignment::ShoppingCart(true)])
            .return_once(|_, update| {
                Ok(UpdateOutcome {
                    rows_affected: 1,
                    applied: update.applied(),
                    rejected: update.rejected,
                })
            });

        let mut res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!({ "shopping_cart": "true", "color": "red" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.take_string().await?,
            "Product: \"apples\"\nFields updated: shopping_cart\nFields not updated: color"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_non_boolean_cart_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!({ "shopping_cart": "yes" }))
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_only_protected_fields_returns_400() -> TestResult {
        let mut repo = strict_products_mock();

        repo.expect_update_product()
            .once()
            .withf(|_, update| update.is_empty())
            .return_once(|_, update| {
                Err(ProductsServiceError::NoUpdatableFields {
                    rejected: update.rejected,
                })
            });

        let mut res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!({ "name": "pears" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            res.take_string().await?,
            "No valid fields to update are detected\nFields not updated: name"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_non_object_body_returns_400() -> TestResult {
        let res = TestClient::put("http://example.com/v1/products/apples")
            .json(&json!([true]))
            .send(&make_service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}

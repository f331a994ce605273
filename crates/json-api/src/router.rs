//! App Router

use salvo::Router;

use crate::products;

/// Product routes, registered once at startup.
pub(crate) fn app_router() -> Router {
    Router::with_path("v1/products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{name}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{make_product, state_with_products, strict_products_mock};

    use super::*;

    fn service(products: grocery_app::domain::products::MockProductsService) -> salvo::Service {
        salvo::Service::new(
            Router::new()
                .hoop(salvo::affix_state::inject(state_with_products(products)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn product_names_route_to_item_handlers() -> TestResult {
        let mut products = strict_products_mock();

        products
            .expect_get_product()
            .once()
            .withf(|name| name == "apples")
            .return_once(|name| Ok(make_product(name, false)));

        let mut res = TestClient::get("http://example.com/v1/products/apples")
            .send(&service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.contains("apples"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let res = TestClient::get("http://example.com/v2/products")
            .send(&service(strict_products_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}

//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use grocery_app::{
    context::AppContext,
    domain::products::{MockProductsService, models::Product},
};

use crate::state::State;

/// A products mock with no expectations; any call it was not primed for panics.
pub(crate) fn strict_products_mock() -> MockProductsService {
    MockProductsService::new()
}

pub(crate) fn make_product(name: &str, shopping_cart: bool) -> Product {
    Product {
        name: name.to_string(),
        shopping_cart,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

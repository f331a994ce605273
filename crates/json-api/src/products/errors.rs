//! Product Errors

use tracing::error;

use grocery_app::domain::products::ProductsServiceError;

use crate::errors::TextError;

pub(crate) const NAME_REQUIRED: &str = "Product name is required";
pub(crate) const NO_FIELDS: &str = "No product fields are detected";

pub(crate) fn not_found(name: &str) -> TextError {
    TextError::not_found(format!("Product \"{name}\" not found"))
}

/// Last-resort reply: a 400 carrying the error detail.
pub(crate) fn unhandled(error: &ProductsServiceError) -> TextError {
    error!("product operation failed: {error}");

    TextError::bad_request(error.to_string())
}

/// Map a service error for the product `name` to its reply.
pub(crate) fn into_text_error(error: ProductsServiceError, name: &str) -> TextError {
    match error {
        ProductsServiceError::AlreadyExists => {
            TextError::bad_request(format!("Product \"{name}\" is already registered"))
        }
        ProductsServiceError::NotFound => not_found(name),
        ProductsServiceError::MissingRequiredData => TextError::bad_request(NAME_REQUIRED),
        ProductsServiceError::NoUpdatableFields { rejected } => TextError::bad_request(format!(
            "No valid fields to update are detected\nFields not updated: {}",
            rejected.join(",")
        )),
        error @ ProductsServiceError::InvalidFieldValue { .. } => {
            TextError::bad_request(format!("Invalid product payload: {error}"))
        }
        error @ ProductsServiceError::Sql(_) => unhandled(&error),
    }
}

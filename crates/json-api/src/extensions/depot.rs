//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::errors::TextError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, TextError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, TextError> {
        self.obtain::<T>().map_err(|_ignored| {
            tracing::error!("{} missing from depot", std::any::type_name::<T>());

            TextError::internal_server_error()
        })
    }
}

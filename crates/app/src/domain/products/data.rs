//! Products Data

use serde_json::{Map, Value};

use crate::domain::products::errors::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
}

/// Product columns that may change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    ShoppingCart,
}

impl ProductField {
    /// The update allow-list.
    pub const MUTABLE: [Self; 1] = [Self::ShoppingCart];

    /// Resolve a request key against the allow-list.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::MUTABLE
            .into_iter()
            .find(|field| field.column() == key)
    }

    /// Column name, also used as the request key.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::ShoppingCart => "shopping_cart",
        }
    }
}

/// A typed value destined for one mutable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAssignment {
    ShoppingCart(bool),
}

impl FieldAssignment {
    #[must_use]
    pub const fn field(self) -> ProductField {
        match self {
            Self::ShoppingCart(_) => ProductField::ShoppingCart,
        }
    }

    fn parse(field: ProductField, value: &Value) -> Result<Self, ProductsServiceError> {
        match field {
            ProductField::ShoppingCart => {
                parse_bool(value).map(Self::ShoppingCart).ok_or_else(|| {
                    ProductsServiceError::InvalidFieldValue {
                        field: field.column(),
                        expected: "a boolean",
                    }
                })
            }
        }
    }
}

/// JSON booleans, or the strings `true`/`false`/`1`/`0` in any case.
fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Product Update Data
///
/// Assignments keep the order in which their keys appeared in the request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductUpdate {
    pub assignments: Vec<FieldAssignment>,
    pub rejected: Vec<String>,
}

impl ProductUpdate {
    /// Partition a request mapping into allowed assignments and rejected keys.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsServiceError::InvalidFieldValue`] when an allowed key
    /// carries a value of the wrong type.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, ProductsServiceError> {
        let mut update = Self::default();

        for (key, value) in fields {
            match ProductField::from_key(&key) {
                Some(field) => update
                    .assignments
                    .push(FieldAssignment::parse(field, &value)?),
                None => update.rejected.push(key),
            }
        }

        Ok(update)
    }

    /// Names of the columns this update writes.
    #[must_use]
    pub fn applied(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|assignment| assignment.field().column().to_string())
            .collect()
    }

    /// True when no allowed field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    #[test]
    fn from_fields_splits_allowed_and_rejected() -> TestResult {
        let update =
            ProductUpdate::from_fields(fields(json!({ "shopping_cart": true, "color": "red" })))?;

        assert_eq!(update.assignments, vec![FieldAssignment::ShoppingCart(true)]);
        assert_eq!(update.rejected, vec!["color".to_string()]);
        assert_eq!(update.applied(), vec!["shopping_cart".to_string()]);

        Ok(())
    }

    #[test]
    fn from_fields_rejects_name_changes() -> TestResult {
        let update = ProductUpdate::from_fields(fields(json!({ "name": "pears" })))?;

        assert!(update.is_empty());
        assert_eq!(update.rejected, vec!["name".to_string()]);

        Ok(())
    }

    #[test]
    fn from_fields_keeps_rejected_keys_in_input_order() -> TestResult {
        let update = ProductUpdate::from_fields(fields(
            json!({ "weight": 2, "shopping_cart": false, "aisle": 4, "brand": "x" }),
        ))?;

        assert_eq!(update.assignments, vec![FieldAssignment::ShoppingCart(false)]);
        assert_eq!(
            update.rejected,
            vec!["weight".to_string(), "aisle".to_string(), "brand".to_string()]
        );

        Ok(())
    }

    #[test]
    fn from_fields_requires_boolean_shopping_cart() {
        let result = ProductUpdate::from_fields(fields(json!({ "shopping_cart": "yes" })));

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::InvalidFieldValue {
                    field: "shopping_cart",
                    ..
                })
            ),
            "expected InvalidFieldValue, got {result:?}"
        );
    }

    #[test]
    fn from_fields_accepts_boolean_strings() -> TestResult {
        let update = ProductUpdate::from_fields(fields(json!({ "shopping_cart": "true" })))?;

        assert_eq!(update.assignments, vec![FieldAssignment::ShoppingCart(true)]);

        let update = ProductUpdate::from_fields(fields(json!({ "shopping_cart": "False" })))?;

        assert_eq!(update.assignments, vec![FieldAssignment::ShoppingCart(false)]);

        let update = ProductUpdate::from_fields(fields(json!({ "shopping_cart": "1" })))?;

        assert_eq!(update.assignments, vec![FieldAssignment::ShoppingCart(true)]);

        Ok(())
    }

    #[test]
    fn from_fields_rejects_other_strings_and_numbers() {
        for value in [json!("yes"), json!(""), json!(1), json!(null)] {
            let result = ProductUpdate::from_fields(fields(json!({ "shopping_cart": value })));

            assert!(
                matches!(result, Err(ProductsServiceError::InvalidFieldValue { .. })),
                "expected InvalidFieldValue, got {result:?}"
            );
        }
    }

    #[test]
    fn from_key_only_knows_the_allow_list() {
        assert_eq!(
            ProductField::from_key("shopping_cart"),
            Some(ProductField::ShoppingCart)
        );
        assert_eq!(ProductField::from_key("name"), None);
        assert_eq!(ProductField::from_key("Shopping_Cart"), None);
    }
}

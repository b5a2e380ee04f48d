//! Items

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A single line on an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Display name of the item.
    pub name: String,

    /// Unit price. Serialised as a string so stored items keep every digit.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    /// Number of units ordered.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns `price × quantity`, or `None` on decimal overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// How strictly untyped item records are decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Every item must carry `name`, `price` and `quantity`.
    #[default]
    Strict,

    /// Items without a `price` are accepted and priced at zero. Only for rows already at rest.
    Lenient,
}

/// Errors raised while decoding untyped item records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemsSchemaError {
    /// The items value was not a list.
    #[error("items must be a list")]
    NotAList,

    /// An entry in the list was not a record.
    #[error("item {index} must be a record")]
    NotARecord {
        /// Position of the offending entry.
        index: usize,
    },

    /// A record is missing a required field.
    #[error("item {index} is missing required field '{field}'")]
    MissingField {
        /// Position of the offending entry.
        index: usize,

        /// Name of the missing field.
        field: &'static str,
    },

    /// A field is present but holds an unusable value.
    #[error("item {index} has an invalid '{field}' value")]
    InvalidField {
        /// Position of the offending entry.
        index: usize,

        /// Name of the invalid field.
        field: &'static str,
    },
}

/// Decodes a JSON value into typed order items.
///
/// # Errors
///
/// Returns an [`ItemsSchemaError`] naming the first entry and field that fails to decode.
pub fn parse_items(value: &Value, mode: ParseMode) -> Result<Vec<OrderItem>, ItemsSchemaError> {
    let Value::Array(entries) = value else {
        return Err(ItemsSchemaError::NotAList);
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_item(index, entry, mode))
        .collect()
}

fn parse_item(index: usize, entry: &Value, mode: ParseMode) -> Result<OrderItem, ItemsSchemaError> {
    let Value::Object(record) = entry else {
        return Err(ItemsSchemaError::NotARecord { index });
    };

    let name = match required(record, index, "name")? {
        Value::String(name) => name.clone(),
        _ => return Err(ItemsSchemaError::InvalidField { index, field: "name" }),
    };

    let price = match (record.get("price"), mode) {
        (Some(value), _) => {
            parse_price(value).ok_or(ItemsSchemaError::InvalidField { index, field: "price" })?
        }
        (None, ParseMode::Lenient) => Decimal::ZERO,
        (None, ParseMode::Strict) => {
            return Err(ItemsSchemaError::MissingField { index, field: "price" });
        }
    };

    let quantity = required(record, index, "quantity")?
        .as_u64()
        .and_then(|quantity| u32::try_from(quantity).ok())
        .ok_or(ItemsSchemaError::InvalidField {
            index,
            field: "quantity",
        })?;

    Ok(OrderItem {
        name,
        price,
        quantity,
    })
}

fn required<'a>(
    record: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, ItemsSchemaError> {
    record
        .get(field)
        .ok_or(ItemsSchemaError::MissingField { index, field })
}

fn parse_price(value: &Value) -> Option<Decimal> {
    let price = match value {
        Value::Number(number) => decimal_from_str(&number.to_string()),
        Value::String(text) => decimal_from_str(text.trim()),
        _ => None,
    }?;

    (price >= Decimal::ZERO).then_some(price)
}

fn decimal_from_str(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_parse_error| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::pricing::total_price;

    use super::*;

    #[test]
    fn test_parse_items_accepts_well_formed_records() -> TestResult {
        let items = parse_items(
            &json!([
                { "name": "Coffee", "price": 3.5, "quantity": 2 },
                { "name": "Sandwich", "price": "5.00", "quantity": 1 },
            ]),
            ParseMode::Strict,
        )?;

        assert_eq!(
            items,
            vec![
                OrderItem::new("Coffee", Decimal::new(35, 1), 2),
                OrderItem::new("Sandwich", Decimal::new(500, 2), 1),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_parse_items_empty_list() -> TestResult {
        assert!(parse_items(&json!([]), ParseMode::Strict)?.is_empty());

        Ok(())
    }

    #[test]
    fn test_parse_items_rejects_non_list() {
        let result = parse_items(&json!({ "name": "Coffee" }), ParseMode::Strict);

        assert_eq!(result, Err(ItemsSchemaError::NotAList));
    }

    #[test]
    fn test_parse_items_rejects_scalar_entries() {
        let result = parse_items(&json!(["Coffee"]), ParseMode::Strict);

        assert_eq!(result, Err(ItemsSchemaError::NotARecord { index: 0 }));
    }

    #[test]
    fn test_parse_items_names_missing_field() {
        let result = parse_items(
            &json!([
                { "name": "Coffee", "price": 1, "quantity": 1 },
                { "name": "Tea", "price": 2 },
            ]),
            ParseMode::Strict,
        );

        assert_eq!(
            result,
            Err(ItemsSchemaError::MissingField {
                index: 1,
                field: "quantity"
            })
        );
    }

    #[test]
    fn test_parse_items_strict_requires_price() {
        let result = parse_items(&json!([{ "name": "Tea", "quantity": 1 }]), ParseMode::Strict);

        assert_eq!(
            result,
            Err(ItemsSchemaError::MissingField {
                index: 0,
                field: "price"
            })
        );
    }

    #[test]
    fn test_parse_items_lenient_prices_missing_price_at_zero() -> TestResult {
        let items = parse_items(&json!([{ "name": "Tea", "quantity": 3 }]), ParseMode::Lenient)?;

        assert_eq!(items, vec![OrderItem::new("Tea", Decimal::ZERO, 3)]);

        Ok(())
    }

    #[test]
    fn test_parse_items_lenient_still_requires_name() {
        let result = parse_items(&json!([{ "price": 1, "quantity": 3 }]), ParseMode::Lenient);

        assert_eq!(
            result,
            Err(ItemsSchemaError::MissingField {
                index: 0,
                field: "name"
            })
        );
    }

    #[test]
    fn test_parse_items_rejects_negative_price() {
        let result = parse_items(
            &json!([{ "name": "Tea", "price": -1, "quantity": 1 }]),
            ParseMode::Strict,
        );

        assert_eq!(
            result,
            Err(ItemsSchemaError::InvalidField {
                index: 0,
                field: "price"
            })
        );
    }

    #[test]
    fn test_parse_items_rejects_fractional_quantity() {
        let result = parse_items(
            &json!([{ "name": "Tea", "price": 1, "quantity": 1.5 }]),
            ParseMode::Strict,
        );

        assert_eq!(
            result,
            Err(ItemsSchemaError::InvalidField {
                index: 0,
                field: "quantity"
            })
        );
    }

    #[test]
    fn test_serialised_items_parse_back_to_the_same_total() -> TestResult {
        let items = parse_items(
            &json!([
                { "name": "Sample", "price": "0.01499999999999999999", "quantity": 1 },
                { "name": "Coffee", "price": 3.5, "quantity": 2 },
            ]),
            ParseMode::Strict,
        )?;

        let stored = serde_json::to_value(&items)?;
        let restored = parse_items(&stored, ParseMode::Lenient)?;

        assert_eq!(restored, items);
        assert_eq!(total_price(&restored), total_price(&items));
        assert_eq!(total_price(&restored), Some(Decimal::new(701, 2)));

        Ok(())
    }

    #[test]
    fn test_serialised_price_is_a_string() -> TestResult {
        let stored = serde_json::to_value(OrderItem::new("Tea", Decimal::new(250, 2), 1))?;

        assert_eq!(stored, json!({ "name": "Tea", "price": "2.50", "quantity": 1 }));

        Ok(())
    }

    #[test]
    fn test_line_total() {
        assert_eq!(
            OrderItem::new("Coffee", Decimal::new(500, 2), 2).line_total(),
            Some(Decimal::new(1000, 2))
        );
    }
}

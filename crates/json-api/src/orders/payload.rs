//! Request body validation shared by every order entry point.

use cafe::{
    items::{OrderItem, ParseMode, parse_items},
    orders::OrderError,
    status::OrderStatus,
    tables::TableNumber,
};
use cafe_app::domain::orders::data::{NewOrder, OrderUpdate};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum PayloadError {
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("'{0}' is required")]
    Missing(&'static str),

    #[error("table_number must be an integer")]
    TableNumberNotInteger,

    #[error("status must be a string")]
    StatusNotString,

    #[error(transparent)]
    Order(#[from] OrderError),
}

fn object(body: &Value) -> Result<&Map<String, Value>, PayloadError> {
    body.as_object().ok_or(PayloadError::NotAnObject)
}

/// A present, non-null field.
fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    body.get(name).filter(|value| !value.is_null())
}

fn required<'a>(
    body: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, PayloadError> {
    field(body, name).ok_or(PayloadError::Missing(name))
}

/// Accepts a JSON integer or a string holding one.
pub(crate) fn table_number(value: &Value) -> Result<TableNumber, PayloadError> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or(PayloadError::TableNumberNotInteger)
            .and_then(checked_table_number),
        Value::String(text) => parse_table_number(text),
        _ => Err(PayloadError::TableNumberNotInteger),
    }
}

/// Table number from query-string or other textual input.
pub(crate) fn parse_table_number(raw: &str) -> Result<TableNumber, PayloadError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_ignored| PayloadError::TableNumberNotInteger)
        .and_then(checked_table_number)
}

fn checked_table_number(raw: i64) -> Result<TableNumber, PayloadError> {
    TableNumber::new(raw).map_err(|error| OrderError::from(error).into())
}

/// Status from query-string or other textual input.
pub(crate) fn parse_status(raw: &str) -> Result<OrderStatus, PayloadError> {
    raw.parse::<OrderStatus>()
        .map_err(|error| OrderError::from(error).into())
}

pub(crate) fn items(value: &Value) -> Result<Vec<OrderItem>, PayloadError> {
    parse_items(value, ParseMode::Strict).map_err(|error| OrderError::from(error).into())
}

pub(crate) fn status(value: &Value) -> Result<OrderStatus, PayloadError> {
    value
        .as_str()
        .ok_or(PayloadError::StatusNotString)
        .and_then(parse_status)
}

/// `{table_number, items}`, both required.
pub(crate) fn new_order(body: &Value) -> Result<NewOrder, PayloadError> {
    let body = object(body)?;

    Ok(NewOrder {
        table_number: table_number(required(body, "table_number")?)?,
        items: items(required(body, "items")?)?,
    })
}

/// Full replacement: `table_number` and `items` required, `status` optional.
pub(crate) fn full_update(body: &Value) -> Result<OrderUpdate, PayloadError> {
    let object = object(body)?;

    Ok(OrderUpdate {
        table_number: Some(table_number(required(object, "table_number")?)?),
        items: Some(items(required(object, "items")?)?),
        status: field(object, "status").map(status).transpose()?,
    })
}

/// Partial update: any subset of `table_number`, `items`, `status`.
pub(crate) fn partial_update(body: &Value) -> Result<OrderUpdate, PayloadError> {
    let body = object(body)?;

    Ok(OrderUpdate {
        table_number: field(body, "table_number").map(table_number).transpose()?,
        items: field(body, "items").map(items).transpose()?,
        status: field(body, "status").map(status).transpose()?,
    })
}

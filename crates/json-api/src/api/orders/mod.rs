//! Order resource collection

mod handlers;
mod models;

pub(crate) use handlers::*;

//! Orders

pub(crate) mod errors;
mod handlers;
pub(crate) mod models;
pub(crate) mod payload;

pub(crate) use handlers::*;

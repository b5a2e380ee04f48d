//! Cafe
//!
//! Order aggregate for the cafe service: typed line items, table numbers, the status lifecycle
//! and total price derivation. Persistence and transport live in `cafe-app` and `cafe-json`.

pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod status;
pub mod tables;

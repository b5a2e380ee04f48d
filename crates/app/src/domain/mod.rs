//! Application domain modules.

pub mod orders;

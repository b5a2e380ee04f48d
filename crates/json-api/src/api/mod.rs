//! Versioned resource API

pub(crate) mod orders;

//! Extension traits

mod body;
mod depot;
mod pagination;
mod result;

pub(crate) use body::read_json;
pub(crate) use depot::DepotExt as _;
pub(crate) use pagination::{PageLinks, PageParams};
pub(crate) use result::ResultExt as _;

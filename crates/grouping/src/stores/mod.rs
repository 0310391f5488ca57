#![forbid(unsafe_code)]

mod group_index;
mod tag_catalog;

pub use group_index::{GroupIndex, GroupManager};
pub use tag_catalog::{TagCatalog, TagNameCatalog};

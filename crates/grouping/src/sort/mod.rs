#![forbid(unsafe_code)]

mod catalog;
mod comparator;
mod sorter;

pub use catalog::SortStrategyCatalog;
pub use comparator::{GroupComparator, ValueComparator, group_comparator, value_comparator};
pub use sorter::{sort_groups, sort_values};

use crate::stores::{GroupIndex, TagCatalog};

/// Collaborators the comparators read from.
#[derive(Clone, Copy)]
pub struct SortContext<'a> {
    pub index: &'a (dyn GroupIndex + Sync),
    pub tags: &'a (dyn TagCatalog + Sync),
}

impl<'a> SortContext<'a> {
    pub fn new(index: &'a (dyn GroupIndex + Sync), tags: &'a (dyn TagCatalog + Sync)) -> Self {
        Self { index, tags }
    }
}

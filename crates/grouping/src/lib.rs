//! Sort strategies for groups of drawable files.
//!
//! [`SortStrategyCatalog`] turns a [`SortStrategy`] into comparators over
//! [`Grouping`]s or raw [`AttrValue`]s. The group index and tag catalog the
//! comparators read from are passed in through a [`SortContext`].

#![forbid(unsafe_code)]

mod error;
pub mod domain;
pub mod icons;
pub mod sort;
pub mod stores;

pub use config::{SortOrder, SortStrategy};
pub use domain::{AttrValue, DrawableAttribute, GroupKey, Grouping};
pub use error::Error;
pub use sort::{SortContext, SortStrategyCatalog};

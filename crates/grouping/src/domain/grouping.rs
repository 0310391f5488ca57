#![forbid(unsafe_code)]

use super::{AttrValue, DrawableAttribute};
use std::fmt;

/// Identifies a group: the attribute it was formed on and the shared value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub attr: DrawableAttribute,
    pub value: AttrValue,
}

impl GroupKey {
    pub fn new(attr: DrawableAttribute, value: impl Into<AttrValue>) -> Self {
        Self {
            attr,
            value: value.into(),
        }
    }
}

impl fmt::Debug for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupKey")
            .field("attr", &self.attr)
            .field("value", &self.value)
            .finish()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attr, self.value)
    }
}

/// A cluster of files sharing one attribute value.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub key: GroupKey,
    /// Number of files in the group.
    pub size: u64,
    /// Fraction of the files flagged by hash set matching, if known.
    pub hash_hit_density: Option<f64>,
}

impl Grouping {
    pub fn new(key: GroupKey, size: u64) -> Self {
        Self {
            key,
            size,
            hash_hit_density: None,
        }
    }

    /// Derive the hash hit density from a hit count.
    ///
    /// Empty groups have no density.
    pub fn with_hash_hits(mut self, hits: u64) -> Self {
        self.hash_hit_density = (self.size > 0).then(|| hits as f64 / self.size as f64);
        self
    }

    pub fn with_density(mut self, density: Option<f64>) -> Self {
        self.hash_hit_density = density;
        self
    }
}

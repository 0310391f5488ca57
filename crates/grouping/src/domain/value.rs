#![forbid(unsafe_code)]

use super::TagId;
use crate::Error;
use std::{cmp::Ordering, fmt};

/// Raw value of a [`DrawableAttribute`](super::DrawableAttribute).
///
/// Values of the same kind have a natural ordering. Values of different
/// kinds never meet within one attribute; comparing them is a caller bug and
/// reported as [`Error::IncomparableTypes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Tag(TagId),
}

impl AttrValue {
    pub const fn kind(&self) -> &'static str {
        match self {
            AttrValue::Text(_) => "text",
            AttrValue::Int(_) => "int",
            AttrValue::Bool(_) => "bool",
            AttrValue::Tag(_) => "tag",
        }
    }

    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, Error> {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => Ok(a.cmp(b)),
            (AttrValue::Int(a), AttrValue::Int(b)) => Ok(a.cmp(b)),
            (AttrValue::Bool(a), AttrValue::Bool(b)) => Ok(a.cmp(b)),
            (AttrValue::Tag(a), AttrValue::Tag(b)) => Ok(a.cmp(b)),
            _ => Err(Error::IncomparableTypes {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Int(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Tag(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<TagId> for AttrValue {
    fn from(value: TagId) -> Self {
        AttrValue::Tag(value)
    }
}

#![forbid(unsafe_code)]

use crate::domain::{AttrValue, DrawableAttribute, TagId};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no group for {attr}={value}")]
    GroupNotFound {
        attr: DrawableAttribute,
        value: AttrValue,
    },

    #[error("unknown tag: {0}")]
    TagNotFound(TagId),

    #[error("cannot compare {left} value with {right} value")]
    IncomparableTypes {
        left: &'static str,
        right: &'static str,
    },

    #[error("missing icon: {0}")]
    IconMissing(PathBuf),

    #[error("icon directory does not exist: {0}")]
    IconDirMissing(PathBuf),
}

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse groups file: {0}")]
    Parse(#[from] toml_edit::de::Error),

    #[error("Group refers to undeclared tag `{0}`")]
    UnknownTag(String),

    #[error("Group `{0}` is declared more than once")]
    DuplicateGroup(String),
}

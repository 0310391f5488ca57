#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Resources {
    /// Directory holding the strategy icons.
    ///
    /// When unset, strategies are listed without icons.
    pub icon_dir: Option<PathBuf>,
}

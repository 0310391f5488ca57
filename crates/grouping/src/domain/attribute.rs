#![forbid(unsafe_code)]

use std::{fmt, str::FromStr};

/// The facet of a drawable file that groups are formed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DrawableAttribute {
    #[default]
    Path,
    Name,
    Category,
    Tags,
    Make,
    Model,
    HashSet,
    MimeType,
    Analyzed,
}

impl DrawableAttribute {
    pub const ALL: [DrawableAttribute; 9] = [
        DrawableAttribute::Path,
        DrawableAttribute::Name,
        DrawableAttribute::Category,
        DrawableAttribute::Tags,
        DrawableAttribute::Make,
        DrawableAttribute::Model,
        DrawableAttribute::HashSet,
        DrawableAttribute::MimeType,
        DrawableAttribute::Analyzed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DrawableAttribute::Path => "path",
            DrawableAttribute::Name => "name",
            DrawableAttribute::Category => "category",
            DrawableAttribute::Tags => "tags",
            DrawableAttribute::Make => "make",
            DrawableAttribute::Model => "model",
            DrawableAttribute::HashSet => "hash_set",
            DrawableAttribute::MimeType => "mime_type",
            DrawableAttribute::Analyzed => "analyzed",
        }
    }

    /// Tag groups are keyed by tag id but presented (and sorted) by name.
    pub const fn is_tags(self) -> bool {
        matches!(self, DrawableAttribute::Tags)
    }
}

impl fmt::Display for DrawableAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawableAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not a drawable attribute"))
    }
}

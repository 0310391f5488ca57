#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Properties groups can be sorted by.
///
/// This is the model behind the strategy picker: each variant carries the
/// label shown to the user, whether the ascending/descending toggle applies,
/// and the icon resource drawn next to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Sort the groups by the number of files in each.
    FileCount,
    /// Sort the groups by the natural order of the grouping value, eg. by
    /// path alphabetically.
    #[default]
    GroupByValue,
    /// Keep whatever order the groups arrive in.
    None,
    /// Sort the groups by hash hit density, then size, highest first.
    Priority,
}

impl SortStrategy {
    pub const COUNT: usize = 4;

    /// All strategies, in the order they are offered to the user.
    pub const ALL: [SortStrategy; Self::COUNT] = [
        SortStrategy::FileCount,
        SortStrategy::GroupByValue,
        SortStrategy::None,
        SortStrategy::Priority,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            SortStrategy::FileCount => "Group Size",
            SortStrategy::GroupByValue => "Group Name",
            SortStrategy::None => "None",
            SortStrategy::Priority => "Priority",
        }
    }

    /// Whether the ascending/descending toggle has any effect.
    pub const fn sort_order_toggle_allowed(self) -> bool {
        matches!(self, SortStrategy::FileCount | SortStrategy::GroupByValue)
    }

    pub const fn icon_resource(self) -> Option<&'static str> {
        match self {
            SortStrategy::FileCount => Some("folder-open-image.png"),
            SortStrategy::GroupByValue => Some("folder-rename.png"),
            SortStrategy::None => Some("prohibition.png"),
            SortStrategy::Priority => Some("hashset_hits.png"),
        }
    }

    /// Stable position of the variant inside [`SortStrategy::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Identifier used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortStrategy::FileCount => "file_count",
            SortStrategy::GroupByValue => "group_by_value",
            SortStrategy::None => "none",
            SortStrategy::Priority => "priority",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not a sort strategy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, strategy) in SortStrategy::ALL.into_iter().enumerate() {
            assert_eq!(strategy.index(), i);
        }
    }

    #[test]
    fn only_sized_and_named_strategies_toggle() {
        let toggles: Vec<_> = SortStrategy::ALL
            .into_iter()
            .filter(|s| s.sort_order_toggle_allowed())
            .collect();
        assert_eq!(
            toggles,
            [SortStrategy::FileCount, SortStrategy::GroupByValue]
        );
    }

    #[test]
    fn parses_own_identifier() {
        for strategy in SortStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<SortStrategy>(), Ok(strategy));
        }
        assert!("size".parse::<SortStrategy>().is_err());
    }

    proptest! {
        #[test]
        fn parse_accepts_only_identifiers(s in "[a-z_]{0,16}") {
            match s.parse::<SortStrategy>() {
                Ok(strategy) => prop_assert_eq!(strategy.as_str(), s.as_str()),
                Err(msg) => prop_assert!(msg.contains(&s)),
            }
        }
    }
}

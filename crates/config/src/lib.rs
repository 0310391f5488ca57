#![forbid(unsafe_code)]

mod error;
mod resources;
mod sort_order;
mod sort_strategy;
mod sorting;

pub use error::Error;
pub use resources::Resources;
pub use sort_order::SortOrder;
pub use sort_strategy::SortStrategy;
pub use sorting::Sorting;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "GROUPSORT_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub sorting: Sorting,
    pub resources: Resources,
}

impl Config {
    /// Default configuration with environment overrides applied.
    ///
    /// An override that does not parse is an error, as it is for [`Config::load`].
    pub fn new() -> Result<Self, Error> {
        Ok(Self::figment().extract()?)
    }

    /// Load configuration from a TOML file layered over the defaults.
    ///
    /// Environment variables prefixed with [`ENV_PREFIX`] win over the file,
    /// with `__` separating nested keys (`GROUPSORT_SORTING__ORDER`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()?;
        Ok(config)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn load_layers_file_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "groupsort.toml",
                r#"
                [sorting]
                strategy = "file_count"
                "#,
            )?;

            let config = Config::load("groupsort.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.sorting.strategy, SortStrategy::FileCount);
            assert_eq!(config.sorting.order, SortOrder::Ascending);
            assert_eq!(config.resources.icon_dir, None);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "groupsort.toml",
                r#"
                [sorting]
                strategy = "file_count"
                order = "ascending"
                "#,
            )?;
            jail.set_env("GROUPSORT_SORTING__ORDER", "descending");

            let config = Config::load("groupsort.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.sorting.order, SortOrder::Descending);
            Ok(())
        });
    }

    #[test]
    fn new_applies_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("GROUPSORT_SORTING__STRATEGY", "priority");
            let config = Config::new().map_err(|e| e.to_string())?;
            assert_eq!(config.sorting.strategy, SortStrategy::Priority);
            Ok(())
        });
    }

    #[test]
    fn new_rejects_bad_env_override() {
        Jail::expect_with(|jail| {
            jail.set_env("GROUPSORT_SORTING__STRATEGY", "priority");
            jail.set_env("GROUPSORT_SORTING__ORDER", "sideways");
            assert!(matches!(Config::new(), Err(Error::Figment(_))));
            Ok(())
        });
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "groupsort.toml",
                r#"
                [sorting]
                strategy = "size"
                "#,
            )?;
            assert!(matches!(
                Config::load("groupsort.toml"),
                Err(Error::Figment(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(Config::load(&path), Err(Error::InvalidPath(p)) if p == path));
    }

    #[test]
    fn toml_roundtrip() {
        Jail::expect_with(|jail| {
            let mut config = Config::default();
            config.sorting.strategy = SortStrategy::None;
            config.sorting.order = SortOrder::Unordered;
            config.resources.icon_dir = Some(jail.directory().join("icons"));

            let rendered = config.to_toml().map_err(|e| e.to_string())?;
            jail.create_file("groupsort.toml", &rendered)?;
            assert_eq!(Config::load("groupsort.toml").map_err(|e| e.to_string())?, config);
            Ok(())
        });
    }
}

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::{SortOrder, SortStrategy};
use grouping::DrawableAttribute;
use std::path::{Path, PathBuf};

/// Groupsort: order groups of drawable files
///
/// Lists the available group sort strategies and applies them to groups
/// described in a TOML file.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub(crate) struct Cli {
    /// Path to configuration file.
    #[arg(short, long, value_parser = validate_file)]
    pub(crate) conffile: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Subcommand, Clone)]
pub(crate) enum Command {
    /// List the available sort strategies.
    List,

    /// Print the effective configuration as TOML.
    Config,

    /// Sort the groups described in a TOML file.
    Sort {
        /// File with `tags` and `[[group]]` entries.
        #[arg(value_parser = validate_file)]
        file: PathBuf,

        /// Strategy to sort by. Defaults to the configured one.
        #[arg(short, long)]
        by: Option<SortStrategy>,

        /// Sort order. Defaults to the configured one.
        #[arg(short, long)]
        order: Option<SortOrder>,

        /// Attribute the groups were formed on.
        #[arg(short, long, default_value_t = DrawableAttribute::Path)]
        attr: DrawableAttribute,
    },
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.exists() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sort_arguments() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "groupsort", "sort", path, "--by", "file_count", "--order", "desc", "--attr", "tags",
        ])
        .unwrap();

        match cli.command {
            Command::Sort {
                by, order, attr, ..
            } => {
                assert_eq!(by, Some(SortStrategy::FileCount));
                assert_eq!(order, Some(SortOrder::Descending));
                assert_eq!(attr, DrawableAttribute::Tags);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_strategy() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert!(Cli::try_parse_from(["groupsort", "sort", path, "--by", "size"]).is_err());
    }
}

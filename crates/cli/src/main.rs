mod cli;
mod error;
mod input;

use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use grouping::icons::{DirIconLoader, IconLoader, NoopIconLoader};
use grouping::sort::sort_groups;
use grouping::{SortContext, SortStrategyCatalog};
use input::{Input, display_value};
use std::io::{self, Write};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new()?,
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Command::List => list(&config, &mut out)?,
        Command::Config => write!(out, "{}", config.to_toml()?)?,
        Command::Sort {
            file,
            by,
            order,
            attr,
        } => {
            let strategy = by.unwrap_or(config.sorting.strategy);
            let order = order.unwrap_or_else(|| config.sorting.effective_order());
            debug!(%strategy, %order, %attr, file = ?file, "sorting groups");

            let mut input = Input::load(&file, attr)?;
            let ctx = SortContext::new(&input.index, &input.tags);
            sort_groups(&mut input.groups, strategy, attr, order, ctx)?;

            for group in &input.groups {
                let value = display_value(&group.key.value, &input.tags);
                let density = group
                    .hash_hit_density
                    .map_or_else(|| "-".to_owned(), |d| format!("{d:.2}"));
                writeln!(out, "{value}\t{}\t{density}", group.size)?;
            }
        }
    }
    Ok(())
}

fn list(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let loader: Box<dyn IconLoader> = match &config.resources.icon_dir {
        Some(dir) => Box::new(DirIconLoader::open(dir)?),
        None => Box::new(NoopIconLoader),
    };
    let catalog = SortStrategyCatalog::new(loader);

    for &strategy in catalog.strategies() {
        let toggle = if catalog.is_sort_order_toggle_allowed(strategy) {
            "toggle"
        } else {
            "fixed"
        };
        // a missing icon file is logged by the catalog and shown as `-`
        let icon = catalog
            .icon(strategy)
            .ok()
            .flatten()
            .map_or_else(|| "-".to_owned(), |icon| icon.path().display().to_string());
        writeln!(
            out,
            "{:<16}{:<12}{:<8}{icon}",
            strategy.as_str(),
            catalog.display_name(strategy),
            toggle
        )?;
    }
    Ok(())
}

#![forbid(unsafe_code)]

use super::{GroupComparator, SortContext, ValueComparator, group_comparator, value_comparator};
use crate::Error;
use crate::domain::DrawableAttribute;
use crate::icons::{Icon, IconLoader};
use config::{SortOrder, SortStrategy};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// The sort strategies offered to the user, with their lazily loaded icons.
pub struct SortStrategyCatalog<L> {
    loader: L,
    icons: [Mutex<Option<Arc<Icon>>>; SortStrategy::COUNT],
}

impl<L: IconLoader> SortStrategyCatalog<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            icons: Default::default(),
        }
    }

    pub fn strategies(&self) -> &'static [SortStrategy] {
        &SortStrategy::ALL
    }

    pub fn display_name(&self, strategy: SortStrategy) -> &'static str {
        strategy.display_name()
    }

    pub fn is_sort_order_toggle_allowed(&self, strategy: SortStrategy) -> bool {
        strategy.sort_order_toggle_allowed()
    }

    /// Icon for `strategy`, loaded on first access.
    ///
    /// A loaded icon is kept for the lifetime of the catalog and every later
    /// call returns the same handle. Failed loads are not cached.
    pub fn icon(&self, strategy: SortStrategy) -> Result<Option<Arc<Icon>>, Error> {
        let Some(resource) = strategy.icon_resource() else {
            return Ok(None);
        };
        let mut slot = self.icons[strategy.index()].lock();
        if let Some(icon) = slot.as_ref() {
            return Ok(Some(Arc::clone(icon)));
        }

        let icon = match self.loader.load(resource) {
            Ok(Some(icon)) => Arc::new(icon),
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(%strategy, resource, error = %err, "failed to load strategy icon");
                return Err(err);
            }
        };
        debug!(%strategy, path = ?icon.path(), "loaded strategy icon");
        *slot = Some(Arc::clone(&icon));
        Ok(Some(icon))
    }

    pub fn group_comparator<'a>(
        &self,
        strategy: SortStrategy,
        attr: DrawableAttribute,
        order: SortOrder,
        ctx: SortContext<'a>,
    ) -> GroupComparator<'a> {
        group_comparator(strategy, attr, order, ctx)
    }

    pub fn value_comparator<'a>(
        &self,
        strategy: SortStrategy,
        attr: DrawableAttribute,
        order: SortOrder,
        ctx: SortContext<'a>,
    ) -> ValueComparator<'a> {
        value_comparator(strategy, attr, order, ctx)
    }
}

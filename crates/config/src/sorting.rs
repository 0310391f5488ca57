#![forbid(unsafe_code)]

use crate::{SortOrder, SortStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Sorting {
    /// Strategy selected when the viewer starts.
    pub strategy: SortStrategy,

    /// Direction used by strategies that honour the order toggle.
    pub order: SortOrder,
}

impl Sorting {
    /// The order the active strategy actually uses.
    ///
    /// Strategies without an order toggle always see the default order.
    pub fn effective_order(self) -> SortOrder {
        if self.strategy.sort_order_toggle_allowed() {
            self.order
        } else {
            SortOrder::default()
        }
    }
}

#![forbid(unsafe_code)]

use super::{SortContext, group_comparator, value_comparator};
use crate::Error;
use crate::domain::{AttrValue, DrawableAttribute, Grouping};
use config::{SortOrder, SortStrategy};
use std::{cell::Cell, cmp::Ordering};
use tracing::trace;

/// Stable sort with a fallible comparator, returning the first error.
///
/// Failures of the strategy comparators are properties of a single item (an
/// unknown value or tag, or a value of the wrong kind), so comparing each
/// item against the first one surfaces them before anything is moved. Any
/// error raised later during the sort is still returned; the slice is then
/// left in an unspecified order.
pub(crate) fn try_sort_by<T, F>(items: &mut [T], compare: F) -> Result<(), Error>
where
    F: Fn(&T, &T) -> Result<Ordering, Error>,
{
    if let Some((first, rest)) = items.split_first() {
        compare(first, first)?;
        for item in rest {
            compare(first, item)?;
        }
    }

    let failure = Cell::new(None);
    items.sort_by(|a, b| match compare(a, b) {
        Ok(ordering) => ordering,
        Err(err) => {
            let first = failure.take().unwrap_or(err);
            failure.set(Some(first));
            Ordering::Equal
        }
    });
    failure.into_inner().map_or(Ok(()), Err)
}

pub fn sort_groups(
    groups: &mut [Grouping],
    strategy: SortStrategy,
    attr: DrawableAttribute,
    order: SortOrder,
    ctx: SortContext<'_>,
) -> Result<(), Error> {
    let compare = group_comparator(strategy, attr, order, ctx);
    try_sort_by(groups, compare)?;
    trace!(%strategy, %order, len = groups.len(), "sorted groups");
    Ok(())
}

pub fn sort_values(
    values: &mut [AttrValue],
    strategy: SortStrategy,
    attr: DrawableAttribute,
    order: SortOrder,
    ctx: SortContext<'_>,
) -> Result<(), Error> {
    let compare = value_comparator(strategy, attr, order, ctx);
    try_sort_by(values, compare)?;
    trace!(%strategy, %order, len = values.len(), "sorted values");
    Ok(())
}

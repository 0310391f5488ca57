#![forbid(unsafe_code)]

use super::SortContext;
use crate::Error;
use crate::domain::{AttrValue, DrawableAttribute, Grouping};
use config::{SortOrder, SortStrategy};
use std::cmp::Ordering;
use tracing::trace;

pub type GroupComparator<'a> =
    Box<dyn Fn(&Grouping, &Grouping) -> Result<Ordering, Error> + Send + Sync + 'a>;

pub type ValueComparator<'a> =
    Box<dyn Fn(&AttrValue, &AttrValue) -> Result<Ordering, Error> + Send + Sync + 'a>;

/// Build the comparator `strategy` uses to order groups formed on `attr`.
pub fn group_comparator<'a>(
    strategy: SortStrategy,
    attr: DrawableAttribute,
    order: SortOrder,
    ctx: SortContext<'a>,
) -> GroupComparator<'a> {
    trace!(%strategy, %attr, %order, "building group comparator");
    match strategy {
        SortStrategy::FileCount => Box::new(move |a: &Grouping, b: &Grouping| {
            directed(order, || Ok(a.size.cmp(&b.size)))
        }),
        SortStrategy::GroupByValue => Box::new(move |a: &Grouping, b: &Grouping| {
            directed(order, || compare_values(attr, &a.key.value, &b.key.value, ctx))
        }),
        SortStrategy::None => Box::new(unsorted::<Grouping>),
        SortStrategy::Priority => {
            Box::new(|a: &Grouping, b: &Grouping| -> Result<Ordering, Error> {
                Ok(by_priority(a, b))
            })
        }
    }
}

/// Build the comparator `strategy` uses to order raw values of `attr`.
///
/// Strategies that sort on group properties resolve each value to its owning
/// group through the context's index first; a value without a group is an
/// error, not a tie.
pub fn value_comparator<'a>(
    strategy: SortStrategy,
    attr: DrawableAttribute,
    order: SortOrder,
    ctx: SortContext<'a>,
) -> ValueComparator<'a> {
    trace!(%strategy, %attr, %order, "building value comparator");
    match strategy {
        SortStrategy::FileCount | SortStrategy::Priority => {
            let groups = group_comparator(strategy, attr, order, ctx);
            Box::new(
                move |a: &AttrValue, b: &AttrValue| -> Result<Ordering, Error> {
                    let a = ctx.index.lookup_group(attr, a)?;
                    let b = ctx.index.lookup_group(attr, b)?;
                    groups(a, b)
                },
            )
        }
        SortStrategy::GroupByValue => Box::new(move |a: &AttrValue, b: &AttrValue| {
            directed(order, || compare_values(attr, a, b, ctx))
        }),
        SortStrategy::None => Box::new(unsorted::<AttrValue>),
    }
}

fn unsorted<T: ?Sized>(_: &T, _: &T) -> Result<Ordering, Error> {
    Ok(Ordering::Equal)
}

/// Apply `order` to an ascending comparison. Unordered never evaluates it.
fn directed(
    order: SortOrder,
    ascending: impl FnOnce() -> Result<Ordering, Error>,
) -> Result<Ordering, Error> {
    match order {
        SortOrder::Ascending => ascending(),
        SortOrder::Descending => ascending().map(Ordering::reverse),
        SortOrder::Unordered => Ok(Ordering::Equal),
    }
}

/// Natural ordering of two values, by display name for tags.
fn compare_values(
    attr: DrawableAttribute,
    a: &AttrValue,
    b: &AttrValue,
    ctx: SortContext<'_>,
) -> Result<Ordering, Error> {
    if !attr.is_tags() {
        return a.try_cmp(b);
    }
    match (a, b) {
        (AttrValue::Tag(a), AttrValue::Tag(b)) => {
            let a = ctx.tags.display_name(*a)?;
            let b = ctx.tags.display_name(*b)?;
            Ok(a.cmp(b))
        }
        _ => Err(Error::IncomparableTypes {
            left: a.kind(),
            right: b.kind(),
        }),
    }
}

/// Highest hash hit density first, then largest group first. Groups without
/// a density go last.
fn by_priority(a: &Grouping, b: &Grouping) -> Ordering {
    match (a.hash_hit_density, b.hash_hit_density) {
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.size.cmp(&a.size),
        (Some(da), Some(db)) => db.total_cmp(&da).then_with(|| b.size.cmp(&a.size)),
    }
}

#![forbid(unsafe_code)]

use crate::Error;
use crate::domain::{AttrValue, DrawableAttribute, GroupId, GroupKey, Grouping};
use slotmap::SlotMap;
use std::collections::HashMap;

/// Resolves attribute values to the group that owns them.
pub trait GroupIndex {
    /// Find the group formed on `attr` with the given value.
    ///
    /// Fails with [`Error::GroupNotFound`] when no such group exists.
    fn lookup_group(&self, attr: DrawableAttribute, value: &AttrValue) -> Result<&Grouping, Error>;
}

/// In-memory group store keyed by [`GroupKey`].
#[derive(Debug, Default)]
pub struct GroupManager {
    groups: SlotMap<GroupId, Grouping>,
    by_key: HashMap<DrawableAttribute, HashMap<AttrValue, GroupId>>,
}

impl GroupManager {
    /// Insert a group, replacing any group with the same key.
    pub fn insert(&mut self, grouping: Grouping) -> GroupId {
        let ids = self.by_key.entry(grouping.key.attr).or_default();
        if let Some(&id) = ids.get(&grouping.key.value) {
            self.groups[id] = grouping;
            return id;
        }
        let value = grouping.key.value.clone();
        let id = self.groups.insert(grouping);
        ids.insert(value, id);
        id
    }

    pub fn get(&self, id: GroupId) -> Option<&Grouping> {
        self.groups.get(id)
    }

    pub fn id_for_key(&self, key: &GroupKey) -> Option<GroupId> {
        self.by_key.get(&key.attr)?.get(&key.value).copied()
    }

    pub fn remove(&mut self, key: &GroupKey) -> Option<Grouping> {
        let ids = self.by_key.get_mut(&key.attr)?;
        let id = ids.remove(&key.value)?;
        if ids.is_empty() {
            self.by_key.remove(&key.attr);
        }
        self.groups.remove(id)
    }

    /// Groups formed on `attr`, in no particular order.
    pub fn groups_for(&self, attr: DrawableAttribute) -> impl Iterator<Item = &Grouping> + '_ {
        self.by_key
            .get(&attr)
            .into_iter()
            .flat_map(|ids| ids.values())
            .filter_map(|id| self.groups.get(*id))
    }

    pub fn groups(&self) -> impl Iterator<Item = &Grouping> + '_ {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl GroupIndex for GroupManager {
    fn lookup_group(&self, attr: DrawableAttribute, value: &AttrValue) -> Result<&Grouping, Error> {
        self.by_key
            .get(&attr)
            .and_then(|ids| ids.get(value))
            .and_then(|id| self.groups.get(*id))
            .ok_or_else(|| Error::GroupNotFound {
                attr,
                value: value.clone(),
            })
    }
}

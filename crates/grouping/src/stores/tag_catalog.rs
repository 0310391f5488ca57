#![forbid(unsafe_code)]

use crate::Error;
use crate::domain::TagId;
use std::collections::HashMap;

/// Source of human readable tag names.
pub trait TagCatalog {
    fn display_name(&self, tag: TagId) -> Result<&str, Error>;
}

#[derive(Debug, Default)]
pub struct TagNameCatalog {
    names: Vec<String>,
    ids: HashMap<String, TagId>,
}

impl TagNameCatalog {
    /// Register a tag name, returning the existing id if it is already known.
    pub fn register(&mut self, display_name: impl Into<String>) -> TagId {
        let display_name = display_name.into();
        if let Some(&id) = self.ids.get(&display_name) {
            return id;
        }
        let id = TagId::new(self.names.len() as u32);
        self.names.push(display_name.clone());
        self.ids.insert(display_name, id);
        id
    }

    pub fn find(&self, display_name: &str) -> Option<TagId> {
        self.ids.get(display_name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TagCatalog for TagNameCatalog {
    fn display_name(&self, tag: TagId) -> Result<&str, Error> {
        self.names
            .get(tag.get() as usize)
            .map(String::as_str)
            .ok_or(Error::TagNotFound(tag))
    }
}

use crate::error::Error;
use grouping::stores::{GroupManager, TagCatalog, TagNameCatalog};
use grouping::{AttrValue, DrawableAttribute, GroupKey, Grouping};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Groups file as written by the user.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupsFile {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, rename = "group")]
    groups: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    value: RawValue,
    size: u64,
    hash_hits: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Groups loaded from a file, in file order, plus the indices they populate.
#[derive(Debug, Default)]
pub(crate) struct Input {
    pub(crate) groups: Vec<Grouping>,
    pub(crate) index: GroupManager,
    pub(crate) tags: TagNameCatalog,
}

impl Input {
    pub(crate) fn load(path: &Path, attr: DrawableAttribute) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text, attr)
    }

    pub(crate) fn parse(text: &str, attr: DrawableAttribute) -> Result<Self, Error> {
        let file: GroupsFile = toml_edit::de::from_str(text)?;
        let mut input = Input::default();
        for name in file.tags {
            input.tags.register(name);
        }

        for raw in file.groups {
            let value = match raw.value {
                RawValue::Text(name) if attr.is_tags() => input
                    .tags
                    .find(&name)
                    .map(AttrValue::Tag)
                    .ok_or(Error::UnknownTag(name))?,
                RawValue::Text(text) => AttrValue::Text(text),
                RawValue::Int(n) => AttrValue::Int(n),
                RawValue::Bool(b) => AttrValue::Bool(b),
            };
            let key = GroupKey::new(attr, value);
            if input.index.id_for_key(&key).is_some() {
                return Err(Error::DuplicateGroup(display_value(&key.value, &input.tags)));
            }
            let mut group = Grouping::new(key, raw.size);
            if let Some(hits) = raw.hash_hits {
                group = group.with_hash_hits(hits);
            }
            input.index.insert(group.clone());
            input.groups.push(group);
        }

        debug!(
            groups = input.groups.len(),
            tags = input.tags.len(),
            "loaded groups file"
        );
        Ok(input)
    }
}

/// Human readable form of a value, using the tag name for tags.
pub(crate) fn display_value(value: &AttrValue, tags: &TagNameCatalog) -> String {
    match value {
        AttrValue::Tag(id) => tags
            .display_name(*id)
            .map_or_else(|_| id.to_string(), str::to_owned),
        value => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouping::stores::GroupIndex;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_value_kinds() {
        let input = Input::parse(
            r#"
            [[group]]
            value = "/dcim"
            size = 4
            hash_hits = 1

            [[group]]
            value = 7
            size = 2

            [[group]]
            value = true
            size = 1
            "#,
            DrawableAttribute::Path,
        )
        .unwrap();

        let values: Vec<_> = input.groups.iter().map(|g| g.key.value.clone()).collect();
        assert_eq!(
            values,
            [
                AttrValue::from("/dcim"),
                AttrValue::Int(7),
                AttrValue::Bool(true)
            ]
        );
        assert_eq!(input.groups[0].hash_hit_density, Some(0.25));
        assert_eq!(input.groups[1].hash_hit_density, None);
        assert_eq!(input.index.len(), 3);
    }

    #[test]
    fn resolves_tag_names() {
        let input = Input::parse(
            r#"
            tags = ["Notable", "Follow Up"]

            [[group]]
            value = "Follow Up"
            size = 3
            "#,
            DrawableAttribute::Tags,
        )
        .unwrap();

        let value = &input.groups[0].key.value;
        let AttrValue::Tag(id) = value else {
            panic!("expected tag value, got {value:?}");
        };
        assert_eq!(input.tags.display_name(*id).unwrap(), "Follow Up");
        assert!(input.index.lookup_group(DrawableAttribute::Tags, value).is_ok());
    }

    #[test]
    fn duplicate_group_is_rejected() {
        let err = Input::parse(
            r#"
            tags = ["Notable"]

            [[group]]
            value = "Notable"
            size = 1

            [[group]]
            value = "Notable"
            size = 2
            "#,
            DrawableAttribute::Tags,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateGroup(name) if name == "Notable"));
    }

    #[test]
    fn undeclared_tag_is_rejected() {
        let err = Input::parse(
            r#"
            [[group]]
            value = "Notable"
            size = 1
            "#,
            DrawableAttribute::Tags,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownTag(name) if name == "Notable"));
    }
}

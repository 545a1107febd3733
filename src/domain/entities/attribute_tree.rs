use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::domain::value_objects::{Cardinality, Group};

/// One mapping of the attribute tree
///
/// Plain fields and nested record lists are kept apart; nested lists
/// serialize under `<name>_attributes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    fields: IndexMap<String, Value>,
    groups: IndexMap<String, Vec<Attributes>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.is_empty()
    }

    /// Set a plain field, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key) || self.groups.contains_key(key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Keep only the plain fields accepted by `keep`
    pub fn retain_fields(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.fields.retain(|key, _| keep(key));
    }

    /// Replace a nested record list; an empty list writes nothing
    pub fn set_records(&mut self, name: &str, records: Vec<Attributes>) {
        let records: Vec<Attributes> = records.into_iter().filter(|r| !r.is_empty()).collect();
        if records.is_empty() {
            return;
        }
        self.groups.insert(name.to_string(), records);
    }

    pub fn records(&self, name: &str) -> &[Attributes] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Merge `other` into `self`, last write wins per key
    pub fn merge(&mut self, other: Attributes) {
        self.fields.extend(other.fields);
        self.groups.extend(other.groups);
    }

    /// JSON form, as written by the `Serialize` impl
    pub fn to_json(&self) -> Value {
        // string keys and JSON values only: serialization is infallible
        serde_json::to_value(self).unwrap_or_default()
    }

    fn singleton_mut(&mut self, name: &str) -> &mut Attributes {
        let entries = self.groups.entry(name.to_string()).or_default();
        if entries.is_empty() {
            entries.push(Attributes::new());
        }
        &mut entries[0]
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + self.groups.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        for (key, records) in &self.groups {
            map.serialize_entry(&format!("{key}_attributes"), records)?;
        }
        map.end()
    }
}

/// Mapped attribute tree built by the crosswalk
///
/// Groups are committed through [`AttributeTree::commit`], which resolves
/// the group's parent chain and applies its declared cardinality.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct AttributeTree {
    root: Attributes,
}

impl AttributeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Set a top-level plain field
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        self.root.set(key, value);
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Commit a staged mapping into `group`
    ///
    /// Singleton groups merge into their one entry, repeating groups append.
    /// An empty mapping is a no-op, so no empty group is ever created.
    pub fn commit(&mut self, group: Group, staged: Attributes) {
        if staged.is_empty() {
            return;
        }

        let container = Self::container_mut(&mut self.root, group);
        let entries = container.groups.entry(group.name().to_string()).or_default();
        match group.cardinality() {
            Cardinality::One => match entries.first_mut() {
                Some(existing) => existing.merge(staged),
                None => entries.push(staged),
            },
            Cardinality::Many => entries.push(staged),
        }
    }

    /// Entries committed to `group` (empty when nothing was committed)
    pub fn group(&self, group: Group) -> &[Attributes] {
        let container = match group.parent() {
            None => Some(&self.root),
            Some(parent) => self.group(parent).first(),
        };
        container
            .map(|attrs| attrs.records(group.name()))
            .unwrap_or(&[])
    }

    pub fn root(&self) -> &Attributes {
        &self.root
    }

    pub fn to_json(&self) -> Value {
        self.root.to_json()
    }

    fn container_mut(root: &mut Attributes, group: Group) -> &mut Attributes {
        match group.parent() {
            None => root,
            Some(parent) => Self::container_mut(root, parent).singleton_mut(parent.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        let mut a = Attributes::new();
        for (k, v) in pairs {
            a.set(*k, json!(v));
        }
        a
    }

    #[test]
    fn test_singleton_commits_merge() {
        let mut tree = AttributeTree::new();
        tree.commit(Group::AdminInformation, attrs(&[("a", "1")]));
        tree.commit(Group::AdminInformation, attrs(&[("b", "2")]));

        assert_eq!(
            tree.to_json(),
            json!({"admin_information_attributes": [{"a": "1", "b": "2"}]})
        );
    }

    #[test]
    fn test_singleton_last_write_wins() {
        let mut tree = AttributeTree::new();
        tree.commit(Group::AdminInformation, attrs(&[("a", "1")]));
        tree.commit(Group::AdminInformation, attrs(&[("a", "2")]));

        assert_eq!(tree.group(Group::AdminInformation).len(), 1);
        assert_eq!(tree.group(Group::AdminInformation)[0].get("a"), Some(&json!("2")));
    }

    #[test]
    fn test_repeating_commits_append_in_order() {
        let mut tree = AttributeTree::new();
        tree.commit(Group::Funders, attrs(&[("funder_name", "A")]));
        tree.commit(Group::Funders, attrs(&[("funder_name", "B")]));

        assert_eq!(
            tree.to_json(),
            json!({"funders_attributes": [{"funder_name": "A"}, {"funder_name": "B"}]})
        );
    }

    #[test]
    fn test_nested_groups_share_one_parent() {
        let mut tree = AttributeTree::new();
        tree.commit(Group::BibliographicInformation, attrs(&[("edition", "2")]));
        tree.commit(Group::Publishers, attrs(&[("publisher_name", "P")]));
        tree.commit(Group::Publishers, attrs(&[("volume", "7")]));
        tree.commit(Group::Event, attrs(&[("event_title", "E1")]));
        tree.commit(Group::Event, attrs(&[("event_title", "E2")]));

        assert_eq!(
            tree.to_json(),
            json!({
                "bibliographic_information_attributes": [{
                    "edition": "2",
                    "publishers_attributes": [{"publisher_name": "P", "volume": "7"}],
                    "event_attributes": [{"event_title": "E1"}, {"event_title": "E2"}]
                }]
            })
        );
        assert_eq!(tree.group(Group::Event).len(), 2);
    }

    #[test]
    fn test_empty_commit_is_noop() {
        let mut tree = AttributeTree::new();
        tree.commit(Group::Publishers, Attributes::new());
        assert!(tree.is_empty());
        assert!(tree.group(Group::Publishers).is_empty());
    }

    #[test]
    fn test_nested_records_serialize_with_suffix() {
        let mut name = attrs(&[("display_name", "Ada")]);
        name.set_records(
            "roles",
            vec![attrs(&[("role_title", "Author")]), Attributes::new()],
        );

        assert_eq!(
            serde_json::to_value(&name).unwrap(),
            json!({"display_name": "Ada", "roles_attributes": [{"role_title": "Author"}]})
        );
        assert_eq!(name.to_json(), serde_json::to_value(&name).unwrap());
    }
}

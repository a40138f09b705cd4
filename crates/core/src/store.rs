//! Read-only property store owned by one accessor.

use std::collections::hash_map::Iter;

use clientconfig_domain::PropertyMap;

/// Properties decoded from the configuration server.
///
/// Built once from the outcome of a load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    properties: PropertyMap,
}

impl PropertyStore {
    pub fn new(properties: PropertyMap) -> Self {
        Self { properties }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.properties.iter()
    }

    pub const fn as_map(&self) -> &PropertyMap {
        &self.properties
    }
}

impl From<PropertyMap> for PropertyStore {
    fn from(properties: PropertyMap) -> Self {
        Self::new(properties)
    }
}

impl<'a> IntoIterator for &'a PropertyStore {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

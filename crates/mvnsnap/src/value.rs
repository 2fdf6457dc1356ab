//! DOM types for parsed metadata documents

use std::collections::HashSet;
use std::ops::Index;

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;

/// The result of parsing any subtree
///
/// A nesting level collapses to a [`Map`] when every key at that level is
/// unique, and stays an ordered [`Entries`] list otherwise, so repeated
/// siblings (for example the `<version>` children of `<versions>`) are never
/// silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A literal run of characters containing no `<`
    Text(String),
    /// Key-value pairs with unique keys, insertion order preserved
    Map(Map),
    /// Ordered single-key entries, duplicates preserved
    List(Entries),
}

impl Value {
    /// Collapse one level's entry sequence into its final shape.
    ///
    /// Unique keys merge into a [`Map`]; any repeated key keeps the whole
    /// level as an ordered [`Entries`] list.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        if entries.iter().all(|entry| seen.insert(entry.key.as_str())) {
            Self::Map(entries.into_iter().map(Entry::into_pair).collect())
        } else {
            Self::List(Entries(entries))
        }
    }

    /// Returns true if this value is text
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if this value is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns true if this value is an entry list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the text if this is a text value, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the map if this is a map value, None otherwise
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the entry list if this is a list value, None otherwise
    pub fn as_list(&self) -> Option<&Entries> {
        match self {
            Self::List(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the value for `key` at this level.
    ///
    /// On a list the first entry with a matching key wins.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Text(_) => None,
            Self::Map(map) => map.get(key),
            Self::List(entries) => entries
                .iter()
                .find(|entry| entry.key == key)
                .map(|entry| &entry.value),
        }
    }

    /// Navigate a chain of keys from this value.
    pub fn dig(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |value, key| value.get(key))
    }

    /// All values stored under `key` at this level, in document order.
    ///
    /// A map contributes at most one value; a list contributes every entry
    /// whose key matches. Handles both shapes a collapsed level can take.
    pub fn children(&self, key: &str) -> Vec<&Self> {
        match self {
            Self::Text(_) => Vec::new(),
            Self::Map(map) => map.get(key).into_iter().collect(),
            Self::List(entries) => entries
                .iter()
                .filter(|entry| entry.key == key)
                .map(|entry| &entry.value)
                .collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl From<Entries> for Value {
    fn from(value: Entries) -> Self {
        Self::List(value)
    }
}

/// A single key-value association
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn into_pair(self) -> (String, Value) {
        (self.key, self.value)
    }
}

/// An order-preserving map of unique string keys to values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(pub(crate) IndexMap<String, Value>);

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map contains no key-value pairs
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the value corresponding to the key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a key-value pair into the map
    /// Returns the previous value if the key already existed
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns true if the map contains the specified key
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns an iterator over the keys
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values
    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over key-value pairs
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Index<&str> for Map {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

/// An ordered sequence of single-key entries, duplicate keys allowed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entries(pub(crate) Vec<Entry>);

impl Entries {
    /// Creates a new empty entry list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the entry at the given index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.0.get(index)
    }

    /// Returns an iterator over the entries
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }
}

impl Index<usize> for Entries {
    type Output = Entry;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Entries {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Entry>> for Entries {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Entry> for Entries {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

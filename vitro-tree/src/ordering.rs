//! Sidebar ordering configuration.
//!
//! An ordering is a tree-shaped map mirroring the experiments folders. Key
//! order decides display order; a `false` value hides the entry; a nested map
//! orders the entry's own children.
//!
//! ```yaml
//! sidebar_ordering:
//!   getting-started.mdx: true
//!   components:
//!     button.tsx: {}
//!     internal: false
//! ```

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use crate::format::{equal_without_extension, strip_extension};

/// What to do with the entry matching an ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingNode {
    /// Remove the entry from the tree (`false`).
    Exclude,
    /// Keep the entry without ordering its children (`true` or `null`).
    Include,
    /// Keep the entry and order its children (a nested map).
    Nested(Ordering),
}

/// Insertion-ordered mapping from segment names to [`OrderingNode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ordering {
    entries: IndexMap<String, OrderingNode>,
}

impl Ordering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping the position of an already present key.
    pub fn insert(&mut self, key: impl Into<String>, node: OrderingNode) {
        self.entries.insert(key.into(), node);
    }

    /// Builder-style [`Ordering::insert`].
    pub fn with(mut self, key: impl Into<String>, node: OrderingNode) -> Self {
        self.insert(key, node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&OrderingNode> {
        self.entries.get(key)
    }

    /// Position and value of the first key equal to `name` ignoring extensions.
    pub fn position_of(&self, name: &str) -> Option<(usize, &OrderingNode)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, (key, _))| equal_without_extension(key, name))
            .map(|(index, (_, node))| (index, node))
    }

    /// Nested ordering for the child called `name`.
    ///
    /// Looks up the exact name first, then the name without its extension.
    /// Entries that are not nested maps yield `None`.
    pub fn nested(&self, name: &str) -> Option<&Ordering> {
        let node = self
            .entries
            .get(name)
            .or_else(|| self.entries.get(strip_extension(name)))?;
        match node {
            OrderingNode::Nested(ordering) => Some(ordering),
            OrderingNode::Exclude | OrderingNode::Include => None,
        }
    }
}

impl FromIterator<(String, OrderingNode)> for Ordering {
    fn from_iter<T: IntoIterator<Item = (String, OrderingNode)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Ordering {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for OrderingNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OrderingNode::Exclude => serializer.serialize_bool(false),
            OrderingNode::Include => serializer.serialize_bool(true),
            OrderingNode::Nested(ordering) => ordering.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Ordering {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderingVisitor)
    }
}

impl<'de> Deserialize<'de> for OrderingNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderingNodeVisitor)
    }
}

struct OrderingVisitor;

impl<'de> Visitor<'de> for OrderingVisitor {
    type Value = Ordering;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of entry names to booleans or nested maps")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, node)) = access.next_entry::<String, OrderingNode>()? {
            entries.insert(key, node);
        }
        Ok(Ordering { entries })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Ordering::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Ordering::default())
    }
}

struct OrderingNodeVisitor;

impl<'de> Visitor<'de> for OrderingNodeVisitor {
    type Value = OrderingNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("`false`, `true` or a nested ordering map")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(if value {
            OrderingNode::Include
        } else {
            OrderingNode::Exclude
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderingNode::Include)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderingNode::Include)
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        OrderingVisitor.visit_map(access).map(OrderingNode::Nested)
    }
}

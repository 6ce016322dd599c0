//! Display-ready derivations of fetched nodes and dependencies.

use crate::model::{Dependency, Node, Properties};

/// The part of a dotted name after the last `.`; the whole name if it has none.
#[inline]
#[must_use]
pub fn short_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Keys of a property map, in the map's insertion order.
pub fn property_keys(properties: &Properties) -> Vec<&str> {
    properties.keys().map(String::as_str).collect()
}

/// A dependency prepared for compact display.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView<'a> {
    pub dependency: &'a Dependency,
    pub source_short_name: &'a str,
    pub target_short_name: &'a str,
    pub property_keys: Vec<&'a str>,
}

impl<'a> EdgeView<'a> {
    pub fn new(dependency: &'a Dependency) -> Self {
        Self {
            dependency,
            source_short_name: short_name(&dependency.source_name),
            target_short_name: short_name(&dependency.target_name),
            property_keys: property_keys(&dependency.properties),
        }
    }

    /// `Source -> Target` using short names.
    pub fn title(&self) -> String {
        format!("{} -> {}", self.source_short_name, self.target_short_name)
    }
}

/// A node prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView<'a> {
    pub node: &'a Node,
    pub short_name: &'a str,
    pub property_keys: Vec<&'a str>,
}

impl<'a> NodeView<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            short_name: short_name(&node.name),
            property_keys: property_keys(&node.properties),
        }
    }
}

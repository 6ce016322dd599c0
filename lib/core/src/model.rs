// Graph snapshots as delivered by the remote analysis service
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Property map of a node or dependency.
///
/// Keys keep the order in which they appear in the JSON document. Values are
/// whatever the analysis produced (strings, numbers, booleans).
pub type Properties = IndexMap<String, serde_json::Value>;

/// Upper bound for walking nested `baseDependencies`.
pub const MAX_BASE_DEPTH: usize = 8;

/// A graph vertex. Edges reference other nodes by name only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub properties: Properties,
    /// Incoming containment edges: `targetName` is this node.
    #[serde(default)]
    pub parents: Vec<Dependency>,
    #[serde(default)]
    pub incoming_deps: Vec<Dependency>,
    #[serde(default)]
    pub outgoing_deps: Vec<Dependency>,
    /// Outgoing containment edges: `sourceName` is this node.
    #[serde(default)]
    pub contained_deps: Vec<Dependency>,
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub source_name: String,
    pub target_name: String,
    pub type_name: String,
    #[serde(default)]
    pub properties: Properties,
    /// Lower-level dependencies rolled up into this one.
    #[serde(default)]
    pub base_dependencies: Vec<Dependency>,
}

/// Free-text description of the loaded graph dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphInfo {
    pub info: String,
}

/// The relation list a dependency was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Incoming,
    Outgoing,
    Contained,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_relation(mut self, relation: Relation, dependency: Dependency) -> Self {
        match relation {
            Relation::Parent => self.parents.push(dependency),
            Relation::Incoming => self.incoming_deps.push(dependency),
            Relation::Outgoing => self.outgoing_deps.push(dependency),
            Relation::Contained => self.contained_deps.push(dependency),
        }
        self
    }

    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.contained_deps.is_empty()
    }

    pub fn has_incoming(&self) -> bool {
        !self.incoming_deps.is_empty()
    }

    pub fn has_outgoing(&self) -> bool {
        !self.outgoing_deps.is_empty()
    }

    /// Embedded dependencies whose endpoints do not match this node.
    ///
    /// Parents and incoming dependencies must target this node; outgoing and
    /// contained dependencies must start at it.
    pub fn relation_violations(&self) -> Vec<(Relation, &Dependency)> {
        let targets = [
            (Relation::Parent, &self.parents),
            (Relation::Incoming, &self.incoming_deps),
        ];
        let sources = [
            (Relation::Outgoing, &self.outgoing_deps),
            (Relation::Contained, &self.contained_deps),
        ];

        let mut violations = Vec::new();
        for (relation, deps) in targets {
            violations.extend(
                deps.iter()
                    .filter(|d| d.target_name != self.name)
                    .map(|d| (relation, d)),
            );
        }
        for (relation, deps) in sources {
            violations.extend(
                deps.iter()
                    .filter(|d| d.source_name != self.name)
                    .map(|d| (relation, d)),
            );
        }
        violations
    }
}

impl Dependency {
    #[inline]
    #[must_use]
    pub fn new(
        source_name: impl Into<String>,
        target_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            target_name: target_name.into(),
            type_name: type_name.into(),
            properties: Properties::new(),
            base_dependencies: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_base(mut self, base: Dependency) -> Self {
        self.base_dependencies.push(base);
        self
    }

    pub fn has_base_dependencies(&self) -> bool {
        !self.base_dependencies.is_empty()
    }

    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Depth-first walk over nested base dependencies, paired with their depth
    /// (direct base dependencies are depth 1).
    ///
    /// `max_depth` is capped at [`MAX_BASE_DEPTH`].
    pub fn base_dependencies_flattened(&self, max_depth: usize) -> Vec<(usize, &Dependency)> {
        let max_depth = max_depth.min(MAX_BASE_DEPTH);
        let mut out = Vec::new();
        collect_base(self, 1, max_depth, &mut out);
        out
    }
}

fn collect_base<'a>(
    dependency: &'a Dependency,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<(usize, &'a Dependency)>,
) {
    if depth > max_depth {
        return;
    }
    for base in &dependency.base_dependencies {
        out.push((depth, base));
        collect_base(base, depth + 1, max_depth, out);
    }
}

//! JSON dumps of built trees
//!
//! A deterministic, serde-built rendering of a schema tree: variant label,
//! namespace declarations, typed attributes and children, all in
//! construction order. The conformance tests compare dumps to assert that
//! rejected or context-inapplicable calls left a tree byte-for-byte
//! unchanged; downstream consumers can use it for debugging. This is not
//! XML serialization.

use crate::model::{AttributeValue, NodeRef, SchemaDom};
use indexmap::IndexMap;
use serde::Serialize;

/// One node of a dumped tree
#[derive(Debug, Serialize)]
pub struct DumpNode {
    /// The variant label (distinguishes same-tag variants)
    pub kind: &'static str,
    /// Namespace declarations made at this node
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub xmlns: IndexMap<String, String>,
    /// Typed attribute values, keyed by XML attribute name, in build order
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<&'static str, AttributeValue>,
    /// Children, in construction order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DumpNode>,
}

/// Dump one node and its subtree
pub fn dump_node(node: NodeRef<'_>) -> DumpNode {
    DumpNode {
        kind: node.kind().label(),
        xmlns: node.namespace_declarations().clone(),
        attributes: node
            .dom()
            .attributes(node.id())
            .iter()
            .map(|(tag, value)| (tag.xml_name(), value.clone()))
            .collect(),
        children: node.children().map(dump_node).collect(),
    }
}

/// Dump a whole tree from its root
pub fn dump_schema(dom: &SchemaDom) -> DumpNode {
    dump_node(dom.node(dom.root()))
}

/// Dump a whole tree as a pretty-printed JSON string
pub fn dump_string(dom: &SchemaDom) -> String {
    // DumpNode serialization cannot fail: no maps with non-string keys
    serde_json::to_string_pretty(&dump_schema(dom)).unwrap_or_default()
}

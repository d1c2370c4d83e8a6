//! The schema element node model
//!
//! A tagged tree of schema node variants with typed attribute slots and
//! child slots. Ownership is arena-style: [`SchemaDom`] owns every node by
//! value in a `Vec`, nodes refer to parent and children by [`NodeId`], and
//! the builder's context stack holds only ids. Each node carries the
//! namespace declarations made at that node (ordered, never mutated once
//! set), its typed attribute values (absent until built, immutable once
//! set), and an ordered child list that always reads back in construction
//! order.
//!
//! Child slots come in two flavors: a singleton slot holds at most the most
//! recently built value (a repeat build unlinks the stale child), while a
//! list slot appends.

use crate::datatypes::{
    DerivationControlSet, FormChoice, NamespaceConstraint, NonNegativeInteger, OccursLimit,
    ProcessingMode, UseType,
};
use crate::namespaces::{NamespaceScope, QName};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Index of a node inside its owning [`SchemaDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

/// The grammar production variant of a node, fixed at creation time by the
/// production table.
///
/// A single tag name can map to several variants depending on where it
/// occurs: `element` is `ElementTopLevel` under `schema`, `ElementLocal`
/// inside `choice`/`sequence` and `ElementNarrow` inside `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // variant names restate the grammar productions
pub enum ElementKind {
    Schema,
    Annotation,
    AppInfo,
    Documentation,
    Import,
    Include,
    Notation,
    AttributeTopLevel,
    AttributeLocal,
    AttributeRef,
    AttributeGroupDef,
    AttributeGroupRef,
    SimpleType,
    ComplexType,
    RestrictionSimpleType,
    RestrictionSimpleContent,
    RestrictionComplexContent,
    Extension,
    SimpleContent,
    ComplexContent,
    List,
    Union,
    GroupDef,
    GroupRef,
    All,
    ChoiceExplicit,
    ChoiceSimple,
    SequenceExplicit,
    SequenceSimple,
    ElementTopLevel,
    ElementLocal,
    ElementNarrow,
    Any,
    AnyAttribute,
    Unique,
    Key,
    Keyref,
    Selector,
    Field,
    MinExclusive,
    MinInclusive,
    MaxExclusive,
    MaxInclusive,
    TotalDigits,
    FractionDigits,
    Length,
    MinLength,
    MaxLength,
    Enumeration,
    WhiteSpace,
    Pattern,
}

impl ElementKind {
    /// The XML tag name this variant renders as
    pub fn xml_name(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Annotation => "annotation",
            Self::AppInfo => "appinfo",
            Self::Documentation => "documentation",
            Self::Import => "import",
            Self::Include => "include",
            Self::Notation => "notation",
            Self::AttributeTopLevel | Self::AttributeLocal | Self::AttributeRef => "attribute",
            Self::AttributeGroupDef | Self::AttributeGroupRef => "attributeGroup",
            Self::SimpleType => "simpleType",
            Self::ComplexType => "complexType",
            Self::RestrictionSimpleType
            | Self::RestrictionSimpleContent
            | Self::RestrictionComplexContent => "restriction",
            Self::Extension => "extension",
            Self::SimpleContent => "simpleContent",
            Self::ComplexContent => "complexContent",
            Self::List => "list",
            Self::Union => "union",
            Self::GroupDef | Self::GroupRef => "group",
            Self::All => "all",
            Self::ChoiceExplicit | Self::ChoiceSimple => "choice",
            Self::SequenceExplicit | Self::SequenceSimple => "sequence",
            Self::ElementTopLevel | Self::ElementLocal | Self::ElementNarrow => "element",
            Self::Any => "any",
            Self::AnyAttribute => "anyAttribute",
            Self::Unique => "unique",
            Self::Key => "key",
            Self::Keyref => "keyref",
            Self::Selector => "selector",
            Self::Field => "field",
            Self::MinExclusive => "minExclusive",
            Self::MinInclusive => "minInclusive",
            Self::MaxExclusive => "maxExclusive",
            Self::MaxInclusive => "maxInclusive",
            Self::TotalDigits => "totalDigits",
            Self::FractionDigits => "fractionDigits",
            Self::Length => "length",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Enumeration => "enumeration",
            Self::WhiteSpace => "whiteSpace",
            Self::Pattern => "pattern",
        }
    }

    /// A stable label that also distinguishes same-tag variants
    pub fn label(&self) -> &'static str {
        match self {
            Self::AttributeTopLevel => "attributeTopLevel",
            Self::AttributeLocal => "attributeLocal",
            Self::AttributeRef => "attributeRef",
            Self::AttributeGroupDef => "attributeGroupDef",
            Self::AttributeGroupRef => "attributeGroupRef",
            Self::RestrictionSimpleType => "restrictionSimpleType",
            Self::RestrictionSimpleContent => "restrictionSimpleContent",
            Self::RestrictionComplexContent => "restrictionComplexContent",
            Self::GroupDef => "groupDef",
            Self::GroupRef => "groupRef",
            Self::ChoiceExplicit => "choiceExplicit",
            Self::ChoiceSimple => "choiceSimple",
            Self::SequenceExplicit => "sequenceExplicit",
            Self::SequenceSimple => "sequenceSimple",
            Self::ElementTopLevel => "elementTopLevel",
            Self::ElementLocal => "elementLocal",
            Self::ElementNarrow => "elementNarrow",
            other => other.xml_name(),
        }
    }
}

/// The tag names a `build<X>Element()` call can carry.
///
/// `schema` is absent: `build_schema_element()` is the reset call, not a
/// child production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // variant names restate the XSD tag names
pub enum ElementTag {
    Annotation,
    AppInfo,
    Documentation,
    Import,
    Include,
    Notation,
    Attribute,
    AttributeGroup,
    SimpleType,
    ComplexType,
    Restriction,
    Extension,
    SimpleContent,
    ComplexContent,
    List,
    Union,
    Group,
    All,
    Choice,
    Sequence,
    Element,
    Any,
    AnyAttribute,
    Unique,
    Key,
    Keyref,
    Selector,
    Field,
    MinExclusive,
    MinInclusive,
    MaxExclusive,
    MaxInclusive,
    TotalDigits,
    FractionDigits,
    Length,
    MinLength,
    MaxLength,
    Enumeration,
    WhiteSpace,
    Pattern,
}

/// The attribute names a `build<X>Attribute()` call can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)] // variant names restate the XSD attribute names
pub enum AttributeTag {
    Abstract,
    AttributeFormDefault,
    Base,
    Block,
    BlockDefault,
    Default,
    ElementFormDefault,
    Final,
    FinalDefault,
    Fixed,
    Form,
    Id,
    ItemType,
    Lang,
    MaxOccurs,
    MemberTypes,
    MinOccurs,
    Mixed,
    Name,
    Namespace,
    Nillable,
    ProcessContents,
    Public,
    Ref,
    Refer,
    SchemaLocation,
    Source,
    SubstitutionGroup,
    System,
    TargetNamespace,
    Type,
    Use,
    Value,
    Version,
    Xpath,
}

impl AttributeTag {
    /// The attribute's XML name
    pub fn xml_name(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::AttributeFormDefault => "attributeFormDefault",
            Self::Base => "base",
            Self::Block => "block",
            Self::BlockDefault => "blockDefault",
            Self::Default => "default",
            Self::ElementFormDefault => "elementFormDefault",
            Self::Final => "final",
            Self::FinalDefault => "finalDefault",
            Self::Fixed => "fixed",
            Self::Form => "form",
            Self::Id => "id",
            Self::ItemType => "itemType",
            Self::Lang => "xml:lang",
            Self::MaxOccurs => "maxOccurs",
            Self::MemberTypes => "memberTypes",
            Self::MinOccurs => "minOccurs",
            Self::Mixed => "mixed",
            Self::Name => "name",
            Self::Namespace => "namespace",
            Self::Nillable => "nillable",
            Self::ProcessContents => "processContents",
            Self::Public => "public",
            Self::Ref => "ref",
            Self::Refer => "refer",
            Self::SchemaLocation => "schemaLocation",
            Self::Source => "source",
            Self::SubstitutionGroup => "substitutionGroup",
            Self::System => "system",
            Self::TargetNamespace => "targetNamespace",
            Self::Type => "type",
            Self::Use => "use",
            Self::Value => "value",
            Self::Version => "version",
            Self::Xpath => "xpath",
        }
    }
}

/// A typed, validated attribute value stored on a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttributeValue {
    /// A plain string (`default`, `fixed`, facet values, ...)
    Str(String),
    /// A boolean (`mixed`, `abstract`, `nillable`, facet `fixed`)
    Boolean(bool),
    /// An NCName (`name`, `id`)
    NcName(String),
    /// A collapsed token (`version`, `public`, `xpath`)
    Token(String),
    /// A language tag (`xml:lang`)
    Language(String),
    /// A URI (`targetNamespace`, `schemaLocation`, `source`, `system`)
    Uri(String),
    /// A non-negative integer (`minOccurs`)
    NonNegativeInteger(NonNegativeInteger),
    /// An integer-or-unbounded limit (`maxOccurs`)
    Limit(OccursLimit),
    /// `form` / `elementFormDefault` / `attributeFormDefault`
    Form(FormChoice),
    /// `use`
    Use(UseType),
    /// `processContents`
    Process(ProcessingMode),
    /// `block` / `final` / `blockDefault` / `finalDefault`
    ControlSet(DerivationControlSet),
    /// A resolved QName (`type`, `ref`, `base`, `refer`, ...)
    QName(QName),
    /// A resolved QName list (`memberTypes`)
    QNameList(Vec<QName>),
    /// A wildcard `namespace` constraint
    NamespaceConstraint(NamespaceConstraint),
}

impl AttributeValue {
    /// The string content, for the string-like variants
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::NcName(s) | Self::Token(s) | Self::Language(s) | Self::Uri(s) => {
                Some(s)
            }
            _ => None,
        }
    }

    /// The boolean content, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The resolved QName, if any
    pub fn as_qname(&self) -> Option<&QName> {
        match self {
            Self::QName(q) => Some(q),
            _ => None,
        }
    }

    /// The resolved QName list, if any
    pub fn as_qname_list(&self) -> Option<&[QName]> {
        match self {
            Self::QNameList(list) => Some(list),
            _ => None,
        }
    }

    /// The non-negative integer content, if any
    pub fn as_non_negative_integer(&self) -> Option<&NonNegativeInteger> {
        match self {
            Self::NonNegativeInteger(n) => Some(n),
            _ => None,
        }
    }

    /// The occurrence limit content, if any
    pub fn as_limit(&self) -> Option<&OccursLimit> {
        match self {
            Self::Limit(l) => Some(l),
            _ => None,
        }
    }

    /// The wildcard namespace constraint, if any
    pub fn as_namespace_constraint(&self) -> Option<&NamespaceConstraint> {
        match self {
            Self::NamespaceConstraint(c) => Some(c),
            _ => None,
        }
    }

    /// The derivation-control set, if any
    pub fn as_control_set(&self) -> Option<&DerivationControlSet> {
        match self {
            Self::ControlSet(c) => Some(c),
            _ => None,
        }
    }
}

/// Identity of a singleton child slot.
///
/// Shared slot names model XSD alternation: `simpleContent`,
/// `complexContent` and the model groups all compete for a complexType's
/// one `ContentModel` slot, and `simpleType`/`complexType` compete for an
/// element's one `TypeDefinition` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    /// The single `annotation` child of most productions
    Annotation,
    /// An element's `simpleType` | `complexType` child
    TypeDefinition,
    /// A type's `simpleContent` | `complexContent` | model-group child
    ContentModel,
    /// A derivation's or group definition's model-group child
    Particle,
    /// An inline `simpleType` child of an attribute, list or restriction
    SimpleTypeDef,
    /// The single `anyAttribute` child
    AnyAttr,
    /// An identity constraint's single `selector` child
    Selector,
}

/// Whether a child rule appends or replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Ordered, append-only child list
    List,
    /// At most one child; a repeat build replaces the previous one
    Singleton(SlotName),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: ElementKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    slots: HashMap<SlotName, NodeId>,
    attributes: IndexMap<AttributeTag, AttributeValue>,
    namespaces: IndexMap<String, String>,
}

impl NodeData {
    fn new(kind: ElementKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            slots: HashMap::new(),
            attributes: IndexMap::new(),
            namespaces: IndexMap::new(),
        }
    }
}

/// The arena-owned schema tree under construction
#[derive(Debug, Clone)]
pub struct SchemaDom {
    nodes: Vec<NodeData>,
    root: NodeId,
    generation: u64,
}

impl SchemaDom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(ElementKind::Schema, None)],
            root: NodeId(0),
            generation: 0,
        }
    }

    /// Discard the whole tree and start over with a fresh, empty schema root
    pub(crate) fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(NodeData::new(ElementKind::Schema, None));
        self.root = NodeId(0);
        self.generation += 1;
    }

    /// The root schema node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Bumped on every reset; two roots with different generations are
    /// distinct trees even though they reuse arena indices
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The production variant of a node
    pub fn kind(&self, id: NodeId) -> ElementKind {
        self.nodes[id.0].kind
    }

    /// A node's children, in construction order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// A node's parent
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// A typed attribute value, if built
    pub fn attribute(&self, id: NodeId, tag: AttributeTag) -> Option<&AttributeValue> {
        self.nodes[id.0].attributes.get(&tag)
    }

    /// All attributes built on a node, in build order
    pub fn attributes(&self, id: NodeId) -> &IndexMap<AttributeTag, AttributeValue> {
        &self.nodes[id.0].attributes
    }

    /// The namespace declarations made at this node, in declaration order.
    /// The empty prefix is the default namespace.
    pub fn namespace_declarations(&self, id: NodeId) -> &IndexMap<String, String> {
        &self.nodes[id.0].namespaces
    }

    /// Resolve a prefix against the node's ancestor chain, closest
    /// declaration first
    pub fn lookup_prefix(&self, id: NodeId, prefix: &str) -> Option<&str> {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(uri) = self.nodes[node.0].namespaces.get(prefix) {
                return Some(uri);
            }
            current = self.nodes[node.0].parent;
        }
        None
    }

    /// The nearest-ancestor default namespace, if any
    pub fn default_namespace(&self, id: NodeId) -> Option<&str> {
        self.lookup_prefix(id, "")
    }

    /// A navigable reference to a node
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { dom: self, id }
    }

    pub(crate) fn create_child(&mut self, parent: NodeId, kind: ElementKind, slot: Slot) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind, Some(parent)));
        let parent_data = &mut self.nodes[parent.0];
        if let Slot::Singleton(name) = slot {
            // unlink the stale occupant so the slot holds only the newest build
            if let Some(stale) = parent_data.slots.insert(name, id) {
                parent_data.children.retain(|&c| c != stale);
            }
        }
        parent_data.children.push(id);
        id
    }

    pub(crate) fn set_attribute_value(
        &mut self,
        id: NodeId,
        tag: AttributeTag,
        value: AttributeValue,
    ) {
        self.nodes[id.0].attributes.insert(tag, value);
    }

    pub(crate) fn bind_namespace(&mut self, id: NodeId, prefix: &str, uri: &str) {
        self.nodes[id.0]
            .namespaces
            .insert(prefix.to_string(), uri.to_string());
    }

    pub(crate) fn retag(&mut self, id: NodeId, kind: ElementKind) {
        self.nodes[id.0].kind = kind;
    }
}

/// A lightweight read-only reference to a node in a [`SchemaDom`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    dom: &'a SchemaDom,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The node's id
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The owning arena
    pub fn dom(&self) -> &'a SchemaDom {
        self.dom
    }

    /// The node's production variant
    pub fn kind(&self) -> ElementKind {
        self.dom.kind(self.id)
    }

    /// The node's children, in construction order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let dom = self.dom;
        dom.children(self.id).iter().map(move |&id| dom.node(id))
    }

    /// The children matching a variant
    pub fn children_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.children().filter(move |c| c.kind() == kind)
    }

    /// The node's parent
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.dom.parent(self.id).map(|id| self.dom.node(id))
    }

    /// A typed attribute value, if built
    pub fn attribute(&self, tag: AttributeTag) -> Option<&'a AttributeValue> {
        self.dom.attribute(self.id, tag)
    }

    /// The namespace declarations made at this node
    pub fn namespace_declarations(&self) -> &'a IndexMap<String, String> {
        self.dom.namespace_declarations(self.id)
    }
}

impl NamespaceScope for NodeRef<'_> {
    fn lookup_prefix(&self, prefix: &str) -> Option<&str> {
        self.dom.lookup_prefix(self.id, prefix)
    }

    fn default_namespace(&self) -> Option<&str> {
        self.dom.default_namespace(self.id)
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

//! The schema builder
//!
//! [`SchemaBuilder`] consumes one construction call at a time, consults the
//! production table for the variant currently open, validates values through
//! the datatype validators and the namespace resolver, and mutates the
//! arena tree. Element-creation calls push a context frame; `end_element`
//! pops one. The builder is long-lived: `build_schema_element` discards the
//! tree under construction and starts a fresh root.
//!
//! Context-inapplicable calls never error. This lets a generic XML-event
//! driver call builder methods keyed only by tag/attribute name without
//! first determining whether they are legal in the current grammar
//! position; legality is entirely the production table's responsibility.

use crate::error::{Error, Result};
use crate::model::{AttributeTag, AttributeValue, ElementTag, NodeId, NodeRef, SchemaDom};
use crate::namespaces::{resolve_qname, resolve_qname_list};
use crate::productions::{production, AttrType};
use crate::datatypes::{
    validate_any_uri, validate_block_set, validate_boolean, validate_derivation_set,
    validate_form_choice, validate_full_derivation_set, validate_id, validate_language,
    validate_max_one, validate_namespace_list, validate_narrow_max, validate_narrow_min,
    validate_ncname, validate_non_negative_integer, validate_occurs_limit,
    validate_processing_mode, validate_string, validate_token, validate_use_type,
};

/// Builds a schema object model from a sequence of structural calls.
///
/// The stack of context frames is never empty: the bottom frame always
/// wraps the schema root and is never popped.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    dom: SchemaDom,
    stack: Vec<NodeId>,
}

impl SchemaBuilder {
    /// A builder over a single frame wrapping a fresh, empty `schema` node
    pub fn new() -> Self {
        let dom = SchemaDom::new();
        let root = dom.root();
        Self {
            dom,
            stack: vec![root],
        }
    }

    fn current(&self) -> NodeId {
        // the root frame is never popped, so the stack is never empty
        self.stack[self.stack.len() - 1]
    }

    /// The node currently open for attribute and child builds
    pub fn current_node(&self) -> NodeRef<'_> {
        self.dom.node(self.current())
    }

    /// The root of the tree built so far. The same tree is returned across
    /// calls until [`build_schema_element`](Self::build_schema_element)
    /// starts a new one.
    pub fn schema(&self) -> NodeRef<'_> {
        self.dom.node(self.dom.root())
    }

    /// The underlying arena
    pub fn dom(&self) -> &SchemaDom {
        &self.dom
    }

    /// Attempt to open a child node of the given tag.
    ///
    /// Illegal in the current context: silent no-op, no frame pushed.
    /// Legal: a node of the variant the production table designates for
    /// this context is created, linked into its parent slot (replacing on
    /// singleton slots, appending on list slots), and becomes the current
    /// context.
    pub fn open_element(&mut self, tag: ElementTag) {
        let current = self.current();
        let prod = production(self.dom.kind(current));
        if let Some(rule) = prod.children.iter().find(|r| r.tag == tag) {
            let id = self.dom.create_child(current, rule.kind, rule.slot);
            self.stack.push(id);
        }
    }

    /// Attempt to set an attribute on the current node from its lexical
    /// string form.
    ///
    /// Illegal in the current context: silent no-op `Ok`. Legal: the value
    /// runs through the attribute's datatype validator (or the namespace
    /// resolver for QName values); on failure the error propagates and the
    /// node is left unchanged. A repeat build of an already-set attribute
    /// is flagged with [`Error::AttributeAlreadySet`].
    pub fn set_attribute(&mut self, tag: AttributeTag, value: &str) -> Result<()> {
        let current = self.current();
        let prod = production(self.dom.kind(current));
        let Some(rule) = prod.attributes.iter().find(|r| r.tag == tag) else {
            return Ok(());
        };
        if self.dom.attribute(current, tag).is_some() {
            return Err(Error::AttributeAlreadySet {
                name: tag.xml_name(),
            });
        }
        let typed = self.validate_value(rule.ty, value, current)?;
        self.dom.set_attribute_value(current, tag, typed);
        if let Some(kind) = rule.retag {
            self.dom.retag(current, kind);
        }
        Ok(())
    }

    fn validate_value(&self, ty: AttrType, value: &str, node: NodeId) -> Result<AttributeValue> {
        let scope = self.dom.node(node);
        Ok(match ty {
            AttrType::Str => AttributeValue::Str(validate_string(value)?),
            AttrType::Boolean => AttributeValue::Boolean(validate_boolean(value)?),
            AttrType::Id => AttributeValue::NcName(validate_id(value)?),
            AttrType::NCName => AttributeValue::NcName(validate_ncname(value)?),
            AttrType::Token => AttributeValue::Token(validate_token(value)?),
            AttrType::Language => AttributeValue::Language(validate_language(value)?),
            AttrType::AnyUri => AttributeValue::Uri(validate_any_uri(value)?),
            AttrType::NonNegativeInteger => {
                AttributeValue::NonNegativeInteger(validate_non_negative_integer(value)?)
            }
            AttrType::OccursLimit => AttributeValue::Limit(validate_occurs_limit(value)?),
            AttrType::NarrowMin => {
                AttributeValue::NonNegativeInteger(validate_narrow_min(value)?)
            }
            AttrType::NarrowMax => AttributeValue::Limit(validate_narrow_max(value)?),
            AttrType::MaxOne => AttributeValue::Limit(validate_max_one(value)?),
            AttrType::FormChoice => AttributeValue::Form(validate_form_choice(value)?),
            AttrType::UseType => AttributeValue::Use(validate_use_type(value)?),
            AttrType::ProcessingMode => {
                AttributeValue::Process(validate_processing_mode(value)?)
            }
            AttrType::BlockSet => AttributeValue::ControlSet(validate_block_set(value)?),
            AttrType::DerivationSet => {
                AttributeValue::ControlSet(validate_derivation_set(value)?)
            }
            AttrType::FullDerivationSet => {
                AttributeValue::ControlSet(validate_full_derivation_set(value)?)
            }
            AttrType::NamespaceList => {
                AttributeValue::NamespaceConstraint(validate_namespace_list(value)?)
            }
            AttrType::QName => AttributeValue::QName(resolve_qname(value, &scope)?),
            AttrType::QNameList => {
                AttributeValue::QNameList(resolve_qname_list(value, &scope)?)
            }
        })
    }

    /// Close the current context, returning to the parent. The root schema
    /// frame is never popped; at the root this is a no-op.
    pub fn end_element(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Declare a namespace mapping scoped to the current node and its
    /// descendants. The empty prefix declares the default namespace.
    pub fn bind_namespace(&mut self, prefix: &str, uri: &str) {
        let current = self.current();
        self.dom.bind_namespace(current, prefix, uri);
    }

    /// Discard any in-progress tree and start a new, empty `schema` root as
    /// the current context
    pub fn build_schema_element(&mut self) {
        self.dom.reset();
        self.stack.clear();
        self.stack.push(self.dom.root());
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! element_facade {
    ($($name:ident => $tag:ident, $xml:literal;)*) => {
        /// One method per XSD element construct, forwarding to
        /// [`open_element`](Self::open_element). This is the surface the
        /// external XML reader drives.
        impl SchemaBuilder {
            $(
                #[doc = concat!("Attempt to open a `", $xml,
                    "` child node; silent no-op if illegal in the current context.")]
                pub fn $name(&mut self) {
                    self.open_element(ElementTag::$tag);
                }
            )*
        }
    };
}

element_facade! {
    build_annotation_element => Annotation, "annotation";
    build_app_info_element => AppInfo, "appinfo";
    build_documentation_element => Documentation, "documentation";
    build_import_element => Import, "import";
    build_include_element => Include, "include";
    build_notation_element => Notation, "notation";
    build_attribute_element => Attribute, "attribute";
    build_attribute_group_element => AttributeGroup, "attributeGroup";
    build_simple_type_element => SimpleType, "simpleType";
    build_complex_type_element => ComplexType, "complexType";
    build_restriction_element => Restriction, "restriction";
    build_extension_element => Extension, "extension";
    build_simple_content_element => SimpleContent, "simpleContent";
    build_complex_content_element => ComplexContent, "complexContent";
    build_list_element => List, "list";
    build_union_element => Union, "union";
    build_group_element => Group, "group";
    build_all_element => All, "all";
    build_choice_element => Choice, "choice";
    build_sequence_element => Sequence, "sequence";
    build_element_element => Element, "element";
    build_any_element => Any, "any";
    build_any_attribute_element => AnyAttribute, "anyAttribute";
    build_unique_element => Unique, "unique";
    build_key_element => Key, "key";
    build_keyref_element => Keyref, "keyref";
    build_selector_element => Selector, "selector";
    build_field_element => Field, "field";
    build_min_exclusive_element => MinExclusive, "minExclusive";
    build_min_inclusive_element => MinInclusive, "minInclusive";
    build_max_exclusive_element => MaxExclusive, "maxExclusive";
    build_max_inclusive_element => MaxInclusive, "maxInclusive";
    build_total_digits_element => TotalDigits, "totalDigits";
    build_fraction_digits_element => FractionDigits, "fractionDigits";
    build_length_element => Length, "length";
    build_min_length_element => MinLength, "minLength";
    build_max_length_element => MaxLength, "maxLength";
    build_enumeration_element => Enumeration, "enumeration";
    build_white_space_element => WhiteSpace, "whiteSpace";
    build_pattern_element => Pattern, "pattern";
}

macro_rules! attribute_facade {
    ($($name:ident => $tag:ident, $xml:literal;)*) => {
        /// One method per XSD attribute construct, forwarding to
        /// [`set_attribute`](Self::set_attribute).
        impl SchemaBuilder {
            $(
                #[doc = concat!("Attempt to set the `", $xml,
                    "` attribute on the current node; silent no-op if illegal ",
                    "in the current context, error if legal but invalid.")]
                pub fn $name(&mut self, value: &str) -> Result<()> {
                    self.set_attribute(AttributeTag::$tag, value)
                }
            )*
        }
    };
}

attribute_facade! {
    build_abstract_attribute => Abstract, "abstract";
    build_attribute_form_default_attribute => AttributeFormDefault, "attributeFormDefault";
    build_base_attribute => Base, "base";
    build_block_attribute => Block, "block";
    build_block_default_attribute => BlockDefault, "blockDefault";
    build_default_attribute => Default, "default";
    build_element_form_default_attribute => ElementFormDefault, "elementFormDefault";
    build_final_attribute => Final, "final";
    build_final_default_attribute => FinalDefault, "finalDefault";
    build_fixed_attribute => Fixed, "fixed";
    build_form_attribute => Form, "form";
    build_id_attribute => Id, "id";
    build_item_type_attribute => ItemType, "itemType";
    build_lang_attribute => Lang, "xml:lang";
    build_max_occurs_attribute => MaxOccurs, "maxOccurs";
    build_member_types_attribute => MemberTypes, "memberTypes";
    build_min_occurs_attribute => MinOccurs, "minOccurs";
    build_mixed_attribute => Mixed, "mixed";
    build_name_attribute => Name, "name";
    build_namespace_attribute => Namespace, "namespace";
    build_nillable_attribute => Nillable, "nillable";
    build_process_contents_attribute => ProcessContents, "processContents";
    build_public_attribute => Public, "public";
    build_ref_attribute => Ref, "ref";
    build_refer_attribute => Refer, "refer";
    build_schema_location_attribute => SchemaLocation, "schemaLocation";
    build_source_attribute => Source, "source";
    build_substitution_group_attribute => SubstitutionGroup, "substitutionGroup";
    build_system_attribute => System, "system";
    build_target_namespace_attribute => TargetNamespace, "targetNamespace";
    build_type_attribute => Type, "type";
    build_use_attribute => Use, "use";
    build_value_attribute => Value, "value";
    build_version_attribute => Version, "version";
    build_xpath_attribute => Xpath, "xpath";
}

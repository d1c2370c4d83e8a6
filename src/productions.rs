//! The production table
//!
//! The authoritative, static encoding of the XSD-of-XSD grammar: for each
//! production variant, which attributes are legal (and which datatype
//! validator gates each one) and which child productions are legal (and
//! which concrete variant a child build yields, since a single tag like
//! `element` produces different variants depending solely on where it is
//! built).
//!
//! Entries that look alike are deliberately kept separate: "element nested
//! in `all`" and "element nested in `choice`/`sequence`" differ only in
//! their accepted occurs ranges, and sharing an entry between them would
//! silently change what the builder accepts. Adding a production is a data
//! change here, not a code change in the builder.

use crate::model::{AttributeTag, ElementKind, ElementTag, Slot, SlotName};

/// The datatype validator gating an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    /// `string`: any value
    Str,
    /// `boolean`: true/false/1/0
    Boolean,
    /// `ID`
    Id,
    /// `NCName`
    NCName,
    /// `token`
    Token,
    /// `language`
    Language,
    /// `anyURI`
    AnyUri,
    /// arbitrary-precision `nonNegativeInteger`
    NonNegativeInteger,
    /// `nonNegativeInteger` or the literal `unbounded`
    OccursLimit,
    /// minOccurs narrowed to {0, 1}
    NarrowMin,
    /// maxOccurs narrowed to {0, 1}
    NarrowMax,
    /// maxOccurs that must be exactly 1
    MaxOne,
    /// `formChoice`
    FormChoice,
    /// `useType`
    UseType,
    /// `processingMode`
    ProcessingMode,
    /// `blockSet`
    BlockSet,
    /// `derivationSet`
    DerivationSet,
    /// `fullDerivationSet`
    FullDerivationSet,
    /// wildcard `namespaceList`
    NamespaceList,
    /// a QName, resolved against the ancestor chain
    QName,
    /// a whitespace-separated QName list
    QNameList,
}

/// One legal attribute of a production
#[derive(Debug, Clone, Copy)]
pub struct AttributeRule {
    /// The attribute name
    pub tag: AttributeTag,
    /// The validator gating its value
    pub ty: AttrType,
    /// When set, a successful build retags the open node to this variant
    /// (local `attribute` becomes a reference once `ref` is built)
    pub retag: Option<ElementKind>,
}

/// One legal child of a production
#[derive(Debug, Clone, Copy)]
pub struct ChildRule {
    /// The tag name of the build call
    pub tag: ElementTag,
    /// The concrete variant created in this context
    pub kind: ElementKind,
    /// Append or replace semantics
    pub slot: Slot,
}

/// The legal attributes and children of one production variant
#[derive(Debug)]
pub struct Production {
    /// Legal attributes
    pub attributes: &'static [AttributeRule],
    /// Legal children
    pub children: &'static [ChildRule],
}

const fn attr(tag: AttributeTag, ty: AttrType) -> AttributeRule {
    AttributeRule {
        tag,
        ty,
        retag: None,
    }
}

const fn child(tag: ElementTag, kind: ElementKind, slot: Slot) -> ChildRule {
    ChildRule { tag, kind, slot }
}

use AttrType as D;
use AttributeTag as A;
use ElementKind as K;
use ElementTag as T;

const ANNOTATION: ChildRule = child(
    T::Annotation,
    K::Annotation,
    Slot::Singleton(SlotName::Annotation),
);

const LOCAL_ATTRIBUTE: ChildRule = child(T::Attribute, K::AttributeLocal, Slot::List);
const ATTRIBUTE_GROUP_REF: ChildRule = child(T::AttributeGroup, K::AttributeGroupRef, Slot::List);
const ANY_ATTRIBUTE: ChildRule = child(
    T::AnyAttribute,
    K::AnyAttribute,
    Slot::Singleton(SlotName::AnyAttr),
);

static SCHEMA: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::TargetNamespace, D::AnyUri),
        attr(A::Version, D::Token),
        attr(A::FinalDefault, D::FullDerivationSet),
        attr(A::BlockDefault, D::BlockSet),
        attr(A::AttributeFormDefault, D::FormChoice),
        attr(A::ElementFormDefault, D::FormChoice),
    ],
    children: &[
        child(T::Include, K::Include, Slot::List),
        child(T::Import, K::Import, Slot::List),
        // schema is the one production where annotation repeats
        child(T::Annotation, K::Annotation, Slot::List),
        child(T::SimpleType, K::SimpleType, Slot::List),
        child(T::ComplexType, K::ComplexType, Slot::List),
        child(T::Group, K::GroupDef, Slot::List),
        child(T::AttributeGroup, K::AttributeGroupDef, Slot::List),
        child(T::Element, K::ElementTopLevel, Slot::List),
        child(T::Attribute, K::AttributeTopLevel, Slot::List),
        child(T::Notation, K::Notation, Slot::List),
    ],
};

static ANNOTATION_PROD: Production = Production {
    attributes: &[attr(A::Id, D::Id)],
    children: &[
        child(T::AppInfo, K::AppInfo, Slot::List),
        child(T::Documentation, K::Documentation, Slot::List),
    ],
};

static APP_INFO: Production = Production {
    attributes: &[attr(A::Source, D::AnyUri)],
    children: &[],
};

static DOCUMENTATION: Production = Production {
    attributes: &[attr(A::Source, D::AnyUri), attr(A::Lang, D::Language)],
    children: &[],
};

static IMPORT: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Namespace, D::AnyUri),
        attr(A::SchemaLocation, D::AnyUri),
    ],
    children: &[ANNOTATION],
};

static INCLUDE: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::SchemaLocation, D::AnyUri)],
    children: &[ANNOTATION],
};

static NOTATION: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Public, D::Token),
        attr(A::System, D::AnyUri),
    ],
    children: &[ANNOTATION],
};

static ATTRIBUTE_TOP_LEVEL: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Type, D::QName),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::SimpleTypeDef),
        ),
    ],
};

static ATTRIBUTE_LOCAL: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        // building ref turns the declaration into a reference
        AttributeRule {
            tag: A::Ref,
            ty: D::QName,
            retag: Some(K::AttributeRef),
        },
        attr(A::Type, D::QName),
        attr(A::Form, D::FormChoice),
        attr(A::Use, D::UseType),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::SimpleTypeDef),
        ),
    ],
};

static ATTRIBUTE_REF: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Ref, D::QName),
        attr(A::Use, D::UseType),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
    ],
    children: &[ANNOTATION],
};

static ATTRIBUTE_GROUP_DEF: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Name, D::NCName)],
    children: &[
        ANNOTATION,
        LOCAL_ATTRIBUTE,
        ATTRIBUTE_GROUP_REF,
        ANY_ATTRIBUTE,
    ],
};

static ATTRIBUTE_GROUP_REF_PROD: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Ref, D::QName)],
    children: &[ANNOTATION],
};

static SIMPLE_TYPE: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Final, D::DerivationSet),
    ],
    children: &[
        ANNOTATION,
        child(
            T::Restriction,
            K::RestrictionSimpleType,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(T::List, K::List, Slot::Singleton(SlotName::ContentModel)),
        child(T::Union, K::Union, Slot::Singleton(SlotName::ContentModel)),
    ],
};

static COMPLEX_TYPE: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Abstract, D::Boolean),
        attr(A::Mixed, D::Boolean),
        attr(A::Block, D::DerivationSet),
        attr(A::Final, D::DerivationSet),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleContent,
            K::SimpleContent,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(
            T::ComplexContent,
            K::ComplexContent,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(
            T::Group,
            K::GroupRef,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(T::All, K::All, Slot::Singleton(SlotName::ContentModel)),
        child(
            T::Choice,
            K::ChoiceExplicit,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(
            T::Sequence,
            K::SequenceExplicit,
            Slot::Singleton(SlotName::ContentModel),
        ),
        LOCAL_ATTRIBUTE,
        ATTRIBUTE_GROUP_REF,
        ANY_ATTRIBUTE,
    ],
};

static SIMPLE_CONTENT: Production = Production {
    attributes: &[attr(A::Id, D::Id)],
    children: &[
        ANNOTATION,
        child(
            T::Restriction,
            K::RestrictionSimpleContent,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(
            T::Extension,
            K::Extension,
            Slot::Singleton(SlotName::ContentModel),
        ),
    ],
};

static COMPLEX_CONTENT: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Mixed, D::Boolean)],
    children: &[
        ANNOTATION,
        child(
            T::Restriction,
            K::RestrictionComplexContent,
            Slot::Singleton(SlotName::ContentModel),
        ),
        child(
            T::Extension,
            K::Extension,
            Slot::Singleton(SlotName::ContentModel),
        ),
    ],
};

static RESTRICTION_SIMPLE_TYPE: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Base, D::QName)],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::SimpleTypeDef),
        ),
        child(T::MinExclusive, K::MinExclusive, Slot::List),
        child(T::MinInclusive, K::MinInclusive, Slot::List),
        child(T::MaxExclusive, K::MaxExclusive, Slot::List),
        child(T::MaxInclusive, K::MaxInclusive, Slot::List),
        child(T::TotalDigits, K::TotalDigits, Slot::List),
        child(T::FractionDigits, K::FractionDigits, Slot::List),
        child(T::Length, K::Length, Slot::List),
        child(T::MinLength, K::MinLength, Slot::List),
        child(T::MaxLength, K::MaxLength, Slot::List),
        child(T::Enumeration, K::Enumeration, Slot::List),
        child(T::WhiteSpace, K::WhiteSpace, Slot::List),
        child(T::Pattern, K::Pattern, Slot::List),
    ],
};

static RESTRICTION_SIMPLE_CONTENT: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Base, D::QName)],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::SimpleTypeDef),
        ),
        child(T::MinExclusive, K::MinExclusive, Slot::List),
        child(T::MinInclusive, K::MinInclusive, Slot::List),
        child(T::MaxExclusive, K::MaxExclusive, Slot::List),
        child(T::MaxInclusive, K::MaxInclusive, Slot::List),
        child(T::TotalDigits, K::TotalDigits, Slot::List),
        child(T::FractionDigits, K::FractionDigits, Slot::List),
        child(T::Length, K::Length, Slot::List),
        child(T::MinLength, K::MinLength, Slot::List),
        child(T::MaxLength, K::MaxLength, Slot::List),
        child(T::Enumeration, K::Enumeration, Slot::List),
        child(T::WhiteSpace, K::WhiteSpace, Slot::List),
        child(T::Pattern, K::Pattern, Slot::List),
        LOCAL_ATTRIBUTE,
        ATTRIBUTE_GROUP_REF,
        ANY_ATTRIBUTE,
    ],
};

static RESTRICTION_COMPLEX_CONTENT: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Base, D::QName)],
    children: &[
        ANNOTATION,
        child(T::Group, K::GroupRef, Slot::Singleton(SlotName::Particle)),
        child(T::All, K::All, Slot::Singleton(SlotName::Particle)),
        child(
            T::Choice,
            K::ChoiceExplicit,
            Slot::Singleton(SlotName::Particle),
        ),
        child(
            T::Sequence,
            K::SequenceExplicit,
            Slot::Singleton(SlotName::Particle),
        ),
        LOCAL_ATTRIBUTE,
        ATTRIBUTE_GROUP_REF,
        ANY_ATTRIBUTE,
    ],
};

static EXTENSION: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Base, D::QName)],
    children: &[
        ANNOTATION,
        child(T::Group, K::GroupRef, Slot::Singleton(SlotName::Particle)),
        child(T::All, K::All, Slot::Singleton(SlotName::Particle)),
        child(
            T::Choice,
            K::ChoiceExplicit,
            Slot::Singleton(SlotName::Particle),
        ),
        child(
            T::Sequence,
            K::SequenceExplicit,
            Slot::Singleton(SlotName::Particle),
        ),
        LOCAL_ATTRIBUTE,
        ATTRIBUTE_GROUP_REF,
        ANY_ATTRIBUTE,
    ],
};

static LIST_PROD: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::ItemType, D::QName)],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::SimpleTypeDef),
        ),
    ],
};

static UNION_PROD: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::MemberTypes, D::QNameList)],
    children: &[
        ANNOTATION,
        // member types given inline repeat
        child(T::SimpleType, K::SimpleType, Slot::List),
    ],
};

static GROUP_DEF: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Name, D::NCName)],
    children: &[
        ANNOTATION,
        child(T::All, K::All, Slot::Singleton(SlotName::Particle)),
        child(
            T::Choice,
            K::ChoiceSimple,
            Slot::Singleton(SlotName::Particle),
        ),
        child(
            T::Sequence,
            K::SequenceSimple,
            Slot::Singleton(SlotName::Particle),
        ),
    ],
};

static GROUP_REF: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Ref, D::QName),
        attr(A::MinOccurs, D::NonNegativeInteger),
        attr(A::MaxOccurs, D::OccursLimit),
    ],
    children: &[ANNOTATION],
};

static ALL: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::MinOccurs, D::NarrowMin),
        attr(A::MaxOccurs, D::MaxOne),
    ],
    children: &[
        ANNOTATION,
        child(T::Element, K::ElementNarrow, Slot::List),
    ],
};

static EXPLICIT_GROUP: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::MinOccurs, D::NonNegativeInteger),
        attr(A::MaxOccurs, D::OccursLimit),
    ],
    children: &[
        ANNOTATION,
        child(T::Element, K::ElementLocal, Slot::List),
        child(T::Group, K::GroupRef, Slot::List),
        child(T::Choice, K::ChoiceExplicit, Slot::List),
        child(T::Sequence, K::SequenceExplicit, Slot::List),
        child(T::Any, K::Any, Slot::List),
    ],
};

// inside a named group definition the occurs attributes are absent
static SIMPLE_EXPLICIT_GROUP: Production = Production {
    attributes: &[attr(A::Id, D::Id)],
    children: &[
        ANNOTATION,
        child(T::Element, K::ElementLocal, Slot::List),
        child(T::Group, K::GroupRef, Slot::List),
        child(T::Choice, K::ChoiceExplicit, Slot::List),
        child(T::Sequence, K::SequenceExplicit, Slot::List),
        child(T::Any, K::Any, Slot::List),
    ],
};

static ELEMENT_TOP_LEVEL: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Type, D::QName),
        attr(A::SubstitutionGroup, D::QName),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
        attr(A::Nillable, D::Boolean),
        attr(A::Abstract, D::Boolean),
        attr(A::Final, D::DerivationSet),
        attr(A::Block, D::BlockSet),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(
            T::ComplexType,
            K::ComplexType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(T::Unique, K::Unique, Slot::List),
        child(T::Key, K::Key, Slot::List),
        child(T::Keyref, K::Keyref, Slot::List),
    ],
};

static ELEMENT_LOCAL: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Ref, D::QName),
        attr(A::Type, D::QName),
        attr(A::MinOccurs, D::NonNegativeInteger),
        attr(A::MaxOccurs, D::OccursLimit),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
        attr(A::Nillable, D::Boolean),
        attr(A::Form, D::FormChoice),
        attr(A::Block, D::BlockSet),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(
            T::ComplexType,
            K::ComplexType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(T::Unique, K::Unique, Slot::List),
        child(T::Key, K::Key, Slot::List),
        child(T::Keyref, K::Keyref, Slot::List),
    ],
};

// element nested in all: occurs narrowed to {0, 1}
static ELEMENT_NARROW: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Ref, D::QName),
        attr(A::Type, D::QName),
        attr(A::MinOccurs, D::NarrowMin),
        attr(A::MaxOccurs, D::NarrowMax),
        attr(A::Default, D::Str),
        attr(A::Fixed, D::Str),
        attr(A::Nillable, D::Boolean),
        attr(A::Form, D::FormChoice),
        attr(A::Block, D::BlockSet),
    ],
    children: &[
        ANNOTATION,
        child(
            T::SimpleType,
            K::SimpleType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(
            T::ComplexType,
            K::ComplexType,
            Slot::Singleton(SlotName::TypeDefinition),
        ),
        child(T::Unique, K::Unique, Slot::List),
        child(T::Key, K::Key, Slot::List),
        child(T::Keyref, K::Keyref, Slot::List),
    ],
};

static ANY_PROD: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Namespace, D::NamespaceList),
        attr(A::ProcessContents, D::ProcessingMode),
        attr(A::MinOccurs, D::NonNegativeInteger),
        attr(A::MaxOccurs, D::OccursLimit),
    ],
    children: &[ANNOTATION],
};

static ANY_ATTRIBUTE_PROD: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Namespace, D::NamespaceList),
        attr(A::ProcessContents, D::ProcessingMode),
    ],
    children: &[ANNOTATION],
};

static UNIQUE_OR_KEY: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Name, D::NCName)],
    children: &[
        ANNOTATION,
        child(T::Selector, K::Selector, Slot::Singleton(SlotName::Selector)),
        child(T::Field, K::Field, Slot::List),
    ],
};

static KEYREF: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Name, D::NCName),
        attr(A::Refer, D::QName),
    ],
    children: &[
        ANNOTATION,
        child(T::Selector, K::Selector, Slot::Singleton(SlotName::Selector)),
        child(T::Field, K::Field, Slot::List),
    ],
};

static SELECTOR_OR_FIELD: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Xpath, D::Token)],
    children: &[ANNOTATION],
};

// facet value typing is semantic validation, out of the builder's scope
static FACET: Production = Production {
    attributes: &[
        attr(A::Id, D::Id),
        attr(A::Value, D::Str),
        attr(A::Fixed, D::Boolean),
    ],
    children: &[ANNOTATION],
};

static FACET_NO_FIXED: Production = Production {
    attributes: &[attr(A::Id, D::Id), attr(A::Value, D::Str)],
    children: &[ANNOTATION],
};

/// Look up the production for a variant
pub fn production(kind: ElementKind) -> &'static Production {
    match kind {
        K::Schema => &SCHEMA,
        K::Annotation => &ANNOTATION_PROD,
        K::AppInfo => &APP_INFO,
        K::Documentation => &DOCUMENTATION,
        K::Import => &IMPORT,
        K::Include => &INCLUDE,
        K::Notation => &NOTATION,
        K::AttributeTopLevel => &ATTRIBUTE_TOP_LEVEL,
        K::AttributeLocal => &ATTRIBUTE_LOCAL,
        K::AttributeRef => &ATTRIBUTE_REF,
        K::AttributeGroupDef => &ATTRIBUTE_GROUP_DEF,
        K::AttributeGroupRef => &ATTRIBUTE_GROUP_REF_PROD,
        K::SimpleType => &SIMPLE_TYPE,
        K::ComplexType => &COMPLEX_TYPE,
        K::RestrictionSimpleType => &RESTRICTION_SIMPLE_TYPE,
        K::RestrictionSimpleContent => &RESTRICTION_SIMPLE_CONTENT,
        K::RestrictionComplexContent => &RESTRICTION_COMPLEX_CONTENT,
        K::Extension => &EXTENSION,
        K::SimpleContent => &SIMPLE_CONTENT,
        K::ComplexContent => &COMPLEX_CONTENT,
        K::List => &LIST_PROD,
        K::Union => &UNION_PROD,
        K::GroupDef => &GROUP_DEF,
        K::GroupRef => &GROUP_REF,
        K::All => &ALL,
        K::ChoiceExplicit | K::SequenceExplicit => &EXPLICIT_GROUP,
        K::ChoiceSimple | K::SequenceSimple => &SIMPLE_EXPLICIT_GROUP,
        K::ElementTopLevel => &ELEMENT_TOP_LEVEL,
        K::ElementLocal => &ELEMENT_LOCAL,
        K::ElementNarrow => &ELEMENT_NARROW,
        K::Any => &ANY_PROD,
        K::AnyAttribute => &ANY_ATTRIBUTE_PROD,
        K::Unique | K::Key => &UNIQUE_OR_KEY,
        K::Keyref => &KEYREF,
        K::Selector | K::Field => &SELECTOR_OR_FIELD,
        K::MinExclusive
        | K::MinInclusive
        | K::MaxExclusive
        | K::MaxInclusive
        | K::TotalDigits
        | K::FractionDigits
        | K::Length
        | K::MinLength
        | K::MaxLength
        | K::WhiteSpace => &FACET,
        K::Enumeration | K::Pattern => &FACET_NO_FIXED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: &[ElementKind] = &[
        K::Schema,
        K::Annotation,
        K::AppInfo,
        K::Documentation,
        K::Import,
        K::Include,
        K::Notation,
        K::AttributeTopLevel,
        K::AttributeLocal,
        K::AttributeRef,
        K::AttributeGroupDef,
        K::AttributeGroupRef,
        K::SimpleType,
        K::ComplexType,
        K::RestrictionSimpleType,
        K::RestrictionSimpleContent,
        K::RestrictionComplexContent,
        K::Extension,
        K::SimpleContent,
        K::ComplexContent,
        K::List,
        K::Union,
        K::GroupDef,
        K::GroupRef,
        K::All,
        K::ChoiceExplicit,
        K::ChoiceSimple,
        K::SequenceExplicit,
        K::SequenceSimple,
        K::ElementTopLevel,
        K::ElementLocal,
        K::ElementNarrow,
        K::Any,
        K::AnyAttribute,
        K::Unique,
        K::Key,
        K::Keyref,
        K::Selector,
        K::Field,
        K::MinExclusive,
        K::MinInclusive,
        K::MaxExclusive,
        K::MaxInclusive,
        K::TotalDigits,
        K::FractionDigits,
        K::Length,
        K::MinLength,
        K::MaxLength,
        K::Enumeration,
        K::WhiteSpace,
        K::Pattern,
    ];

    #[test]
    fn test_every_variant_has_a_production() {
        for &kind in ALL_KINDS {
            let prod = production(kind);
            // attribute tags must be unique per production
            for (i, a) in prod.attributes.iter().enumerate() {
                for b in &prod.attributes[i + 1..] {
                    assert_ne!(a.tag, b.tag, "duplicate attribute on {:?}", kind);
                }
            }
            // child tags must be unique per production
            for (i, a) in prod.children.iter().enumerate() {
                for b in &prod.children[i + 1..] {
                    assert_ne!(a.tag, b.tag, "duplicate child tag on {:?}", kind);
                }
            }
        }
    }

    #[test]
    fn test_element_variant_depends_on_context() {
        let in_schema = SCHEMA
            .children
            .iter()
            .find(|c| c.tag == T::Element)
            .unwrap();
        let in_sequence = EXPLICIT_GROUP
            .children
            .iter()
            .find(|c| c.tag == T::Element)
            .unwrap();
        let in_all = ALL.children.iter().find(|c| c.tag == T::Element).unwrap();
        assert_eq!(in_schema.kind, K::ElementTopLevel);
        assert_eq!(in_sequence.kind, K::ElementLocal);
        assert_eq!(in_all.kind, K::ElementNarrow);
    }

    #[test]
    fn test_occurs_entries_not_shared_between_local_and_narrow() {
        let local_min = ELEMENT_LOCAL
            .attributes
            .iter()
            .find(|a| a.tag == A::MinOccurs)
            .unwrap();
        let narrow_min = ELEMENT_NARROW
            .attributes
            .iter()
            .find(|a| a.tag == A::MinOccurs)
            .unwrap();
        assert_eq!(local_min.ty, D::NonNegativeInteger);
        assert_eq!(narrow_min.ty, D::NarrowMin);
    }

    #[test]
    fn test_top_level_element_has_no_occurs() {
        assert!(!ELEMENT_TOP_LEVEL
            .attributes
            .iter()
            .any(|a| a.tag == A::MinOccurs || a.tag == A::MaxOccurs));
        assert!(ELEMENT_TOP_LEVEL
            .attributes
            .iter()
            .any(|a| a.tag == A::SubstitutionGroup));
        assert!(!ELEMENT_LOCAL
            .attributes
            .iter()
            .any(|a| a.tag == A::SubstitutionGroup));
    }

    #[test]
    fn test_ref_retags_local_attribute_only() {
        for &kind in ALL_KINDS {
            for rule in production(kind).attributes {
                if let Some(retagged) = rule.retag {
                    assert_eq!(kind, K::AttributeLocal);
                    assert_eq!(rule.tag, A::Ref);
                    assert_eq!(retagged, K::AttributeRef);
                }
            }
        }
    }

    #[test]
    fn test_simple_groups_have_no_occurs() {
        assert!(!SIMPLE_EXPLICIT_GROUP
            .attributes
            .iter()
            .any(|a| a.tag == A::MinOccurs || a.tag == A::MaxOccurs));
    }
}

//! Datatype and QName resolution conformance, exercised through the
//! builder surface so that validation, storage and error propagation are
//! covered together. The error message texts are part of the observable
//! contract and are matched verbatim.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use xsdom::datatypes::{
    validate_non_negative_integer, validate_token, DerivationControl,
};
use xsdom::model::AttributeTag;
use xsdom::names::{collapse, is_valid_ncname};
use xsdom::{Error, SchemaBuilder};

#[test]
fn boolean_literals_through_builder() {
    for (raw, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
        let mut builder = SchemaBuilder::new();
        builder.build_element_element();
        builder.build_nillable_attribute(raw).unwrap();
        assert_eq!(
            builder
                .current_node()
                .attribute(AttributeTag::Nillable)
                .and_then(|v| v.as_bool()),
            Some(expected),
            "literal {:?}",
            raw
        );
    }
}

#[test]
fn boolean_rejects_yes() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    let err = builder.build_nillable_attribute("yes").unwrap_err();
    assert_eq!(err.to_string(), "\"yes\" is an invalid boolean datatype.");
}

#[test]
fn ncname_rejects_colonized_name() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    let err = builder.build_name_attribute("xs:element").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"xs:element\" is an invalid NCName datatype."
    );
}

#[test]
fn ncname_collapses_surrounding_whitespace() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    builder.build_name_attribute("  person \n").unwrap();
    assert_eq!(
        builder
            .current_node()
            .attribute(AttributeTag::Name)
            .and_then(|v| v.as_str()),
        Some("person")
    );
}

#[test]
fn id_uses_its_own_datatype_name() {
    let mut builder = SchemaBuilder::new();
    let err = builder.build_id_attribute("1st").unwrap_err();
    assert_eq!(err.to_string(), "\"1st\" is an invalid ID datatype.");
}

#[test]
fn language_tag_validation() {
    let mut builder = SchemaBuilder::new();
    builder.build_annotation_element();
    builder.build_documentation_element();
    builder.build_lang_attribute("en-US").unwrap();
    assert_eq!(
        builder
            .current_node()
            .attribute(AttributeTag::Lang)
            .and_then(|v| v.as_str()),
        Some("en-US")
    );

    let mut builder = SchemaBuilder::new();
    builder.build_annotation_element();
    builder.build_documentation_element();
    let err = builder.build_lang_attribute("en_US").unwrap_err();
    assert_eq!(err.to_string(), "\"en_US\" is an invalid language datatype.");
}

#[test]
fn any_uri_accepts_relative_references() {
    let mut builder = SchemaBuilder::new();
    builder.build_include_element();
    builder
        .build_schema_location_attribute("../common/types.xsd")
        .unwrap();
    assert_eq!(
        builder
            .current_node()
            .attribute(AttributeTag::SchemaLocation)
            .and_then(|v| v.as_str()),
        Some("../common/types.xsd")
    );
}

#[test]
fn any_uri_rejects_illegal_characters() {
    let mut builder = SchemaBuilder::new();
    let err = builder
        .build_target_namespace_attribute("http://exa mple.com/a<b")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"http://exa mple.com/a<b\" is an invalid anyURI datatype."
    );
}

#[test]
fn occurs_limit_accepts_unbounded_and_huge_integers() {
    let huge = "123456789012345678901234567890";
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_sequence_element();
    builder.build_max_occurs_attribute(huge).unwrap();
    let limit = builder
        .current_node()
        .attribute(AttributeTag::MaxOccurs)
        .and_then(|v| v.as_limit())
        .unwrap();
    assert!(!limit.is_unbounded());
    assert_eq!(limit.to_string(), huge);
}

#[test]
fn occurs_limit_rejects_negative() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_sequence_element();
    let err = builder.build_max_occurs_attribute("-1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"-1\" is an invalid nonNegativeIntegerLimit datatype."
    );
}

#[test]
fn min_occurs_canonicalizes() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_sequence_element();
    builder.build_min_occurs_attribute("+007").unwrap();
    assert_eq!(
        builder
            .current_node()
            .attribute(AttributeTag::MinOccurs)
            .and_then(|v| v.as_non_negative_integer())
            .unwrap()
            .as_str(),
        "7"
    );
}

#[test]
fn form_choice_enumerated_message() {
    let mut builder = SchemaBuilder::new();
    let err = builder
        .build_element_form_default_attribute("sometimes")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"sometimes\" is an invalid formChoice datatype. \
         Accepted values are: qualified, unqualified."
    );
}

#[test]
fn use_type_enumerated_message() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_attribute_element();
    let err = builder.build_use_attribute("mandatory").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"mandatory\" is an invalid useType datatype. \
         Accepted values are: optional, prohibited, required."
    );
}

#[test]
fn processing_mode_enumerated_message() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_sequence_element();
    builder.build_any_element();
    let err = builder.build_process_contents_attribute("loose").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"loose\" is an invalid processingMode datatype. \
         Accepted values are: lax, skip, strict."
    );
}

#[test]
fn block_set_parses_subset_and_all() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    builder
        .build_block_attribute("extension substitution")
        .unwrap();
    let set = builder
        .current_node()
        .attribute(AttributeTag::Block)
        .and_then(|v| v.as_control_set())
        .unwrap();
    assert!(!set.all);
    assert!(set.contains(DerivationControl::Extension));
    assert!(set.contains(DerivationControl::Substitution));
    assert!(!set.contains(DerivationControl::Restriction));
}

#[test]
fn block_set_rejects_list_token() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    let err = builder.build_block_attribute("list").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"list\" is an invalid blockSet datatype. \
         Accepted values are: #all, extension, restriction, substitution."
    );
}

#[test]
fn simple_type_final_is_derivation_set() {
    let mut builder = SchemaBuilder::new();
    builder.build_simple_type_element();
    let err = builder.build_final_attribute("substitution").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"substitution\" is an invalid derivationSet datatype. \
         Accepted values are: #all, extension, restriction."
    );
    builder.build_final_attribute("restriction").unwrap();
}

#[test]
fn schema_final_default_admits_list_and_union() {
    let mut builder = SchemaBuilder::new();
    builder.build_final_default_attribute("list union").unwrap();
    let set = builder
        .schema()
        .attribute(AttributeTag::FinalDefault)
        .and_then(|v| v.as_control_set())
        .unwrap();
    assert!(set.contains(DerivationControl::List));
    assert!(set.contains(DerivationControl::Union));
    assert!(!set.contains(DerivationControl::Substitution));
}

#[test]
fn namespace_list_mixed_tokens() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_any_attribute_element();
    builder
        .build_namespace_attribute("##targetNamespace http://example.com/a ##local")
        .unwrap();
    let constraint = builder
        .current_node()
        .attribute(AttributeTag::Namespace)
        .and_then(|v| v.as_namespace_constraint())
        .unwrap();
    assert!(constraint.target_namespace);
    assert!(constraint.local);
    assert!(!constraint.any);
    assert_eq!(
        constraint.namespaces,
        vec!["http://example.com/a".to_string()]
    );
}

#[test]
fn namespace_list_rejects_unknown_pseudo_token() {
    let mut builder = SchemaBuilder::new();
    builder.build_complex_type_element();
    builder.build_any_attribute_element();
    let err = builder.build_namespace_attribute("##self").unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"##self\" is an invalid namespaceList datatype."
    );
}

#[test]
fn qname_resolves_against_closest_declaration() {
    let mut builder = SchemaBuilder::new();
    builder.bind_namespace("t", "http://outer.example");
    builder.build_complex_type_element();
    builder.bind_namespace("t", "http://inner.example");
    builder.build_sequence_element();
    builder.build_element_element();
    builder.build_type_attribute("t:row").unwrap();

    let qname = builder
        .current_node()
        .attribute(AttributeTag::Type)
        .and_then(|v| v.as_qname())
        .unwrap();
    assert_eq!(qname.namespace.as_deref(), Some("http://inner.example"));
}

#[test]
fn unprefixed_qname_takes_default_namespace() {
    let mut builder = SchemaBuilder::new();
    builder.bind_namespace("", "http://default.example");
    builder.build_element_element();
    builder.build_type_attribute("row").unwrap();
    let qname = builder
        .current_node()
        .attribute(AttributeTag::Type)
        .and_then(|v| v.as_qname())
        .unwrap();
    assert_eq!(qname.namespace.as_deref(), Some("http://default.example"));

    // with no default declaration the namespace is absent
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    builder.build_type_attribute("row").unwrap();
    assert!(builder
        .current_node()
        .attribute(AttributeTag::Type)
        .and_then(|v| v.as_qname())
        .unwrap()
        .namespace
        .is_none());
}

#[test]
fn unbound_prefix_is_a_resolution_error() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    let err = builder.build_type_attribute("p:row").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The \"p\" prefix is not bound to a namespace."
    );
    assert!(err.is_resolution());
    assert!(!err.is_datatype());
    assert_eq!(
        err,
        Error::UnboundPrefix {
            prefix: "p".to_string()
        }
    );
    assert!(builder
        .current_node()
        .attribute(AttributeTag::Type)
        .is_none());
}

#[test]
fn xml_prefix_is_implicitly_bound() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    builder.build_type_attribute("xml:lang").unwrap();
    let qname = builder
        .current_node()
        .attribute(AttributeTag::Type)
        .and_then(|v| v.as_qname())
        .unwrap();
    assert_eq!(qname.namespace.as_deref(), Some(xsdom::XML_NAMESPACE));
}

#[test]
fn lexically_broken_qname_is_a_datatype_error() {
    let mut builder = SchemaBuilder::new();
    builder.build_element_element();
    let err = builder.build_type_attribute("a:b:c").unwrap_err();
    assert_eq!(err.to_string(), "\"a:b:c\" is an invalid QName datatype.");
    assert!(err.is_datatype());
}

#[test]
fn qname_list_fails_on_first_bad_member() {
    let mut builder = SchemaBuilder::new();
    builder.bind_namespace("xs", xsdom::XSD_NAMESPACE);
    builder.build_simple_type_element();
    builder.build_union_element();
    let err = builder
        .build_member_types_attribute("xs:int p:missing")
        .unwrap_err();
    assert!(err.is_resolution());
    assert!(builder
        .current_node()
        .attribute(AttributeTag::MemberTypes)
        .is_none());
}

proptest! {
    #[test]
    fn token_collapse_is_idempotent(raw in ".{0,64}") {
        let once = validate_token(&raw).unwrap();
        let twice = validate_token(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn collapsed_values_never_carry_edge_whitespace(raw in "\\PC{0,64}") {
        let collapsed = collapse(&raw);
        prop_assert_eq!(collapsed.trim(), collapsed.as_str());
        prop_assert!(!collapsed.contains("  "));
    }

    #[test]
    fn non_negative_integer_canonical_form_round_trips(n in 0u64..u64::MAX) {
        let padded = format!("+000{}", n);
        let parsed = validate_non_negative_integer(&padded).unwrap();
        prop_assert_eq!(parsed.as_str(), n.to_string());
        prop_assert_eq!(parsed.to_u64(), Some(n));
        // canonical form re-validates to itself
        let again = validate_non_negative_integer(parsed.as_str()).unwrap();
        prop_assert_eq!(again, parsed);
    }

    #[test]
    fn ascii_identifiers_are_ncnames(name in "[A-Za-z_][A-Za-z0-9_\\-\\.]{0,16}") {
        prop_assert!(is_valid_ncname(&name));
    }

    #[test]
    fn names_with_colons_or_spaces_are_not_ncnames(
        left in "[a-z]{1,8}",
        sep in prop::sample::select(vec![":", " ", "\t"]),
        right in "[a-z]{1,8}",
    ) {
        let name = format!("{}{}{}", left, sep, right);
        prop_assert!(!is_valid_ncname(&name));
    }
}

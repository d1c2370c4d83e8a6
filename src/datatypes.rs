//! XSD datatype validators
//!
//! Pure, side-effect-free validators for the lexical forms the schema
//! grammar admits in attribute values. Each validator parses a raw string
//! into its typed representation or fails with a [`DatatypeError`] carrying
//! the fixed message contract: `"<value>" is an invalid <datatype>
//! datatype.`, with enumerated datatypes additionally naming the accepted
//! literal set.
//!
//! QName resolution is not handled here: it needs the ancestor namespace
//! scope and lives in [`crate::namespaces`].

use crate::error::DatatypeError;
use crate::names::{collapse, is_valid_ncname};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

type Result<T> = std::result::Result<T, DatatypeError>;

lazy_static::lazy_static! {
    /// XSD boolean literal mapping
    static ref BOOLEAN_MAP: HashMap<&'static str, bool> = {
        let mut m = HashMap::new();
        m.insert("false", false);
        m.insert("0", false);
        m.insert("true", true);
        m.insert("1", true);
        m
    };
}

// xs:language: primary subtag plus optional subtags
static LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").unwrap());

// =============================================================================
// Typed value representations
// =============================================================================

/// Arbitrary-precision non-negative integer, stored as a canonical digit
/// string (no sign, no leading zeros).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonNegativeInteger {
    canonical: String,
}

impl NonNegativeInteger {
    /// The canonical lexical form
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// True for zero
    pub fn is_zero(&self) -> bool {
        self.canonical == "0"
    }

    /// The value as a `u64`, when it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.canonical.parse().ok()
    }
}

impl fmt::Display for NonNegativeInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// A maxOccurs-style bound: a non-negative integer or `unbounded`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OccursLimit {
    /// An explicit bound
    Bounded(NonNegativeInteger),
    /// The literal `unbounded`
    Unbounded,
}

impl OccursLimit {
    /// True for the `unbounded` literal
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for OccursLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => write!(f, "{}", n),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// The `formChoice` enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormChoice {
    /// `qualified`
    Qualified,
    /// `unqualified`
    Unqualified,
}

/// The attribute `use` enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UseType {
    /// `optional`
    Optional,
    /// `prohibited`
    Prohibited,
    /// `required`
    Required,
}

/// Wildcard `processContents` enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessingMode {
    /// Validate if a declaration is found, otherwise accept
    Lax,
    /// Skip validation entirely
    Skip,
    /// Declarations are required
    Strict,
}

/// A single derivation-control token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DerivationControl {
    /// `extension`
    Extension,
    /// `restriction`
    Restriction,
    /// `substitution`
    Substitution,
    /// `list`
    List,
    /// `union`
    Union,
}

impl DerivationControl {
    fn token(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Restriction => "restriction",
            Self::Substitution => "substitution",
            Self::List => "list",
            Self::Union => "union",
        }
    }
}

/// A parsed block/final control set: `#all` or a deduplicated subset of the
/// tokens the particular datatype admits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivationControlSet {
    /// True when the value was the `#all` literal
    pub all: bool,
    /// The member tokens, in lexical order of appearance
    pub members: Vec<DerivationControl>,
}

impl DerivationControlSet {
    /// True when the set names a control, or was `#all`
    pub fn contains(&self, control: DerivationControl) -> bool {
        self.all || self.members.contains(&control)
    }
}

/// A parsed wildcard namespace constraint.
///
/// `##any` and `##other` are exclusive whole-value literals; otherwise the
/// value is a whitespace-separated list of URIs and/or the
/// `##targetNamespace` / `##local` tokens, reflected in the boolean flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceConstraint {
    /// The value was `##any`
    pub any: bool,
    /// The value was `##other`
    pub other: bool,
    /// The list contained `##targetNamespace`
    pub target_namespace: bool,
    /// The list contained `##local`
    pub local: bool,
    /// The explicit namespace URIs, in order of appearance
    pub namespaces: Vec<String>,
}

// =============================================================================
// Validators
// =============================================================================

/// Validate `string`: any value, passed through unchanged
pub fn validate_string(value: &str) -> Result<String> {
    Ok(value.to_string())
}

/// Validate `boolean`: one of `true`, `false`, `1`, `0`
pub fn validate_boolean(value: &str) -> Result<bool> {
    BOOLEAN_MAP
        .get(collapse(value).as_str())
        .copied()
        .ok_or_else(|| DatatypeError::invalid(value, "boolean"))
}

/// Validate `NCName`: collapse, then XML Name minus colon
pub fn validate_ncname(value: &str) -> Result<String> {
    let collapsed = collapse(value);
    if is_valid_ncname(&collapsed) {
        Ok(collapsed)
    } else {
        Err(DatatypeError::invalid(value, "NCName"))
    }
}

/// Validate `ID`: lexically an NCName
pub fn validate_id(value: &str) -> Result<String> {
    let collapsed = collapse(value);
    if is_valid_ncname(&collapsed) {
        Ok(collapsed)
    } else {
        Err(DatatypeError::invalid(value, "ID"))
    }
}

/// Validate `token`: collapsed form, which any string has
pub fn validate_token(value: &str) -> Result<String> {
    Ok(collapse(value))
}

/// Validate `language`: primary subtag plus optional subtags
pub fn validate_language(value: &str) -> Result<String> {
    let collapsed = collapse(value);
    if LANGUAGE.is_match(&collapsed) {
        Ok(collapsed)
    } else {
        Err(DatatypeError::invalid(value, "language"))
    }
}

/// Validate `anyURI`.
///
/// Absolute URIs must parse; relative references are admitted after a
/// character-level check, since `anyURI` covers URI references.
pub fn validate_any_uri(value: &str) -> Result<String> {
    let collapsed = collapse(value);
    if collapsed.is_empty() {
        return Ok(collapsed);
    }
    match url::Url::parse(&collapsed) {
        Ok(_) => Ok(collapsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let ok = !collapsed
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`'));
            if ok {
                Ok(collapsed)
            } else {
                Err(DatatypeError::invalid(value, "anyURI"))
            }
        }
        Err(_) => Err(DatatypeError::invalid(value, "anyURI")),
    }
}

/// Validate arbitrary-precision `nonNegativeInteger`
///
/// An optional leading `+` and leading zeros are accepted; the canonical
/// form strips both.
pub fn validate_non_negative_integer(value: &str) -> Result<NonNegativeInteger> {
    let collapsed = collapse(value);
    let digits = collapsed.strip_prefix('+').unwrap_or(&collapsed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DatatypeError::invalid(value, "nonNegativeInteger"));
    }
    let canonical = digits.trim_start_matches('0');
    let canonical = if canonical.is_empty() { "0" } else { canonical };
    Ok(NonNegativeInteger {
        canonical: canonical.to_string(),
    })
}

/// Validate `nonNegativeIntegerLimit`: an integer or the literal `unbounded`
pub fn validate_occurs_limit(value: &str) -> Result<OccursLimit> {
    let collapsed = collapse(value);
    if collapsed == "unbounded" {
        return Ok(OccursLimit::Unbounded);
    }
    validate_non_negative_integer(&collapsed)
        .map(OccursLimit::Bounded)
        .map_err(|_| DatatypeError::invalid(value, "nonNegativeIntegerLimit"))
}

/// Validate an occurrence bound narrowed to {0, 1}
pub fn validate_narrow_min(value: &str) -> Result<NonNegativeInteger> {
    match collapse(value).as_str() {
        "0" | "1" => validate_non_negative_integer(value),
        _ => Err(DatatypeError::not_accepted(value, "nonNegativeInteger", "0, 1")),
    }
}

/// Validate a maxOccurs bound narrowed to {0, 1}
pub fn validate_narrow_max(value: &str) -> Result<OccursLimit> {
    validate_narrow_min(value).map(OccursLimit::Bounded)
}

/// Validate a maxOccurs bound that must be exactly 1 (the `all` group)
pub fn validate_max_one(value: &str) -> Result<OccursLimit> {
    match collapse(value).as_str() {
        "1" => Ok(OccursLimit::Bounded(NonNegativeInteger {
            canonical: "1".to_string(),
        })),
        _ => Err(DatatypeError::not_accepted(value, "nonNegativeInteger", "1")),
    }
}

/// Validate `formChoice`: `qualified` or `unqualified`
pub fn validate_form_choice(value: &str) -> Result<FormChoice> {
    match collapse(value).as_str() {
        "qualified" => Ok(FormChoice::Qualified),
        "unqualified" => Ok(FormChoice::Unqualified),
        _ => Err(DatatypeError::not_accepted(
            value,
            "formChoice",
            "qualified, unqualified",
        )),
    }
}

/// Validate `useType`: `optional`, `prohibited` or `required`
pub fn validate_use_type(value: &str) -> Result<UseType> {
    match collapse(value).as_str() {
        "optional" => Ok(UseType::Optional),
        "prohibited" => Ok(UseType::Prohibited),
        "required" => Ok(UseType::Required),
        _ => Err(DatatypeError::not_accepted(
            value,
            "useType",
            "optional, prohibited, required",
        )),
    }
}

/// Validate `processingMode`: `lax`, `skip` or `strict`
pub fn validate_processing_mode(value: &str) -> Result<ProcessingMode> {
    match collapse(value).as_str() {
        "lax" => Ok(ProcessingMode::Lax),
        "skip" => Ok(ProcessingMode::Skip),
        "strict" => Ok(ProcessingMode::Strict),
        _ => Err(DatatypeError::not_accepted(
            value,
            "processingMode",
            "lax, skip, strict",
        )),
    }
}

fn parse_control_set(
    value: &str,
    datatype: &'static str,
    allowed: &[DerivationControl],
    accepted: &'static str,
) -> Result<DerivationControlSet> {
    let collapsed = collapse(value);
    if collapsed == "#all" {
        return Ok(DerivationControlSet {
            all: true,
            members: Vec::new(),
        });
    }
    let mut members = Vec::new();
    for token in collapsed.split_whitespace() {
        let control = allowed
            .iter()
            .copied()
            .find(|c| c.token() == token)
            .ok_or_else(|| DatatypeError::not_accepted(value, datatype, accepted))?;
        if members.contains(&control) {
            return Err(DatatypeError::not_accepted(value, datatype, accepted));
        }
        members.push(control);
    }
    Ok(DerivationControlSet {
        all: false,
        members,
    })
}

/// Validate `blockSet`: `#all` or a subset of
/// {`extension`, `restriction`, `substitution`}
pub fn validate_block_set(value: &str) -> Result<DerivationControlSet> {
    parse_control_set(
        value,
        "blockSet",
        &[
            DerivationControl::Extension,
            DerivationControl::Restriction,
            DerivationControl::Substitution,
        ],
        "#all, extension, restriction, substitution",
    )
}

/// Validate `derivationSet`: `#all` or a subset of
/// {`extension`, `restriction`}
pub fn validate_derivation_set(value: &str) -> Result<DerivationControlSet> {
    parse_control_set(
        value,
        "derivationSet",
        &[DerivationControl::Extension, DerivationControl::Restriction],
        "#all, extension, restriction",
    )
}

/// Validate `fullDerivationSet`: `#all` or a subset of
/// {`extension`, `restriction`, `list`, `union`}
pub fn validate_full_derivation_set(value: &str) -> Result<DerivationControlSet> {
    parse_control_set(
        value,
        "fullDerivationSet",
        &[
            DerivationControl::Extension,
            DerivationControl::Restriction,
            DerivationControl::List,
            DerivationControl::Union,
        ],
        "#all, extension, restriction, list, union",
    )
}

/// Validate `namespaceList`: `##any` | `##other` | a whitespace-separated
/// list of anyURI and/or `##targetNamespace` / `##local`
pub fn validate_namespace_list(value: &str) -> Result<NamespaceConstraint> {
    let collapsed = collapse(value);
    match collapsed.as_str() {
        "##any" => Ok(NamespaceConstraint {
            any: true,
            ..Default::default()
        }),
        "##other" => Ok(NamespaceConstraint {
            other: true,
            ..Default::default()
        }),
        _ => {
            let mut constraint = NamespaceConstraint::default();
            for token in collapsed.split_whitespace() {
                match token {
                    "##targetNamespace" => constraint.target_namespace = true,
                    "##local" => constraint.local = true,
                    t if t.starts_with("##") => {
                        return Err(DatatypeError::invalid(value, "namespaceList"));
                    }
                    uri => {
                        let uri = validate_any_uri(uri)
                            .map_err(|_| DatatypeError::invalid(value, "namespaceList"))?;
                        constraint.namespaces.push(uri);
                    }
                }
            }
            Ok(constraint)
        }
    }
}

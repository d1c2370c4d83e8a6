//! XML name validation and utilities
//!
//! This module provides validation for XML NCNames and QNames according to
//! the XML Namespaces specification, plus the whitespace collapse used by
//! the XSD `collapse` whiteSpace facet.

use once_cell::sync::Lazy;
use regex::Regex;

// Simplified NCName pattern: ASCII plus the Latin-1 letter ranges.
static NCNAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}][A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\-\.0-9\u{B7}]*$")
        .unwrap()
});

/// Collapse whitespace per the XSD `collapse` facet: leading and trailing
/// whitespace is removed and internal runs are replaced by a single space.
pub fn collapse(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a string is a valid NCName (non-colonized name)
pub fn is_valid_ncname(name: &str) -> bool {
    NCNAME.is_match(name)
}

/// Check if a string is a valid QName (qualified name)
///
/// A QName is either `prefix:localName` with both parts NCNames, or a bare
/// NCName.
pub fn is_valid_qname(name: &str) -> bool {
    if let Some((prefix, local)) = name.split_once(':') {
        is_valid_ncname(prefix) && is_valid_ncname(local)
    } else {
        is_valid_ncname(name)
    }
}

/// Split a QName into prefix and local name
pub fn split_qname(qname: &str) -> (Option<&str>, &str) {
    if let Some((prefix, local)) = qname.split_once(':') {
        (Some(prefix), local)
    } else {
        (None, qname)
    }
}

//! XML namespace handling
//!
//! This module provides the [`QName`] value type and prefix resolution
//! against a namespace scope. Scopes are per-node, mirroring XML's
//! `xmlns`/`xmlns:p` scoping: a declaration is visible to the node it is
//! made on and to all of its descendants, with the closest declaration
//! winning. The arena tree supplies the ancestor-chain walk by implementing
//! [`NamespaceScope`].

use crate::error::{DatatypeError, Error, Result};
use crate::names::{collapse, is_valid_ncname, split_qname};
use crate::XML_NAMESPACE;
use serde::Serialize;

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<String>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a new QName
    pub fn new(namespace: Option<impl Into<String>>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(|s| s.into()),
            local_name: local_name.into(),
        }
    }

    /// Create a QName without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    /// Create a QName with a namespace
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => write!(f, "{}", self.local_name),
        }
    }
}

/// A namespace scope: the in-scope declarations at some point of the tree
pub trait NamespaceScope {
    /// Look up a prefix in the scope, closest declaration first
    fn lookup_prefix(&self, prefix: &str) -> Option<&str>;

    /// The in-scope default namespace, if any
    fn default_namespace(&self) -> Option<&str>;
}

/// Resolve a raw QName value against a scope.
///
/// Without a prefix the local part must be a valid NCName and the namespace
/// is the in-scope default declaration (absent if none). With a prefix, both
/// parts must be NCNames and the prefix must be bound in the scope; the
/// `xml` prefix is implicitly bound. An unbound prefix is a structural
/// error, distinct from the lexical datatype errors.
pub fn resolve_qname(value: &str, scope: &impl NamespaceScope) -> Result<QName> {
    let collapsed = collapse(value);
    match split_qname(&collapsed) {
        (None, local) => {
            if !is_valid_ncname(local) {
                return Err(DatatypeError::invalid(value, "QName").into());
            }
            Ok(QName::new(scope.default_namespace(), local))
        }
        (Some(prefix), local) => {
            if !is_valid_ncname(prefix) || !is_valid_ncname(local) {
                return Err(DatatypeError::invalid(value, "QName").into());
            }
            let namespace = match scope.lookup_prefix(prefix) {
                Some(uri) => uri,
                None if prefix == "xml" => XML_NAMESPACE,
                None => {
                    return Err(Error::UnboundPrefix {
                        prefix: prefix.to_string(),
                    })
                }
            };
            Ok(QName::namespaced(namespace, local))
        }
    }
}

/// Resolve a whitespace-separated list of QNames, each independently
pub fn resolve_qname_list(value: &str, scope: &impl NamespaceScope) -> Result<Vec<QName>> {
    value
        .split_whitespace()
        .map(|token| resolve_qname(token, scope))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapScope {
        prefixes: HashMap<String, String>,
        default: Option<String>,
    }

    impl NamespaceScope for MapScope {
        fn lookup_prefix(&self, prefix: &str) -> Option<&str> {
            self.prefixes.get(prefix).map(|s| s.as_str())
        }

        fn default_namespace(&self) -> Option<&str> {
            self.default.as_deref()
        }
    }

    fn scope() -> MapScope {
        let mut prefixes = HashMap::new();
        prefixes.insert(
            "xs".to_string(),
            "http://www.w3.org/2001/XMLSchema".to_string(),
        );
        MapScope {
            prefixes,
            default: Some("http://example.com".to_string()),
        }
    }

    #[test]
    fn test_resolve_unprefixed() {
        let qname = resolve_qname("foo", &scope()).unwrap();
        assert_eq!(qname.namespace.as_deref(), Some("http://example.com"));
        assert_eq!(qname.local_name, "foo");

        let empty = MapScope {
            prefixes: HashMap::new(),
            default: None,
        };
        let qname = resolve_qname("foo", &empty).unwrap();
        assert_eq!(qname, QName::local("foo"));
    }

    #[test]
    fn test_resolve_prefixed() {
        let qname = resolve_qname("xs:element", &scope()).unwrap();
        assert_eq!(
            qname,
            QName::namespaced("http://www.w3.org/2001/XMLSchema", "element")
        );
    }

    #[test]
    fn test_resolve_xml_prefix_builtin() {
        let empty = MapScope {
            prefixes: HashMap::new(),
            default: None,
        };
        let qname = resolve_qname("xml:lang", &empty).unwrap();
        assert_eq!(qname.namespace.as_deref(), Some(XML_NAMESPACE));
    }

    #[test]
    fn test_unbound_prefix() {
        let err = resolve_qname("p:foo", &scope()).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "The \"p\" prefix is not bound to a namespace."
        );
    }

    #[test]
    fn test_invalid_lexical_qname() {
        assert!(resolve_qname("1bad", &scope()).is_err());
        assert!(resolve_qname("xs:1bad", &scope()).is_err());
    }

    #[test]
    fn test_resolve_qname_list() {
        let list = resolve_qname_list(" xs:string  foo ", &scope()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].local_name, "foo");
    }

    #[test]
    fn test_qname_display() {
        assert_eq!(
            QName::namespaced("http://example.com", "element").to_string(),
            "{http://example.com}element"
        );
        assert_eq!(QName::local("element").to_string(), "element");
    }
}

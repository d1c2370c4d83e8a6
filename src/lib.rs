//! # xsdom
//!
//! An in-memory, strongly-typed object model of an XML Schema (XSD) document,
//! built from a sequence of structural construction calls.
//!
//! The crate is driven by an external XML tokenizer/reader that walks raw
//! markup and issues one builder call per start-tag, attribute, and end-tag.
//! The builder enforces the W3C XML Schema grammar as each node is created:
//! the same tag name (`element`, `sequence`, `attribute`) has different legal
//! attributes and different legal parents depending on where it occurs, and
//! the builder resolves that context-sensitivity through a static production
//! table.
//!
//! ## Example
//!
//! ```rust
//! use xsdom::SchemaBuilder;
//!
//! let mut builder = SchemaBuilder::new();
//! builder.build_attribute_group_element();
//! builder.build_any_attribute_element();
//! builder.build_namespace_attribute("##any").unwrap();
//! builder.end_element();
//! builder.end_element();
//!
//! let schema = builder.schema();
//! assert_eq!(schema.children().count(), 1);
//! ```
//!
//! Calls that are illegal in the current grammar context are silent no-ops,
//! so a generic event driver can call builder methods keyed only by tag and
//! attribute name; legality is entirely the builder's responsibility. Only
//! two situations produce errors: a legal attribute whose value fails its
//! datatype validator, and a QName attribute carrying a prefix that is not
//! bound anywhere in the ancestor chain.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;

// Lexical utilities
pub mod names;
pub mod namespaces;

// Datatype validators
pub mod datatypes;

// Node model and grammar table
pub mod model;
pub mod productions;

// Builder core and public dispatch
pub mod builder;

// Debugging/conformance dumps
pub mod dump;

// Re-exports for convenience
pub use builder::SchemaBuilder;
pub use error::{DatatypeError, Error, Result};
pub use model::{AttributeTag, AttributeValue, ElementKind, ElementTag, NodeId, NodeRef, SchemaDom};
pub use namespaces::QName;

/// Version of the xsdom library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD 1.0 namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XMLNS namespace
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

//! Linked-data context resolution
//!
//! This library computes the JSON-LD `@context` information — vocabulary
//! base and term mapping — for arbitrary object graphs, from metadata
//! registered in an [`ldgraph_meta::MetadataRegistry`], so a generic
//! serializer can emit self-describing linked data without per-type
//! serializers.
//!
//! # Example
//!
//! ```
//! use ldgraph_context::{resolve_context, resolve_terms, resolve_vocabulary, TermValue};
//! use ldgraph_meta::{LinkedNode, MetadataRegistry, Site, TermDecl, TypeDescriptor, TypeKey};
//!
//! struct Event;
//!
//! impl LinkedNode for Event {
//!     fn type_key(&self) -> TypeKey {
//!         TypeKey::of::<Event>()
//!     }
//! }
//!
//! let mut registry = MetadataRegistry::new();
//! registry
//!     .register_type(TypeDescriptor::new::<Event>())
//!     .declare_vocab(Site::ty::<Event>(), "http://schema.org/")
//!     .declare_term(Site::ty::<Event>(), TermDecl::new("performers", "performer"));
//!
//! let vocab = resolve_vocabulary(&registry, &Event, None).unwrap();
//! assert_eq!(vocab, "http://schema.org/");
//!
//! let terms = resolve_terms(&registry, &Event, None).unwrap();
//! assert_eq!(
//!     terms.get("performers"),
//!     Some(&TermValue::Iri("performer".to_string()))
//! );
//!
//! let context = resolve_context(&registry, &Event, None).unwrap();
//! assert_eq!(context["@vocab"], "http://schema.org/");
//! ```
//!
//! # Scopes and precedence
//!
//! Metadata is merged from five scopes: the namespace enclosing the
//! runtime type, the type itself, its registered mixin type, the nested
//! context provider reachable through the mixin's designated accessor, and
//! the type's exposed members. See [`ContextResolver`] for the exact
//! ordering of each operation.

pub mod error;
pub mod naming;
pub mod resolver;
pub mod term;

pub use error::{ContextError, Result};
pub use resolver::{ContextResolver, DEFAULT_VOCAB};
pub use term::{TermMap, TermValue};

use ldgraph_meta::{ContextCapabilities, LinkedNode, TypeKey};
use serde_json::Value as JsonValue;

/// Resolve the vocabulary base for `node`.
///
/// Precedence (highest first): mixin-type vocabulary, runtime-type
/// vocabulary (type record before namespace record), nested context
/// provider, then [`DEFAULT_VOCAB`].
pub fn resolve_vocabulary<C>(
    caps: &C,
    node: &dyn LinkedNode,
    mixin: Option<TypeKey>,
) -> Result<String>
where
    C: ContextCapabilities + ?Sized,
{
    ContextResolver::new(caps).resolve_vocabulary(node, mixin)
}

/// Resolve the complete term mapping for `node`.
///
/// Scopes merge in order — namespace, type, mixin, nested provider,
/// exposed fields, readable properties — with later scopes overwriting
/// earlier ones that define the same local name.
pub fn resolve_terms<C>(caps: &C, node: &dyn LinkedNode, mixin: Option<TypeKey>) -> Result<TermMap>
where
    C: ContextCapabilities + ?Sized,
{
    ContextResolver::new(caps).resolve_terms(node, mixin)
}

/// Resolve the full `@context` body for `node`: `@vocab` plus every term,
/// in merge order.
pub fn resolve_context<C>(
    caps: &C,
    node: &dyn LinkedNode,
    mixin: Option<TypeKey>,
) -> Result<JsonValue>
where
    C: ContextCapabilities + ?Sized,
{
    ContextResolver::new(caps).resolve_context(node, mixin)
}

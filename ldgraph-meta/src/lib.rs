//! Declarative linked-data metadata for ldgraph
//!
//! This crate defines where linked-data metadata lives and how the
//! resolution engine reads it:
//!
//! - [`Site`]: a declaration site (namespace, type, member, enum value)
//! - [`SiteMetadata`]: the records attachable to one site (vocabulary,
//!   term, term list, expose)
//! - [`TypeDescriptor`]: the pre-registered introspection table for a type
//! - [`MetadataRegistry`]: in-memory store populated by explicit
//!   registration, implementing every lookup capability
//! - [`LinkedNode`]: read-only access to a live object during resolution
//!
//! # Capabilities
//!
//! The engine in `ldgraph-context` consumes four narrow traits —
//! [`MetadataSource`], [`TypeIntrospector`], [`ProviderLocator`] and
//! [`MixinResolver`] — bundled as [`ContextCapabilities`]. All four are
//! implemented once by [`MetadataRegistry`]; tests are free to implement
//! them directly.
//!
//! # Registration, not scanning
//!
//! Metadata is attached by explicit registration calls at startup rather
//! than by ambient annotation scanning. A registry is read-mostly state:
//! build it once, then share it immutably for the duration of any
//! resolution pass.

mod capability;
mod node;
mod registry;
mod types;

pub use capability::{
    ContextCapabilities, MetadataSource, MixinResolver, ProviderLocator, TypeIntrospector,
};
pub use node::{Accessed, AccessorFault, LinkedNode};
pub use registry::MetadataRegistry;
pub use types::{
    MemberDescriptor, ProviderAccessor, Site, SiteMetadata, TermDecl, TypeDescriptor, TypeKey,
};

//! Lookup capabilities consumed by the resolution engine
//!
//! Four narrow traits, one per question the engine asks, implemented once
//! by [`MetadataRegistry`](crate::MetadataRegistry). Provided methods give
//! the per-kind accessors so implementors only supply the raw lookups.

use crate::types::{
    MemberDescriptor, ProviderAccessor, Site, SiteMetadata, TermDecl, TypeDescriptor, TypeKey,
};

/// Metadata lookup: zero-or-one record of each kind per declaration site.
///
/// Absence at any site is never an error; it simply contributes nothing.
pub trait MetadataSource {
    /// All records attached to `site`, or `None` when the site carries none.
    fn site(&self, site: &Site) -> Option<&SiteMetadata>;

    /// Vocabulary record at `site`.
    fn vocab(&self, site: &Site) -> Option<&str> {
        self.site(site).and_then(|meta| meta.vocab.as_deref())
    }

    /// Single-term record at `site`.
    fn term(&self, site: &Site) -> Option<&TermDecl> {
        self.site(site).and_then(|meta| meta.term.as_ref())
    }

    /// Multi-term record at `site`.
    fn terms(&self, site: &Site) -> Option<&[TermDecl]> {
        self.site(site).and_then(|meta| meta.terms.as_deref())
    }

    /// Expose record at `site`.
    fn expose(&self, site: &Site) -> Option<&str> {
        self.site(site).and_then(|meta| meta.expose.as_deref())
    }
}

/// Type introspection over the pre-registered descriptor table.
pub trait TypeIntrospector {
    /// Descriptor for `ty`, or `None` when the type was never registered.
    fn descriptor(&self, ty: TypeKey) -> Option<&TypeDescriptor>;

    /// Exposed public fields of `ty`; empty for unregistered types.
    fn exposed_fields(&self, ty: TypeKey) -> &[MemberDescriptor] {
        self.descriptor(ty)
            .map(|d| d.fields.as_slice())
            .unwrap_or(&[])
    }

    /// Readable properties of `ty`; empty for unregistered types.
    fn exposed_properties(&self, ty: TypeKey) -> &[MemberDescriptor] {
        self.descriptor(ty)
            .map(|d| d.properties.as_slice())
            .unwrap_or(&[])
    }

    /// Enclosing namespace of `ty`.
    fn namespace_of(&self, ty: TypeKey) -> Option<&str> {
        self.descriptor(ty).and_then(|d| d.namespace.as_deref())
    }
}

/// Locates the designated nested-context-provider accessor of a type.
pub trait ProviderLocator {
    /// The single provider accessor declared on `ty`, if any.
    fn provider_accessor(&self, ty: TypeKey) -> Option<&ProviderAccessor>;
}

/// Maps runtime types to their registered mixin types.
pub trait MixinResolver {
    /// The mixin type bound to `ty`, if one is registered.
    fn mixin_for(&self, ty: TypeKey) -> Option<TypeKey>;
}

/// Everything the resolution engine needs, in one bound.
pub trait ContextCapabilities:
    MetadataSource + TypeIntrospector + ProviderLocator + MixinResolver
{
}

impl<T> ContextCapabilities for T where
    T: MetadataSource + TypeIntrospector + ProviderLocator + MixinResolver + ?Sized
{
}

//! In-memory metadata registry
//!
//! `MetadataRegistry` is the registration-populated implementation of all
//! four lookup capabilities. Build it once at startup, then treat it as
//! immutable for the duration of any resolution pass: every capability
//! method takes `&self`, there is no interior mutability, and the type is
//! `Send + Sync`, so concurrent resolutions over one shared registry need
//! no coordination.

use std::collections::HashMap;

use crate::capability::{MetadataSource, MixinResolver, ProviderLocator, TypeIntrospector};
use crate::types::{ProviderAccessor, Site, SiteMetadata, TermDecl, TypeDescriptor, TypeKey};

/// Registration-populated store of declaration-site metadata, type
/// descriptors, and mixin bindings.
///
/// Registration is idempotent-by-overwrite: re-registering a type or
/// re-declaring a record replaces the previous value.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    /// Declaration-site metadata records.
    sites: HashMap<Site, SiteMetadata>,
    /// Pre-registered introspection tables, keyed by type identity.
    descriptors: HashMap<TypeKey, TypeDescriptor>,
    /// Runtime type -> mixin type bindings.
    mixins: HashMap<TypeKey, TypeKey>,
}

impl MetadataRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the introspection table for a type.
    pub fn register_type(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        self.descriptors.insert(descriptor.key, descriptor);
        self
    }

    /// Bind the mixin type `M` to the runtime type `T`.
    pub fn register_mixin<T: 'static, M: 'static>(&mut self) -> &mut Self {
        self.register_mixin_keys(TypeKey::of::<T>(), TypeKey::of::<M>())
    }

    /// Key-level variant of [`register_mixin`](Self::register_mixin) for
    /// call sites that already hold keys.
    pub fn register_mixin_keys(&mut self, ty: TypeKey, mixin: TypeKey) -> &mut Self {
        self.mixins.insert(ty, mixin);
        self
    }

    /// Attach a vocabulary record to `site`.
    pub fn declare_vocab(&mut self, site: Site, vocab: impl Into<String>) -> &mut Self {
        self.sites.entry(site).or_default().vocab = Some(vocab.into());
        self
    }

    /// Attach a single-term record to `site`.
    pub fn declare_term(&mut self, site: Site, term: TermDecl) -> &mut Self {
        self.sites.entry(site).or_default().term = Some(term);
        self
    }

    /// Attach a multi-term record to `site`.
    pub fn declare_terms(&mut self, site: Site, terms: Vec<TermDecl>) -> &mut Self {
        self.sites.entry(site).or_default().terms = Some(terms);
        self
    }

    /// Attach an expose record to `site`.
    pub fn declare_expose(&mut self, site: Site, identifier: impl Into<String>) -> &mut Self {
        self.sites.entry(site).or_default().expose = Some(identifier.into());
        self
    }
}

impl MetadataSource for MetadataRegistry {
    fn site(&self, site: &Site) -> Option<&SiteMetadata> {
        self.sites.get(site)
    }
}

impl TypeIntrospector for MetadataRegistry {
    fn descriptor(&self, ty: TypeKey) -> Option<&TypeDescriptor> {
        self.descriptors.get(&ty)
    }
}

impl ProviderLocator for MetadataRegistry {
    fn provider_accessor(&self, ty: TypeKey) -> Option<&ProviderAccessor> {
        self.descriptors.get(&ty).and_then(|d| d.provider.as_ref())
    }
}

impl MixinResolver for MetadataRegistry {
    fn mixin_for(&self, ty: TypeKey) -> Option<TypeKey> {
        self.mixins.get(&ty).copied()
    }
}

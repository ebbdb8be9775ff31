//! Core metadata types
//!
//! This module defines the fundamental types of the metadata model:
//! - `TypeKey`: identity of a value type in the metadata table
//! - `Site`: a declaration site metadata records attach to
//! - `SiteMetadata`: the records attached to one site
//! - `TermDecl`: a single term rename mapping
//! - `TypeDescriptor` / `MemberDescriptor` / `ProviderAccessor`: the
//!   pre-registered introspection table for a type

use std::any::TypeId;
use std::fmt;

/// Identity of a value type in the metadata table.
///
/// Wraps [`TypeId`] for keying and carries the full type name for
/// diagnostics. `Copy`, so keys move freely through lookups and merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Key for the type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Full type name, e.g. `my_app::orders::Order`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, for compact diagnostics.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A declaration site: the locus a metadata record is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Site {
    /// A dotted namespace identifier, e.g. `store.orders`. The scope
    /// enclosing a type.
    Namespace(String),
    /// A primary or mixin type.
    Type(TypeKey),
    /// A public field or readable property of a type.
    Member { ty: TypeKey, name: String },
    /// One value of a closed enumerated type.
    EnumValue { ty: TypeKey, variant: String },
}

impl Site {
    /// Namespace site for the identifier `ns`.
    pub fn namespace(ns: impl Into<String>) -> Self {
        Site::Namespace(ns.into())
    }

    /// Type site for `T`.
    pub fn ty<T: 'static>() -> Self {
        Site::Type(TypeKey::of::<T>())
    }

    /// Member site for the field or property `name` of `T`.
    pub fn member<T: 'static>(name: impl Into<String>) -> Self {
        Site::Member {
            ty: TypeKey::of::<T>(),
            name: name.into(),
        }
    }

    /// Enum-value site for the variant `variant` of the closed enum `T`.
    pub fn enum_value<T: 'static>(variant: impl Into<String>) -> Self {
        Site::EnumValue {
            ty: TypeKey::of::<T>(),
            variant: variant.into(),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Namespace(ns) => write!(f, "namespace '{}'", ns),
            Site::Type(ty) => write!(f, "type '{}'", ty.name()),
            Site::Member { ty, name } => write!(f, "member '{}::{}'", ty.short_name(), name),
            Site::EnumValue { ty, variant } => {
                write!(f, "enum value '{}::{}'", ty.short_name(), variant)
            }
        }
    }
}

/// A single term rename mapping (`define` expands to `maps_to`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermDecl {
    /// Local name being defined.
    pub define: String,
    /// Identifier the local name expands to: a full or relative IRI, or
    /// another term.
    pub maps_to: String,
    /// Marks the property as semantically inverse (`@reverse`).
    pub reverse: bool,
}

impl TermDecl {
    /// A plain rename mapping.
    pub fn new(define: impl Into<String>, maps_to: impl Into<String>) -> Self {
        Self {
            define: define.into(),
            maps_to: maps_to.into(),
            reverse: false,
        }
    }

    /// A rename mapping marked as reverse.
    pub fn reverse(define: impl Into<String>, maps_to: impl Into<String>) -> Self {
        Self {
            define: define.into(),
            maps_to: maps_to.into(),
            reverse: true,
        }
    }
}

/// Metadata records attached to one declaration site.
///
/// `term` and `terms` are mutually exclusive at one site; the conflict is
/// reported at resolution time so a misconfigured site fails every call
/// that touches it, deterministically.
#[derive(Debug, Clone, Default)]
pub struct SiteMetadata {
    /// Vocabulary base IRI for this scope.
    pub vocab: Option<String>,
    /// Single term rename.
    pub term: Option<TermDecl>,
    /// Multi-term rename list.
    pub terms: Option<Vec<TermDecl>>,
    /// Exposed identifier for a member or enum value.
    pub expose: Option<String>,
}

/// One exposed member (public field or readable property) of a type.
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    /// Local member name.
    pub name: String,
    /// Value type when the member draws its values from a closed enum.
    /// Drives enumeration-block emission and per-value expose lookups.
    pub enum_type: Option<TypeKey>,
}

impl MemberDescriptor {
    /// A member with a non-enumerated value type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_type: None,
        }
    }

    /// A member drawing its values from the closed enum `E`.
    pub fn enumerated<E: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enum_type: Some(TypeKey::of::<E>()),
        }
    }
}

/// The designated nested-context-provider accessor of a mixin type.
#[derive(Debug, Clone)]
pub struct ProviderAccessor {
    /// Accessor name. Invoked on the runtime type of the instance, not on
    /// the mixin type that declares it.
    pub name: String,
    /// Declared parameter count. Anything above zero is rejected before
    /// invocation.
    pub arity: usize,
}

impl ProviderAccessor {
    /// A no-argument accessor named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: 0,
        }
    }

    /// An accessor with an explicit declared arity.
    pub fn with_arity(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

/// Pre-registered introspection table for one type.
///
/// Descriptors are the registration-time rendition of runtime reflection:
/// the registry hands them to the engine keyed by [`TypeKey`], read-only
/// during resolution.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Identity of the described type.
    pub key: TypeKey,
    /// Enclosing namespace, the scope above the type.
    pub namespace: Option<String>,
    /// Exposed public fields, in declaration order.
    pub fields: Vec<MemberDescriptor>,
    /// Readable properties, in declaration order.
    pub properties: Vec<MemberDescriptor>,
    /// At most one designated context-provider accessor (mixin types only).
    pub provider: Option<ProviderAccessor>,
}

impl TypeDescriptor {
    /// An empty descriptor for `T`.
    pub fn new<T: 'static>() -> Self {
        Self::for_key(TypeKey::of::<T>())
    }

    /// An empty descriptor for an already-obtained key.
    pub fn for_key(key: TypeKey) -> Self {
        Self {
            key,
            namespace: None,
            fields: Vec::new(),
            properties: Vec::new(),
            provider: None,
        }
    }

    /// Set the enclosing namespace.
    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    /// Append an exposed public field.
    pub fn with_field(mut self, member: MemberDescriptor) -> Self {
        self.fields.push(member);
        self
    }

    /// Append a readable property.
    pub fn with_property(mut self, member: MemberDescriptor) -> Self {
        self.properties.push(member);
        self
    }

    /// Designate the context-provider accessor.
    pub fn with_provider(mut self, accessor: ProviderAccessor) -> Self {
        self.provider = Some(accessor);
        self
    }
}

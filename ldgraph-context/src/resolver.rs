//! Context resolution engine
//!
//! Resolves the vocabulary base and term mapping for a live object by
//! merging declarative metadata across scopes — namespace, type, mixin,
//! member, enumerated value — under a fixed precedence order, and by
//! following nested-context-provider edges discovered on the object graph
//! at resolution time.
//!
//! # Scope precedence
//!
//! Vocabulary is a single-winner selection: mixin type, then the runtime
//! type (its own record before its namespace's), then the nested context
//! provider, then the schema.org fallback. Terms are an ordered merge in
//! the opposite sense: namespace, type, mixin, nested provider, then
//! exposed fields and properties, later scopes overwriting earlier ones on
//! a shared local name.
//!
//! # Nested context providers
//!
//! A mixin type may designate a no-argument accessor; the same-named
//! accessor is invoked on the runtime object and the yielded value (the
//! first element for collections and mappings) contributes its own
//! vocabulary and terms. Chains are followed through each value's
//! registered mixin; a visited-instance set turns cyclic graphs into a
//! [`ContextError::CyclicProvider`] failure instead of unbounded
//! recursion.

use ldgraph_meta::{
    ContextCapabilities, LinkedNode, MemberDescriptor, Site, TermDecl, TypeKey,
};
use ldgraph_vocab::{keywords, ns};
use serde_json::{Map, Value as JsonValue};

use crate::error::{ContextError, Result};
use crate::naming;
use crate::term::{TermMap, TermValue};

/// Default vocabulary when no scope declares one.
pub const DEFAULT_VOCAB: &str = ns::SCHEMA_ORG;

/// Instance identity within one resolution call. Data-pointer based, so
/// linear provider chains through repeated types still resolve while true
/// revisits fail fast.
type NodeId = *const ();

fn node_id(node: &dyn LinkedNode) -> NodeId {
    node as *const dyn LinkedNode as *const ()
}

/// Stateless resolution engine over a set of lookup capabilities.
///
/// Holds only a shared reference to the capabilities, which must not be
/// mutated during a resolution pass. Every operation is a pure function of
/// the capabilities and the object graph, so one resolver (or many) may be
/// used concurrently for different instances without coordination.
pub struct ContextResolver<'c, C: ?Sized> {
    caps: &'c C,
}

impl<'c, C: ContextCapabilities + ?Sized> ContextResolver<'c, C> {
    /// A resolver reading from `caps`.
    pub fn new(caps: &'c C) -> Self {
        Self { caps }
    }

    /// Vocabulary base for `node`.
    ///
    /// Single-winner precedence: the mixin type's vocabulary record, then
    /// the runtime type's (preferring the type's own record over its
    /// namespace's), then the nested context provider's resolved
    /// vocabulary, then [`DEFAULT_VOCAB`]. Lower sources are never merged
    /// in. Absence at every level is not an error.
    pub fn resolve_vocabulary(
        &self,
        node: &dyn LinkedNode,
        mixin: Option<TypeKey>,
    ) -> Result<String> {
        let mut visited = vec![node_id(node)];
        self.vocabulary(node, mixin, &mut visited)
    }

    /// Term mapping for `node`.
    ///
    /// Ordered merge: namespace and type declarations, mixin declarations,
    /// the nested context provider's resolved terms, then exposed fields
    /// and readable properties. Later scopes overwrite earlier ones that
    /// share a local name; nothing is ever removed once added.
    pub fn resolve_terms(&self, node: &dyn LinkedNode, mixin: Option<TypeKey>) -> Result<TermMap> {
        let mut visited = vec![node_id(node)];
        self.terms(node, mixin, &mut visited)
    }

    /// Full `@context` body for `node`: `@vocab` bound to the resolved
    /// vocabulary, followed by every resolved term in merge order.
    pub fn resolve_context(
        &self,
        node: &dyn LinkedNode,
        mixin: Option<TypeKey>,
    ) -> Result<JsonValue> {
        let vocab = self.resolve_vocabulary(node, mixin)?;
        let terms = self.resolve_terms(node, mixin)?;

        let mut obj = Map::new();
        obj.insert(keywords::AT_VOCAB.to_string(), JsonValue::String(vocab));
        for (name, value) in terms.iter() {
            obj.insert(name.to_string(), value.to_json());
        }
        Ok(JsonValue::Object(obj))
    }

    /// Vocabulary declared for a type: the type's own record, else its
    /// enclosing namespace's record.
    pub fn vocab_from_type(&self, ty: TypeKey) -> Option<String> {
        if let Some(vocab) = self.caps.vocab(&Site::Type(ty)) {
            return Some(vocab.to_string());
        }
        let namespace = self.caps.namespace_of(ty)?.to_string();
        self.caps
            .vocab(&Site::Namespace(namespace))
            .map(str::to_string)
    }

    /// Union of namespace-scope and type-scope term declarations; type
    /// entries overwrite namespace entries on collision.
    pub fn terms_from_type(&self, ty: TypeKey) -> Result<TermMap> {
        let mut map = match self.caps.namespace_of(ty) {
            Some(namespace) => self.site_terms(&Site::Namespace(namespace.to_string()))?,
            None => TermMap::new(),
        };
        map.merge(self.site_terms(&Site::Type(ty))?);
        Ok(map)
    }

    fn vocabulary(
        &self,
        node: &dyn LinkedNode,
        mixin: Option<TypeKey>,
        visited: &mut Vec<NodeId>,
    ) -> Result<String> {
        let ty = node.type_key();
        let mixin_vocab = mixin.and_then(|m| self.caps.vocab(&Site::Type(m)));
        let type_vocab = self.vocab_from_type(ty);

        // The provider contribution is computed eagerly so configuration
        // errors surface on every call, whichever scope wins.
        let provider_vocab = match self.nested_provider(node, mixin, visited)? {
            Some(provider) => Some(self.vocabulary(provider, None, visited)?),
            None => None,
        };

        let vocab = if let Some(vocab) = mixin_vocab {
            vocab.to_string() // wins over type
        } else if let Some(vocab) = type_vocab {
            vocab // wins over provider
        } else if let Some(vocab) = provider_vocab {
            vocab // wins over last resort
        } else {
            DEFAULT_VOCAB.to_string()
        };
        tracing::trace!(ty = ty.name(), vocab = %vocab, "resolved vocabulary");
        Ok(vocab)
    }

    fn terms(
        &self,
        node: &dyn LinkedNode,
        mixin: Option<TypeKey>,
        visited: &mut Vec<NodeId>,
    ) -> Result<TermMap> {
        let ty = node.type_key();
        let mut map = self.terms_from_type(ty)?;

        // Mixin terms override type terms.
        if let Some(mixin_ty) = mixin {
            map.merge(self.site_terms(&Site::Type(mixin_ty))?);
        }

        // Nested provider terms override everything declared so far.
        if let Some(provider) = self.nested_provider(node, mixin, visited)? {
            map.merge(self.terms(provider, None, visited)?);
        }

        self.member_terms(&mut map, node, self.caps.exposed_fields(ty));
        self.member_terms(&mut map, node, self.caps.exposed_properties(ty));

        tracing::debug!(ty = ty.name(), terms = map.len(), "resolved term mapping");
        Ok(map)
    }

    /// Term contributions of exposed members: an enumeration block for
    /// closed-enum members, a plain rename for members carrying an expose
    /// record.
    fn member_terms(&self, map: &mut TermMap, node: &dyn LinkedNode, members: &[MemberDescriptor]) {
        let ty = node.type_key();
        for member in members {
            let site = Site::Member {
                ty,
                name: member.name.clone(),
            };
            let expose = self.caps.expose(&site);
            match member.enum_type {
                Some(enum_ty) => self.enum_block(map, node, member, enum_ty, expose),
                None => {
                    if let Some(identifier) = expose {
                        map.insert(member.name.clone(), TermValue::Iri(identifier.to_string()));
                    }
                }
            }
        }
    }

    /// The pair of entries for a closed-enum member: a header record under
    /// the member's name and a mapping under the current value's own name.
    /// Nothing is emitted when the member is unset.
    fn enum_block(
        &self,
        map: &mut TermMap,
        node: &dyn LinkedNode,
        member: &MemberDescriptor,
        enum_ty: TypeKey,
        expose: Option<&str>,
    ) {
        let Some(variant) = node.enum_member(&member.name) else {
            return;
        };

        map.insert(
            member.name.clone(),
            TermValue::EnumBlock {
                id: expose.map(str::to_string),
            },
        );

        let value_site = Site::EnumValue {
            ty: enum_ty,
            variant: variant.to_string(),
        };
        let target = match self.caps.expose(&value_site) {
            Some(identifier) => identifier.to_string(),
            None => naming::upper_camel_case(variant),
        };
        map.insert(variant.to_string(), TermValue::Iri(target));
    }

    /// Terms/Term records declared directly at one site.
    ///
    /// A site carrying both record kinds, or a term list defining the same
    /// local name twice, is a configuration error reported with the site's
    /// identity.
    fn site_terms(&self, site: &Site) -> Result<TermMap> {
        let term = self.caps.term(site);
        let terms = self.caps.terms(site);

        if term.is_some() && terms.is_some() {
            return Err(ContextError::TermAndTerms {
                site: site.to_string(),
            });
        }

        let mut map = TermMap::new();
        if let Some(list) = terms {
            for decl in list {
                if map.contains(&decl.define) {
                    return Err(ContextError::DuplicateTerm {
                        name: decl.define.clone(),
                        site: site.to_string(),
                    });
                }
                map.insert(decl.define.clone(), term_value(decl));
            }
        }
        if let Some(decl) = term {
            map.insert(decl.define.clone(), term_value(decl));
        }
        Ok(map)
    }

    /// Nested-context-provider traversal.
    ///
    /// Locates the mixin's designated accessor (rejecting one that takes
    /// arguments before any invocation), invokes the same-named accessor on
    /// the runtime node, collapses collection yields to their first
    /// element, and follows mixin bindings until a value without one is
    /// reached. Invocation failures are fatal and carry the accessor's
    /// identity.
    fn nested_provider<'n>(
        &self,
        node: &'n dyn LinkedNode,
        mixin: Option<TypeKey>,
        visited: &mut Vec<NodeId>,
    ) -> Result<Option<&'n dyn LinkedNode>> {
        let Some(mixin_ty) = mixin else {
            return Ok(None);
        };
        let Some(accessor) = self.caps.provider_accessor(mixin_ty) else {
            return Ok(None);
        };
        if accessor.arity > 0 {
            return Err(ContextError::ProviderArity {
                accessor: accessor.name.clone(),
                arity: accessor.arity,
            });
        }

        let yielded =
            node.call_accessor(&accessor.name)
                .map_err(|fault| ContextError::ProviderInvocation {
                    accessor: accessor.name.clone(),
                    source: fault,
                })?;
        let Some(item) = yielded.into_first() else {
            return Ok(None);
        };

        let id = node_id(item);
        if visited.contains(&id) {
            return Err(ContextError::CyclicProvider {
                type_name: item.type_key().name().to_string(),
            });
        }
        visited.push(id);
        tracing::trace!(
            from = node.type_key().name(),
            to = item.type_key().name(),
            accessor = %accessor.name,
            "followed context provider"
        );

        match self.caps.mixin_for(item.type_key()) {
            None => Ok(Some(item)),
            Some(next_mixin) => self.nested_provider(item, Some(next_mixin), visited),
        }
    }
}

fn term_value(decl: &TermDecl) -> TermValue {
    if decl.reverse {
        TermValue::Reverse(decl.maps_to.clone())
    } else {
        TermValue::Iri(decl.maps_to.clone())
    }
}

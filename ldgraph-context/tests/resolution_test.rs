//! Integration tests for scope merging, precedence, and enumeration blocks

use ldgraph_context::{
    resolve_context, resolve_terms, resolve_vocabulary, ContextError, TermValue, DEFAULT_VOCAB,
};
use ldgraph_meta::{
    LinkedNode, MemberDescriptor, MetadataRegistry, Site, TermDecl, TypeDescriptor, TypeKey,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ============================================================================
// Test object graph
// ============================================================================

/// A value with no metadata registered anywhere.
struct Unadorned;

impl LinkedNode for Unadorned {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Unadorned>()
    }
}

enum EventStatus {
    EventCancelled,
    EventRescheduled,
}

impl EventStatus {
    fn name(&self) -> &'static str {
        match self {
            EventStatus::EventCancelled => "EVENT_CANCELLED",
            EventStatus::EventRescheduled => "EVENT_RESCHEDULED",
        }
    }
}

/// An event resource with one enum-typed field and one plain property.
struct Event {
    status: Option<EventStatus>,
}

impl LinkedNode for Event {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<Event>()
    }

    fn enum_member(&self, member: &str) -> Option<&str> {
        match member {
            "eventStatus" => self.status.as_ref().map(EventStatus::name),
            _ => None,
        }
    }
}

/// Mixin carrying secondary metadata for [`Event`].
struct EventMixin;

fn event_descriptor() -> TypeDescriptor {
    TypeDescriptor::new::<Event>()
        .with_namespace("events")
        .with_field(MemberDescriptor::enumerated::<EventStatus>("eventStatus"))
        .with_property(MemberDescriptor::scalar("performerName"))
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_no_metadata_yields_schema_org_and_empty_terms() {
    let registry = MetadataRegistry::new();

    let vocab = resolve_vocabulary(&registry, &Unadorned, None).unwrap();
    assert_eq!(vocab, DEFAULT_VOCAB);
    assert_eq!(vocab, "http://schema.org/");

    let terms = resolve_terms(&registry, &Unadorned, None).unwrap();
    assert!(terms.is_empty());
}

// ============================================================================
// Vocabulary precedence
// ============================================================================

#[test]
fn test_mixin_vocab_wins_over_type_vocab() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_vocab(Site::ty::<Event>(), "https://example.com/events#")
        .declare_vocab(Site::ty::<EventMixin>(), "https://example.com/mixin#");

    let event = Event { status: None };
    let vocab =
        resolve_vocabulary(&registry, &event, Some(TypeKey::of::<EventMixin>())).unwrap();
    assert_eq!(vocab, "https://example.com/mixin#");

    // Without the mixin, the type's own record applies.
    let vocab = resolve_vocabulary(&registry, &event, None).unwrap();
    assert_eq!(vocab, "https://example.com/events#");
}

#[test]
fn test_type_vocab_wins_over_namespace_vocab() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_vocab(Site::namespace("events"), "https://example.com/ns#")
        .declare_vocab(Site::ty::<Event>(), "https://example.com/events#");

    let event = Event { status: None };
    assert_eq!(
        resolve_vocabulary(&registry, &event, None).unwrap(),
        "https://example.com/events#"
    );
}

#[test]
fn test_namespace_vocab_applies_when_type_is_silent() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_vocab(Site::namespace("events"), "https://example.com/ns#");

    let event = Event { status: None };
    assert_eq!(
        resolve_vocabulary(&registry, &event, None).unwrap(),
        "https://example.com/ns#"
    );
}

// ============================================================================
// Term merging
// ============================================================================

#[test]
fn test_mixin_terms_override_type_terms() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_term(Site::ty::<Event>(), TermDecl::new("a", "X"))
        .declare_term(Site::ty::<EventMixin>(), TermDecl::new("a", "Y"));

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, Some(TypeKey::of::<EventMixin>())).unwrap();
    assert_eq!(terms.get("a"), Some(&TermValue::Iri("Y".to_string())));
    assert_eq!(terms.len(), 1);
}

#[test]
fn test_type_terms_override_namespace_terms() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_terms(
            Site::namespace("events"),
            vec![
                TermDecl::new("a", "fromNamespace"),
                TermDecl::new("b", "namespaceOnly"),
            ],
        )
        .declare_term(Site::ty::<Event>(), TermDecl::new("a", "fromType"));

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert_eq!(terms.get("a"), Some(&TermValue::Iri("fromType".to_string())));
    assert_eq!(
        terms.get("b"),
        Some(&TermValue::Iri("namespaceOnly".to_string()))
    );

    // The overwritten name keeps its original position.
    let names: Vec<&str> = terms.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_terms_list_with_reverse_binding() {
    let mut registry = MetadataRegistry::new();
    registry.register_type(event_descriptor()).declare_terms(
        Site::ty::<Event>(),
        vec![
            TermDecl::new("venue", "location"),
            TermDecl::reverse("spawnedBy", "isBasedOn"),
        ],
    );

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert_eq!(
        terms.get("venue"),
        Some(&TermValue::Iri("location".to_string()))
    );
    assert_eq!(
        terms.get("spawnedBy"),
        Some(&TermValue::Reverse("isBasedOn".to_string()))
    );
}

// ============================================================================
// Exposed members
// ============================================================================

#[test]
fn test_exposed_property_rename() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_expose(Site::member::<Event>("performerName"), "performer");

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert_eq!(
        terms.get("performerName"),
        Some(&TermValue::Iri("performer".to_string()))
    );
}

#[test]
fn test_member_without_expose_contributes_nothing() {
    let mut registry = MetadataRegistry::new();
    registry.register_type(event_descriptor());

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert!(terms.is_empty());
}

#[test]
fn test_property_overwrites_field_on_shared_name() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(
            TypeDescriptor::new::<Event>()
                .with_field(MemberDescriptor::scalar("performerName"))
                .with_property(MemberDescriptor::scalar("performerName")),
        )
        .declare_expose(Site::member::<Event>("performerName"), "performer");

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(
        terms.get("performerName"),
        Some(&TermValue::Iri("performer".to_string()))
    );
}

// ============================================================================
// Enumeration blocks
// ============================================================================

#[test]
fn test_enum_member_emits_header_and_camel_cased_value() {
    let mut registry = MetadataRegistry::new();
    registry.register_type(event_descriptor());

    let event = Event {
        status: Some(EventStatus::EventCancelled),
    };
    let terms = resolve_terms(&registry, &event, None).unwrap();

    assert_eq!(
        terms.get("eventStatus"),
        Some(&TermValue::EnumBlock { id: None })
    );
    assert_eq!(
        terms.get("EVENT_CANCELLED"),
        Some(&TermValue::Iri("EventCancelled".to_string()))
    );
}

#[test]
fn test_enum_member_with_exposes() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_expose(
            Site::member::<Event>("eventStatus"),
            "http://schema.org/eventStatus",
        )
        .declare_expose(
            Site::enum_value::<EventStatus>("EVENT_RESCHEDULED"),
            "http://schema.org/EventRescheduled",
        );

    let event = Event {
        status: Some(EventStatus::EventRescheduled),
    };
    let terms = resolve_terms(&registry, &event, None).unwrap();

    assert_eq!(
        terms.get("eventStatus"),
        Some(&TermValue::EnumBlock {
            id: Some("http://schema.org/eventStatus".to_string())
        })
    );
    assert_eq!(
        terms.get("EVENT_RESCHEDULED"),
        Some(&TermValue::Iri("http://schema.org/EventRescheduled".to_string()))
    );
}

#[test]
fn test_unset_enum_member_emits_nothing() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_expose(
            Site::member::<Event>("eventStatus"),
            "http://schema.org/eventStatus",
        );

    let event = Event { status: None };
    let terms = resolve_terms(&registry, &event, None).unwrap();
    assert!(terms.is_empty());
}

// ============================================================================
// Configuration conflicts
// ============================================================================

#[test]
fn test_term_and_terms_on_mixin_site_fails_every_call() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_term(Site::ty::<EventMixin>(), TermDecl::new("a", "X"))
        .declare_terms(Site::ty::<EventMixin>(), vec![TermDecl::new("b", "Y")]);

    let event = Event { status: None };
    for _ in 0..2 {
        let err = resolve_terms(&registry, &event, Some(TypeKey::of::<EventMixin>()))
            .unwrap_err();
        match err {
            ContextError::TermAndTerms { site } => assert!(site.contains("EventMixin")),
            other => panic!("expected TermAndTerms, got {other:?}"),
        }
    }
}

#[test]
fn test_duplicate_define_in_one_list_fails_every_call() {
    let mut registry = MetadataRegistry::new();
    registry.register_type(event_descriptor()).declare_terms(
        Site::ty::<Event>(),
        vec![TermDecl::new("dup", "X"), TermDecl::new("dup", "Y")],
    );

    let event = Event { status: None };
    for _ in 0..2 {
        let err = resolve_terms(&registry, &event, None).unwrap_err();
        match err {
            ContextError::DuplicateTerm { name, .. } => assert_eq!(name, "dup"),
            other => panic!("expected DuplicateTerm, got {other:?}"),
        }
    }
}

// ============================================================================
// Full @context assembly and idempotence
// ============================================================================

#[test]
fn test_resolve_context_emits_vocab_first_then_terms_in_order() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_vocab(Site::ty::<Event>(), "https://example.com/events#")
        .declare_terms(
            Site::ty::<Event>(),
            vec![
                TermDecl::new("venue", "location"),
                TermDecl::reverse("spawnedBy", "isBasedOn"),
            ],
        )
        .declare_expose(Site::member::<Event>("performerName"), "performer");

    let event = Event {
        status: Some(EventStatus::EventCancelled),
    };
    let context = resolve_context(&registry, &event, None).unwrap();

    assert_eq!(
        context,
        json!({
            "@vocab": "https://example.com/events#",
            "venue": "location",
            "spawnedBy": {"@reverse": "isBasedOn"},
            "eventStatus": {"@type": "@vocab"},
            "EVENT_CANCELLED": "EventCancelled",
            "performerName": "performer"
        })
    );

    let keys: Vec<&String> = context.as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "@vocab",
            "venue",
            "spawnedBy",
            "eventStatus",
            "EVENT_CANCELLED",
            "performerName"
        ]
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(event_descriptor())
        .declare_terms(
            Site::ty::<Event>(),
            vec![TermDecl::new("venue", "location"), TermDecl::new("act", "performer")],
        )
        .declare_expose(Site::member::<Event>("performerName"), "performer");

    let event = Event {
        status: Some(EventStatus::EventRescheduled),
    };

    let first = resolve_terms(&registry, &event, None).unwrap();
    let second = resolve_terms(&registry, &event, None).unwrap();

    assert_eq!(first, second);
    let first_names: Vec<&str> = first.names().collect();
    let second_names: Vec<&str> = second.names().collect();
    assert_eq!(first_names, second_names);
}

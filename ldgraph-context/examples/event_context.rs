//! Derives the JSON-LD @context for a small event resource.
//!
//! Run with: cargo run --example event_context

use ldgraph_context::resolve_context;
use ldgraph_meta::{
    Accessed, AccessorFault, LinkedNode, MemberDescriptor, MetadataRegistry, ProviderAccessor,
    Site, TermDecl, TypeDescriptor, TypeKey,
};

enum EventStatus {
    EventScheduled,
}

impl EventStatus {
    fn name(&self) -> &'static str {
        match self {
            EventStatus::EventScheduled => "EVENT_SCHEDULED",
        }
    }
}

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

/// A resource envelope around the event; its mixin designates the
/// `content` accessor as nested context provider.
struct EventResource {
    content: Event,
}

struct EventResourceMixin;

impl LinkedNode for EventResource {
    fn type_key(&self) -> TypeKey {
        TypeKey::of::<EventResource>()
    }

    fn call_accessor(&self, name: &str) -> Result<Accessed<'_>, AccessorFault> {
        match name {
            "content" => Ok(Accessed::Value(&self.content)),
            other => Err(AccessorFault::Missing {
                accessor: other.to_string(),
            }),
        }
    }
}

fn main() {
    let mut registry = MetadataRegistry::new();
    registry
        .register_type(
            TypeDescriptor::new::<Event>()
                .with_namespace("events")
                .with_field(MemberDescriptor::enumerated::<EventStatus>("eventStatus"))
                .with_property(MemberDescriptor::scalar("performerName")),
        )
        .register_type(
            TypeDescriptor::new::<EventResourceMixin>()
                .with_provider(ProviderAccessor::new("content")),
        )
        .declare_vocab(Site::namespace("events"), "http://schema.org/")
        .declare_terms(
            Site::ty::<Event>(),
            vec![
                TermDecl::new("venue", "location"),
                TermDecl::reverse("spawnedBy", "isBasedOn"),
            ],
        )
        .declare_expose(Site::member::<Event>("performerName"), "performer");

    let resource = EventResource {
        content: Event {
            status: Some(EventStatus::EventScheduled),
        },
    };

    let context = resolve_context(
        &registry,
        &resource,
        Some(TypeKey::of::<EventResourceMixin>()),
    )
    .expect("resolve @context");

    println!("{}", serde_json::to_string_pretty(&context).unwrap());
}

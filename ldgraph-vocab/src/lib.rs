//! JSON-LD Keywords and Well-Known Vocabulary IRIs for ldgraph
//!
//! This crate provides a centralized location for the JSON-LD keyword
//! strings and the namespace IRIs used throughout the ldgraph ecosystem.
//!
//! # Organization
//!
//! Constants are organized by concern:
//! - `keywords` - JSON-LD keywords (`@context`, `@id`, `@vocab`, ...)
//! - `ns` - well-known namespace IRIs, including the default vocabulary

/// JSON-LD keyword constants
pub mod keywords {
    /// The `@context` keyword
    pub const AT_CONTEXT: &str = "@context";

    /// The `@id` keyword
    pub const AT_ID: &str = "@id";

    /// The `@type` keyword
    pub const AT_TYPE: &str = "@type";

    /// The `@vocab` keyword
    pub const AT_VOCAB: &str = "@vocab";

    /// The `@reverse` keyword
    pub const AT_REVERSE: &str = "@reverse";

    /// The `@base` keyword
    pub const AT_BASE: &str = "@base";

    /// The `@graph` keyword
    pub const AT_GRAPH: &str = "@graph";

    /// The `@value` keyword
    pub const AT_VALUE: &str = "@value";

    /// The `@list` keyword
    pub const AT_LIST: &str = "@list";

    /// The `@set` keyword
    pub const AT_SET: &str = "@set";

    /// The `@language` keyword
    pub const AT_LANGUAGE: &str = "@language";

    /// The `@container` keyword
    pub const AT_CONTAINER: &str = "@container";
}

/// Well-known namespace IRIs
pub mod ns {
    /// schema.org namespace, the default vocabulary for otherwise
    /// unqualified terms
    pub const SCHEMA_ORG: &str = "http://schema.org/";

    /// Hydra core vocabulary namespace
    pub const HYDRA: &str = "http://www.w3.org/ns/hydra/core#";

    /// RDF vocabulary namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// RDFS vocabulary namespace
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// XSD vocabulary namespace
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// OWL vocabulary namespace
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
}

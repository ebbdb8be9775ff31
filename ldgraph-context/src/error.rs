use ldgraph_meta::AccessorFault;
use thiserror::Error;

/// Errors raised during context resolution.
///
/// Every variant is unrecoverable for the current resolution call: these
/// represent static metadata mistakes, not transient conditions, so there
/// is no retry path. Absence of metadata at any scope is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// A declaration site carries both a single-term and a multi-term
    /// record.
    #[error("found both a term and a term list at {site}, use either one or the other")]
    TermAndTerms { site: String },

    /// One multi-term record defines the same local name twice.
    #[error("duplicate definition of term '{name}' at {site}")]
    DuplicateTerm { name: String, site: String },

    /// A designated context-provider accessor requires arguments. Detected
    /// when the accessor is located, before any invocation.
    #[error("context provider accessor '{accessor}' must not have arguments (declared arity {arity})")]
    ProviderArity { accessor: String, arity: usize },

    /// A context-provider accessor could not be invoked on the runtime
    /// type, or the invocation itself raised.
    #[error("context provider accessor '{accessor}' failed")]
    ProviderInvocation {
        accessor: String,
        #[source]
        source: AccessorFault,
    },

    /// Provider traversal reached an instance already visited in this
    /// resolution call.
    #[error("context provider cycle through type '{type_name}'")]
    CyclicProvider { type_name: String },
}

pub type Result<T> = std::result::Result<T, ContextError>;

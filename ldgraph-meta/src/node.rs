//! Read-only access to the live object graph
//!
//! [`LinkedNode`] is the engine's window onto one object during a
//! resolution pass: its runtime type identity, the current values of its
//! enum-typed members, and invocation of designated no-argument accessors.
//! Implementations never hand out mutable access and the engine never
//! retains a node beyond the call.

use crate::types::TypeKey;
use thiserror::Error;

/// Failure raised while invoking a named accessor on a node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessorFault {
    /// The runtime type has no accessor with the requested name.
    #[error("no accessor named '{accessor}' on the runtime type")]
    Missing { accessor: String },

    /// The accessor exists but its invocation raised.
    #[error("accessor '{accessor}' raised: {message}")]
    Raised { accessor: String, message: String },
}

/// Value(s) yielded by an accessor invocation.
pub enum Accessed<'a> {
    /// A single nested value.
    Value(&'a dyn LinkedNode),
    /// A sequential collection, in iteration order.
    Seq(Vec<&'a dyn LinkedNode>),
    /// A keyed mapping, entries in the order the underlying collection
    /// iterates them.
    Map(Vec<(String, &'a dyn LinkedNode)>),
}

impl<'a> Accessed<'a> {
    /// Collapse to a single value: a scalar yields itself, a sequence its
    /// first element, a mapping the value of its first entry. Empty
    /// collections yield nothing.
    pub fn into_first(self) -> Option<&'a dyn LinkedNode> {
        match self {
            Accessed::Value(node) => Some(node),
            Accessed::Seq(items) => items.into_iter().next(),
            Accessed::Map(entries) => entries.into_iter().next().map(|(_, value)| value),
        }
    }
}

/// Read-only view of one live object.
///
/// The default method bodies describe a value with no enum-typed members
/// and no accessors; implementations override what their type actually
/// carries.
pub trait LinkedNode {
    /// Identity of the value's runtime type in the metadata table.
    fn type_key(&self) -> TypeKey;

    /// Current variant name of the enum-typed member `member`, or `None`
    /// when the member is unset.
    fn enum_member(&self, member: &str) -> Option<&str> {
        let _ = member;
        None
    }

    /// Invoke the no-argument accessor `name`, yielding nested value(s).
    fn call_accessor(&self, name: &str) -> Result<Accessed<'_>, AccessorFault> {
        Err(AccessorFault::Missing {
            accessor: name.to_string(),
        })
    }
}

//! Errors raised while assembling a tree.
//!
//! Ticking never fails: every runtime outcome is a [`Status`](crate::Status).
//! Only structural mistakes made during construction are reported here.

use thiserror::Error;

use crate::node::NodeKind;

/// Structural problems detected during tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{kind} '{name}' has no children")]
    EmptyComposite { name: String, kind: NodeKind },

    #[error("behavior tree '{name}' has no children")]
    EmptyTree { name: String },

    #[error("leaf '{name}' cannot have children")]
    LeafWithChildren { name: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;

//! Construction-time errors.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors raised while assembling a tree.
///
/// Ticking never produces an error: a failed tick is `Status::Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("{kind} must have at least one child")]
    EmptyComposite { kind: CompositeKind },
}

/// The composite flavours that validate their children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    Selector,
    Sequencer,
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompositeKind::Selector => "selector",
            CompositeKind::Sequencer => "sequencer",
        };
        write!(f, "{}", label)
    }
}

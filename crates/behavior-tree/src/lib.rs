//! Minimal behavior tree engine.
//!
//! A tree is a hierarchy of nodes ticked against a host-owned blackboard.
//! Each tick is a synchronous traversal from the root to some subset of the
//! leaves; the resulting [`Status`] bubbles back up and each composite
//! decides locally whether to stop early or keep scanning its children.
//!
//! - **Running is a value**: a tick never blocks or yields. `Running` tells
//!   the host to tick again on a later cycle.
//! - **Static structure**: children are fixed at construction and ticked in
//!   declared order.
//! - **Opaque blackboard**: the context type `C` is whatever the host wants.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Composite nodes: [`Sequencer`], [`Selector`]
//! - Leaf nodes: [`Conditional`], [`Action`] (via [`ActionNode`])
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - [`BehaviorTree`]: root holder for host tick loops

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod status;
pub mod tree;

pub use behavior::Behavior;
pub use composite::{Selector, Sequencer};
pub use decorator::{AlwaysSucceed, Inverter};
pub use error::{CompositeKind, Result, TreeError};
pub use leaf::{Action, ActionNode, Conditional};
pub use status::Status;
pub use tree::BehaviorTree;

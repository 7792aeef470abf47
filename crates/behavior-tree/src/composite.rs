//! Composite behavior nodes.
//!
//! Composite nodes own an ordered list of children and combine their
//! statuses. [`Sequencer`] is a short-circuited AND over steps and
//! [`Selector`] a short-circuited OR over alternatives. Both stop at the
//! first child whose status settles the outcome; later children are not
//! ticked that cycle.

use crate::error::{CompositeKind, Result, TreeError};
use crate::{Behavior, Status};

/// Ordered, fixed child list shared by every composite.
///
/// The list is validated once at construction and never reordered.
pub(crate) struct Children<C> {
    nodes: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Children<C> {
    fn new(kind: CompositeKind, nodes: Vec<Box<dyn Behavior<C>>>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(TreeError::EmptyComposite { kind });
        }
        Ok(Self { nodes })
    }

    #[inline]
    fn child_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ticks children left to right until one returns something other than
    /// `pass`, and returns that status. Returns `pass` if every child did.
    fn tick_until(&mut self, ctx: &mut C, pass: Status, kind: CompositeKind) -> Status {
        for (index, child) in self.nodes.iter_mut().enumerate() {
            let status = child.tick(ctx);
            if status != pass {
                tracing::trace!(%kind, index, ?status, "composite stopped early");
                return status;
            }
        }
        pass
    }
}

/// Ticks children in order until one does not succeed.
///
/// # Semantics
///
/// A `Sequencer` evaluates its children from left to right:
/// - If a child returns `Success`, the sequencer **continues** to the next child
/// - If a child returns `Failure` or `Running`, the sequencer **stops** and
///   returns that status
/// - If all children return `Success`, the sequencer returns `Success`
///
/// A `Running` step is re-entered from the first child on the next tick, so
/// earlier steps act as guards that are re-checked every cycle.
pub struct Sequencer<C> {
    children: Children<C>,
}

impl<C> Sequencer<C> {
    /// Creates a new sequencer with the given child behaviors.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyComposite`] if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self> {
        Ok(Self {
            children: Children::new(CompositeKind::Sequencer, children)?,
        })
    }

    /// Number of children, fixed at construction.
    pub fn child_count(&self) -> usize {
        self.children.child_count()
    }
}

impl<C> Behavior<C> for Sequencer<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.children
            .tick_until(ctx, Status::Success, CompositeKind::Sequencer)
    }
}

/// Ticks children in order until one does not fail.
///
/// # Semantics
///
/// A `Selector` evaluates its children from left to right:
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If a child returns `Success` or `Running`, the selector **stops** and
///   returns that status
/// - If all children return `Failure`, the selector returns `Failure`
pub struct Selector<C> {
    children: Children<C>,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyComposite`] if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Result<Self> {
        Ok(Self {
            children: Children::new(CompositeKind::Selector, children)?,
        })
    }

    /// Number of children, fixed at construction.
    pub fn child_count(&self) -> usize {
        self.children.child_count()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.children
            .tick_until(ctx, Status::Failure, CompositeKind::Selector)
    }
}

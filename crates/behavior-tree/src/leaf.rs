//! Leaf behavior nodes.
//!
//! Leaves have no children and touch domain logic directly. [`Conditional`]
//! wraps a read-only predicate; [`Action`] is the extension point for
//! activities that may span several ticks.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send>;

/// Evaluates a predicate over the blackboard.
///
/// Returns `Success` when the predicate holds and `Failure` otherwise. A
/// conditional never returns `Running` and keeps no state between ticks: the
/// predicate is re-evaluated on every tick.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Behavior, Conditional, Status};
///
/// struct Board {
///     battery: u8,
/// }
///
/// let mut low_battery = Conditional::new(|bb: &Board| bb.battery < 20);
///
/// assert_eq!(low_battery.tick(&mut Board { battery: 5 }), Status::Success);
/// assert_eq!(low_battery.tick(&mut Board { battery: 90 }), Status::Failure);
/// ```
pub struct Conditional<C> {
    predicate: Predicate<C>,
}

impl<C> Conditional<C> {
    /// Creates a conditional from a predicate over the blackboard.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C> Behavior<C> for Conditional<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        Status::from((self.predicate)(ctx))
    }
}

/// A user-defined activity.
///
/// Implementors own whatever state they need to track progress across ticks
/// (counters, handles to external work) as ordinary fields, and decide on
/// each tick whether the activity is still `Running` or has settled.
/// Blocking work must not happen inside `tick`; poll instead and report
/// `Running` until it completes.
///
/// Wrap an action in [`ActionNode`] (or use [`crate::builder::action`]) to
/// place it in a tree.
pub trait Action<C>: Send {
    /// Advance the activity by one tick.
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Label used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Tree node adapter for an [`Action`].
pub struct ActionNode<A> {
    action: A,
}

impl<A> ActionNode<A> {
    /// Wraps `action` as a tree node.
    pub fn new(action: A) -> Self {
        Self { action }
    }

    /// Borrow the wrapped action, e.g. to read its progress.
    pub fn inner(&self) -> &A {
        &self.action
    }

    /// Mutable access to the wrapped action, e.g. to reset its progress.
    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.action
    }

    /// Unwraps the node, returning the action.
    pub fn into_inner(self) -> A {
        self.action
    }
}

impl<C, A> Behavior<C> for ActionNode<A>
where
    A: Action<C>,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.action.tick(ctx);
        tracing::trace!(action = self.action.name(), ?status, "action ticked");
        status
    }
}

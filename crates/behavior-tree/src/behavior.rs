//! Core behavior trait.
//!
//! [`Behavior`] is the contract every tree element fulfils. It is generic
//! over a context type `C`, the host's blackboard, which is threaded by
//! mutable reference through every tick.

use crate::Status;

/// A behavior tree node that can be ticked against a blackboard.
pub trait Behavior<C>: Send {
    /// Evaluate this node once.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the blackboard. Nodes read shared state
    ///   from it and may write results for nodes ticked later.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs further ticks
    fn tick(&mut self, ctx: &mut C) -> Status;
}

/// Boxed behaviors are behaviors too.
///
/// This lets `Box<dyn Behavior<C>>` sit in heterogeneous child lists.
impl<C, B> Behavior<C> for Box<B>
where
    B: Behavior<C> + ?Sized,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}

//! Decorator behavior nodes.
//!
//! Decorators wrap a single child and reshape its terminal result. Both
//! decorators here pass `Running` through untouched so an in-progress child
//! keeps being ticked on later cycles.

use crate::{Behavior, Status};

/// Inverts the terminal result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, so does the inverter
///
/// A logical NOT that leaves in-progress work alone.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Wraps `child`.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Turns a terminal child result into `Success`.
///
/// # Semantics
///
/// - If the child returns `Success` or `Failure`, returns `Success`
/// - If the child returns `Running`, returns `Running`
///
/// Useful for optional steps that must not abort an enclosing sequencer.
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    /// Wraps `child`.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.tick(ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        }
    }
}

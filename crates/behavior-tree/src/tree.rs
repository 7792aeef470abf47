//! Root holder for hosts that drive a tree.

use crate::{Behavior, Status};

/// Owns the root node and remembers what the last tick produced.
///
/// `tick` runs one full root-to-leaves traversal and returns. How often to
/// call it, and when to stop, is the host's business.
pub struct BehaviorTree<C> {
    root: Box<dyn Behavior<C>>,
    ticks: u64,
    last_status: Option<Status>,
}

impl<C> BehaviorTree<C> {
    pub fn new(root: Box<dyn Behavior<C>>) -> Self {
        Self {
            root,
            ticks: 0,
            last_status: None,
        }
    }

    /// Tick the root once against `blackboard`.
    pub fn tick(&mut self, blackboard: &mut C) -> Status {
        self.ticks += 1;
        let span = tracing::debug_span!("bt_tick", tick = self.ticks);
        let _enter = span.enter();

        let status = self.root.tick(blackboard);
        tracing::trace!(?status, "root settled");
        self.last_status = Some(status);
        status
    }

    /// Number of ticks issued so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Status returned by the most recent tick, if any.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }
}

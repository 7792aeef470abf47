//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing `Box::new(Sequencer::new(vec![...])?)`, use
//! `sequencer(vec![...])?`. Composite helpers are fallible because empty
//! composites are rejected.

use crate::error::Result;
use crate::{
    Action, ActionNode, AlwaysSucceed, Behavior, Conditional, Inverter, Selector, Sequencer,
};

/// Creates a sequencer node.
///
/// Shorthand for `Box::new(Sequencer::new(children)?)`.
#[inline]
pub fn sequencer<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Result<Box<dyn Behavior<C>>> {
    Ok(Box::new(Sequencer::new(children)?))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children)?)`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Result<Box<dyn Behavior<C>>> {
    Ok(Box::new(Selector::new(children)?))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates an always-succeed node.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}

/// Creates a conditional leaf from a predicate.
#[inline]
pub fn condition<C, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    C: 'static,
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(Conditional::new(predicate))
}

/// Wraps an action as a leaf node.
#[inline]
pub fn action<C, A>(action: A) -> Box<dyn Behavior<C>>
where
    C: 'static,
    A: Action<C> + 'static,
{
    Box::new(ActionNode::new(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    struct Counter {
        ticks: u32,
    }

    struct Bump;
    impl Action<Counter> for Bump {
        fn tick(&mut self, ctx: &mut Counter) -> Status {
            ctx.ticks += 1;
            Status::Success
        }
    }

    #[test]
    fn builds_nested_tree() -> Result<()> {
        let mut root = selector(vec![
            sequencer(vec![condition(|c: &Counter| c.ticks >= 2), action(Bump)])?,
            always_succeed(inverter(action(Bump))),
        ])?;

        let mut ctx = Counter { ticks: 0 };
        assert_eq!(root.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 1);
        assert_eq!(root.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 2);
        // Guard now holds: the sequencer branch runs instead.
        assert_eq!(root.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 3);
        Ok(())
    }

    #[test]
    fn empty_children_propagate_error() {
        assert!(selector::<Counter>(Vec::new()).is_err());
        assert!(sequencer::<Counter>(Vec::new()).is_err());
    }
}

//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// `Running` is a value, not a suspension: the tick that produced it has
/// already returned. The host is expected to tick the tree again on a later
/// cycle so the in-progress node can advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: the predicate held.
    /// For actions: the activity finished.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: the predicate did not hold.
    /// For actions: the activity could not be completed.
    Failure,

    /// The behavior is still in progress and must be ticked again.
    ///
    /// Only actions (and composites propagating an action's status) return
    /// this. Conditions never do.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`. `Running` is left untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    /// `true` maps to `Success`, `false` to `Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}

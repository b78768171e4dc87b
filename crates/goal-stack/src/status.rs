//! Lifecycle status of goal nodes.

/// The lifecycle state of a goal.
///
/// # Transitions
///
/// A goal is constructed `Inactive`, moves to `Running` on activation and
/// stays there across ticks until it reaches one of the two terminal states.
/// Terminal goals are consumed by their parent, which terminates and evicts
/// them before the next sibling activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The goal has been constructed but not yet activated.
    #[default]
    Inactive,

    /// The goal is in progress and will be resumed next tick.
    Running,

    /// The goal completed successfully.
    Success,

    /// The goal could not be completed (no path, no cover, target lost, ...).
    ///
    /// Failure is a first-class outcome, not an error: parents evict a failed
    /// child and decide what to do next.
    Failed,
}

impl Status {
    /// Returns `true` if this status is `Inactive`.
    #[inline]
    pub fn is_inactive(self) -> bool {
        matches!(self, Status::Inactive)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Status::Failed)
    }

    /// Returns `true` for the two terminal states (`Success` or `Failed`).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failed)
    }
}

//! Core goal trait.
//!
//! This module defines the [`Goal`] trait, the fundamental abstraction for
//! all goal nodes. The trait is generic over a context type `C` (the
//! blackboard handed to every lifecycle method), so the library carries no
//! assumptions about what a "unit" or a "world" is.

use crate::{GoalCategory, Status};

/// A resumable goal node driven against a context.
///
/// # Lifecycle contract
///
/// - [`activate`](Goal::activate) transitions Inactive → Running and performs
///   one-time setup. Setup may discover that preconditions no longer hold and
///   set the status straight to `Failed`.
/// - [`process`](Goal::process) advances one tick and returns the current
///   status. Implementations must tolerate being called while still
///   `Inactive` by activating first (see
///   [`activate_if_inactive`](Goal::activate_if_inactive)).
/// - [`terminate`](Goal::terminate) performs cleanup and forces the status to
///   a terminal value. It is called on preemption as well as on natural
///   completion, so it must be safe to call in any state.
/// - [`handle_message`](Goal::handle_message) is an optional string-keyed
///   signal channel. Composite goals forward a message to their front child
///   before handling it locally; the return value reports whether anyone
///   consumed it.
pub trait Goal<C>: Send {
    /// Current lifecycle status.
    fn status(&self) -> Status;

    /// Overwrites the lifecycle status.
    fn set_status(&mut self, status: Status);

    /// Category consumed by turn bookkeeping.
    fn category(&self) -> GoalCategory;

    /// One-time setup; transitions Inactive → Running (or straight to
    /// `Failed` if preconditions are gone).
    fn activate(&mut self, ctx: &mut C);

    /// Advances one tick of work and returns the resulting status.
    fn process(&mut self, ctx: &mut C) -> Status;

    /// Cleanup; forces the status to a terminal value regardless of prior
    /// state. Called on preemption as well as completion.
    fn terminate(&mut self, ctx: &mut C);

    /// Handles a string-keyed signal. Returns `true` if consumed.
    fn handle_message(&mut self, _ctx: &mut C, _msg: &str) -> bool {
        false
    }

    /// Calls [`activate`](Goal::activate) if the goal is still `Inactive`.
    ///
    /// Every `process` implementation is expected to begin with this, so a
    /// goal works regardless of whether its owner activated it explicitly.
    fn activate_if_inactive(&mut self, ctx: &mut C) {
        if self.status().is_inactive() {
            self.activate(ctx);
        }
    }
}

/// Blanket implementation for boxed goals.
///
/// This allows `Box<G>` (including `Box<dyn Goal<C>>`) to be used anywhere a
/// `Goal<C>` is expected, enabling heterogeneous goal stacks.
impl<C, G: Goal<C> + ?Sized> Goal<C> for Box<G> {
    #[inline]
    fn status(&self) -> Status {
        (**self).status()
    }

    #[inline]
    fn set_status(&mut self, status: Status) {
        (**self).set_status(status)
    }

    #[inline]
    fn category(&self) -> GoalCategory {
        (**self).category()
    }

    #[inline]
    fn activate(&mut self, ctx: &mut C) {
        (**self).activate(ctx)
    }

    #[inline]
    fn process(&mut self, ctx: &mut C) -> Status {
        (**self).process(ctx)
    }

    #[inline]
    fn terminate(&mut self, ctx: &mut C) {
        (**self).terminate(ctx)
    }

    #[inline]
    fn handle_message(&mut self, ctx: &mut C, msg: &str) -> bool {
        (**self).handle_message(ctx, msg)
    }
}

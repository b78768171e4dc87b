//! Front-first subgoal stacks.
//!
//! A [`GoalStack`] is the ordered collection behind every composite goal.
//! The front entry is the currently active subgoal; completed or failed
//! entries are terminated and evicted from the front before the next entry
//! activates. Adding "now" inserts at the front (preempting), queuing appends
//! at the back.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::{Goal, GoalCategory, Status};

/// Ordered front-first collection of subgoals.
///
/// Generic over the context `C` and the stored goal type `G`, which defaults
/// to `dyn Goal<C>` so plain heterogeneous stacks read as `GoalStack<C>`.
/// Composites that need a richer goal trait (for example one carrying an
/// identifying tag) instantiate `GoalStack<C, dyn TheirTrait>`.
pub struct GoalStack<C, G: ?Sized = dyn Goal<C>> {
    goals: VecDeque<Box<G>>,
    _ctx: PhantomData<fn(&mut C)>,
}

impl<C, G: ?Sized> Default for GoalStack<C, G> {
    fn default() -> Self {
        Self {
            goals: VecDeque::new(),
            _ctx: PhantomData,
        }
    }
}

impl<C, G: Goal<C> + ?Sized> GoalStack<C, G> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subgoals currently held, the front (possibly already
    /// terminal) entry included.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Returns `true` if no subgoals are held.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// The front subgoal, if any.
    pub fn front(&self) -> Option<&G> {
        self.goals.front().map(|g| &**g)
    }

    /// Category of the front subgoal, if any.
    pub fn front_category(&self) -> Option<GoalCategory> {
        self.goals.front().map(|g| g.category())
    }

    /// Inserts a subgoal at the front, preempting the current one.
    pub fn push_front(&mut self, goal: Box<G>) {
        self.goals.push_front(goal);
    }

    /// Queues a subgoal at the back.
    pub fn push_back(&mut self, goal: Box<G>) {
        self.goals.push_back(goal);
    }

    /// Advances the stack by one tick.
    ///
    /// First terminates and evicts any terminal goals sitting at the front
    /// (they stay on the stack from the tick in which they finished until
    /// here, so owners get one look at the finished goal). Then activates the
    /// front goal if it is still Inactive and processes it.
    ///
    /// A `Success` from the front goal is converted to `Running` while more
    /// goals are queued behind it: the stack does not finish until empty.
    /// An empty stack yields `Success`.
    pub fn process_front(&mut self, ctx: &mut C) -> Status {
        while self
            .goals
            .front()
            .is_some_and(|g| g.status().is_terminal())
        {
            let mut done = self.goals.pop_front().expect("front checked above");
            done.terminate(ctx);
        }

        match self.goals.front_mut() {
            Some(front) => {
                front.activate_if_inactive(ctx);
                let status = front.process(ctx);

                if status.is_success() && self.goals.len() > 1 {
                    Status::Running
                } else {
                    status
                }
            }
            None => Status::Success,
        }
    }

    /// Terminates every held subgoal in front-to-back order, then clears the
    /// stack. Used for preemption; composites call this from their own
    /// `terminate` so cancellation propagates depth-first.
    pub fn terminate_all(&mut self, ctx: &mut C) {
        for goal in self.goals.iter_mut() {
            goal.terminate(ctx);
        }
        self.goals.clear();
    }

    /// Forwards a message to the front subgoal only.
    ///
    /// Returns `false` when the stack is empty or the front goal did not
    /// consume the message.
    pub fn forward_message(&mut self, ctx: &mut C, msg: &str) -> bool {
        match self.goals.front_mut() {
            Some(front) => front.handle_message(ctx, msg),
            None => false,
        }
    }
}

//! Concrete leaf tasks.
//!
//! These cover the common leaf shapes of frame-ticked game logic:
//!
//! - [`Action`]: fire-and-forget, always succeeds
//! - [`Condition`]: pure check, never runs
//! - [`TimedAction`]: one-shot operation, then background work until a
//!   duration elapses
//! - [`Activity`]: start hook, then background work until a success or fail
//!   predicate resolves it

use crate::task::{DeltaTime, Noop, Operation, Predicate, Task};
use crate::Status;

/// Runs an operation once per tick and succeeds.
///
/// # Example
///
/// ```rust
/// use resumable_bt::{Action, Status, Task};
///
/// let mut jump = Action::new(|height: &mut u32| *height += 1);
/// let mut height = 0;
/// assert_eq!(jump.tick(&mut height), Status::Success);
/// assert_eq!(height, 1);
/// ```
pub struct Action<O> {
    operation: O,
}

impl<O> Action<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }
}

impl<C, O: Operation<C>> Task<C> for Action<O> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.operation.run(ctx);
        Status::Success
    }
}

/// Maps a predicate onto `Success` / `Failure`.
///
/// Typically placed first in a sequence to gate the work that follows it.
pub struct Condition<P> {
    predicate: P,
}

impl<P> Condition<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<C, P: Predicate<C>> Task<C> for Condition<P> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.predicate.check(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// Fires a one-shot operation on the first tick of an activation, then runs a
/// background operation every tick until `duration` has elapsed.
///
/// # Semantics
///
/// Each tick first adds the context's [`DeltaTime`] to the elapsed time:
/// - Elapsed time above `duration`: clear progress and return `Success`.
///   Neither operation runs on that tick.
/// - Otherwise: run the one-shot operation if it has not fired yet, then the
///   background operation, and return `Running`.
pub struct TimedAction<O, B> {
    once: O,
    background: B,
    duration: f32,
    elapsed: f32,
    fired: bool,
}

impl<O, B> TimedAction<O, B> {
    pub fn new(once: O, background: B, duration: f32) -> Self {
        Self {
            once,
            background,
            duration,
            elapsed: 0.0,
            fired: false,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time accumulated during the current activation.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the one-shot operation already ran in this activation.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl<O> TimedAction<O, Noop> {
    /// Timed action without background work.
    pub fn once(once: O, duration: f32) -> Self {
        Self::new(once, Noop, duration)
    }
}

impl<C, O, B> Task<C> for TimedAction<O, B>
where
    C: DeltaTime,
    O: Operation<C>,
    B: Operation<C>,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.elapsed += ctx.delta_time();

        if self.elapsed > self.duration {
            self.elapsed = 0.0;
            self.fired = false;
            return Status::Success;
        }

        if !self.fired {
            self.fired = true;
            self.once.run(ctx);
        }
        self.background.run(ctx);

        Status::Running
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.fired = false;
    }
}

/// Long-running behavior resolved by a pair of predicates.
///
/// # Semantics
///
/// - The start hook runs on the first tick of every activation.
/// - If the success predicate holds, the success hook runs and the task
///   returns `Success`.
/// - Else if the fail predicate holds, the fail hook runs and the task also
///   returns `Success`: failing is a different outcome, not a different
///   control-flow signal.
/// - Otherwise the background hook runs and the task returns `Running`.
///
/// Both resolutions end the activation, so the next tick fires the start hook
/// again.
///
/// # Example
///
/// ```rust
/// use resumable_bt::{Activity, Status, Task};
///
/// // Count up until we reach 3.
/// let mut climb = Activity::new(|n: &u32| *n >= 3, |_: &u32| false)
///     .in_background(|n: &mut u32| *n += 1);
///
/// let mut n = 0;
/// assert_eq!(climb.tick(&mut n), Status::Running);
/// assert_eq!(climb.tick(&mut n), Status::Running);
/// assert_eq!(climb.tick(&mut n), Status::Running);
/// assert_eq!(climb.tick(&mut n), Status::Success);
/// ```
pub struct Activity<C> {
    succeed_when: Box<dyn Predicate<C>>,
    fail_when: Box<dyn Predicate<C>>,
    on_start: Box<dyn Operation<C>>,
    on_success: Box<dyn Operation<C>>,
    on_fail: Box<dyn Operation<C>>,
    background: Box<dyn Operation<C>>,
    started: bool,
}

impl<C> Activity<C> {
    /// Creates an activity from its resolving predicates. All hooks start out
    /// as no-ops.
    pub fn new(
        succeed_when: impl Predicate<C> + 'static,
        fail_when: impl Predicate<C> + 'static,
    ) -> Self {
        Self {
            succeed_when: Box::new(succeed_when),
            fail_when: Box::new(fail_when),
            on_start: Box::new(Noop),
            on_success: Box::new(Noop),
            on_fail: Box::new(Noop),
            background: Box::new(Noop),
            started: false,
        }
    }

    pub fn on_start(mut self, op: impl Operation<C> + 'static) -> Self {
        self.on_start = Box::new(op);
        self
    }

    pub fn on_success(mut self, op: impl Operation<C> + 'static) -> Self {
        self.on_success = Box::new(op);
        self
    }

    pub fn on_fail(mut self, op: impl Operation<C> + 'static) -> Self {
        self.on_fail = Box::new(op);
        self
    }

    pub fn in_background(mut self, op: impl Operation<C> + 'static) -> Self {
        self.background = Box::new(op);
        self
    }

    /// Whether the start hook already ran in the current activation.
    pub fn has_started(&self) -> bool {
        self.started
    }
}

impl<C> Task<C> for Activity<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.started {
            self.started = true;
            self.on_start.run(ctx);
        }

        if self.succeed_when.check(ctx) {
            self.on_success.run(ctx);
            self.started = false;
            return Status::Success;
        }

        if self.fail_when.check(ctx) {
            self.on_fail.run(ctx);
            self.started = false;
            return Status::Success;
        }

        self.background.run(ctx);
        Status::Running
    }

    fn reset(&mut self) {
        self.started = false;
    }
}

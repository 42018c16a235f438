//! Leaf task contract.
//!
//! This module defines the [`Task`] trait, the only interface a leaf behavior
//! has to satisfy, together with the capability traits that concrete tasks
//! are assembled from. Everything is generic over a host context type `C`
//! that is passed into every tick.

use crate::Status;

/// A unit of leaf work that can be ticked against a context.
///
/// Internal progress (timers, "already started" flags) belongs to the task
/// and is invisible to the tree. Nodes only ever see the returned [`Status`].
pub trait Task<C> {
    /// Perform one tick worth of work and report where the task stands.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the host context. Tasks may read host
    ///   state and invoke side effects through it.
    ///
    /// Implementations must tolerate being called once per tick forever.
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Discard any internal progress so the next [`tick`](Task::tick) behaves
    /// as if the task had never run.
    ///
    /// Stateless tasks keep this no-op default.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed tasks.
///
/// This allows `Box<dyn Task<C>>` to also implement `Task<C>`, so leaves can
/// hold heterogeneous tasks behind one type.
impl<C> Task<C> for Box<dyn Task<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Source of the per-tick elapsed time used by timed tasks.
///
/// Units are up to the host but must be the same for every task in a tree.
pub trait DeltaTime {
    /// Time elapsed since the previous tick.
    fn delta_time(&self) -> f32;
}

/// A bare delta is a valid context for trees that need nothing else.
impl DeltaTime for f32 {
    #[inline]
    fn delta_time(&self) -> f32 {
        *self
    }
}

/// A side-effecting operation invoked by a task.
pub trait Operation<C> {
    fn run(&mut self, ctx: &mut C);
}

impl<C, F> Operation<C> for F
where
    F: FnMut(&mut C),
{
    #[inline]
    fn run(&mut self, ctx: &mut C) {
        self(ctx)
    }
}

/// A side-effect-free boolean query over the context.
pub trait Predicate<C> {
    fn check(&self, ctx: &C) -> bool;
}

impl<C, F> Predicate<C> for F
where
    F: Fn(&C) -> bool,
{
    #[inline]
    fn check(&self, ctx: &C) -> bool {
        self(ctx)
    }
}

/// Operation that does nothing. Used for optional task hooks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noop;

impl<C> Operation<C> for Noop {
    #[inline]
    fn run(&mut self, _ctx: &mut C) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
    }

    impl Task<u32> for Counter {
        fn tick(&mut self, ctx: &mut u32) -> Status {
            self.ticks += 1;
            *ctx += 1;
            Status::Running
        }
    }

    #[test]
    fn boxed_task_delegates() {
        let mut task: Box<dyn Task<u32>> = Box::new(Counter { ticks: 0 });
        let mut ctx = 0;

        assert_eq!(task.tick(&mut ctx), Status::Running);
        assert_eq!(task.tick(&mut ctx), Status::Running);
        task.reset(); // default no-op must not panic
        assert_eq!(ctx, 2);
    }

    #[test]
    fn closures_are_capabilities() {
        let mut bump = |ctx: &mut u32| *ctx += 5;
        let even = |ctx: &u32| *ctx % 2 == 0;

        let mut ctx = 1;
        bump.run(&mut ctx);
        assert_eq!(ctx, 6);
        assert!(even.check(&ctx));
    }

    #[test]
    fn f32_is_its_own_delta() {
        assert_eq!(0.25f32.delta_time(), 0.25);
    }
}

//! Resumable behavior tree evaluator for frame-ticked games.
//!
//! The host ticks a [`BehaviorTree`] once per time step. Every tick walks the
//! currently active path, produces exactly one [`Status`] per control node,
//! and leaves cursors in place so long-running tasks (animations, pathing,
//! timers) resume on the next tick instead of restarting from the root.
//!
//! - **Three-valued status**: `Success`, `Running`, `Failure`
//! - **Static structure**: trees are assembled and validated once, then only
//!   cursors, selector caches and task state change
//! - **Single-threaded**: one tree is ticked from one thread at a time
//!
//! # Architecture
//!
//! - [`Task`]: Contract for leaf work, with [`Action`], [`Condition`],
//!   [`TimedAction`] and [`Activity`] as ready-made implementations
//! - [`Node`]: Control nodes (sequence, selector, priority selector, random
//!   selector) and leaf adapters
//! - [`BehaviorTree`]: Root driver cycling through its top-level children
//! - [`builder`]: Shorthand constructors

pub mod builder;
mod composite;
pub mod error;
pub mod node;
pub mod status;
pub mod task;
pub mod tasks;
pub mod tree;

// Re-export core types for ergonomic API
pub use error::BuildError;
pub use node::{Node, NodeKind};
pub use status::Status;
pub use task::{DeltaTime, Noop, Operation, Predicate, Task};
pub use tasks::{Action, Activity, Condition, TimedAction};
pub use tree::{BehaviorTree, TreeBuilder};

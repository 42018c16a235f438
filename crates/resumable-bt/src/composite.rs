//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of their children and remember
//! where they are between ticks. This module provides the ordered
//! [`Sequence`](Flow::Sequence) (AND) and [`Selector`](Flow::Selector) (OR)
//! flows, and the prioritized selector flow whose child ordering is either
//! by descending priority or a fresh random permutation per activation.

use std::cmp::Reverse;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::node::{Node, NodeKind};
use crate::Status;

/// How a composite walks its children.
pub(crate) enum Flow {
    Sequence,
    Selector,
    Prioritized(Order),
}

/// Ordering strategy of a prioritized selector.
pub(crate) enum Order {
    /// Descending priority, ties keep insertion order.
    Priority,
    /// Uniformly random permutation, redrawn on every activation.
    Shuffle(Box<StdRng>),
}

impl Order {
    pub(crate) fn shuffle_from_entropy() -> Self {
        Order::Shuffle(Box::new(StdRng::from_entropy()))
    }

    pub(crate) fn shuffle_seeded(seed: u64) -> Self {
        Order::Shuffle(Box::new(StdRng::seed_from_u64(seed)))
    }
}

/// State shared by every control node: the children it owns, the resumption
/// cursor, and (for prioritized selectors) the cached evaluation order.
pub(crate) struct Composite<C> {
    pub(crate) flow: Flow,
    pub(crate) children: Vec<Node<C>>,
    /// Index into `children`. Equal to `children.len()` once exhausted, until
    /// the next tick resets it.
    pub(crate) cursor: usize,
    /// Indices into `children`. `None` until first needed after a reset.
    pub(crate) order: Option<Vec<usize>>,
}

impl<C> Composite<C> {
    pub(crate) fn new(flow: Flow) -> Self {
        Self {
            flow,
            children: Vec::new(),
            cursor: 0,
            order: None,
        }
    }

    pub(crate) fn kind(&self) -> NodeKind {
        match self.flow {
            Flow::Sequence => NodeKind::Sequence,
            Flow::Selector => NodeKind::Selector,
            Flow::Prioritized(Order::Priority) => NodeKind::PrioritySelector,
            Flow::Prioritized(Order::Shuffle(_)) => NodeKind::RandomSelector,
        }
    }

    pub(crate) fn tick(&mut self, name: &str, ctx: &mut C) -> Status {
        match self.flow {
            Flow::Sequence => self.tick_sequence(name, ctx),
            Flow::Selector => self.tick_selector(name, ctx),
            Flow::Prioritized(_) => self.tick_prioritized(name, ctx),
        }
    }

    /// Rewinds the cursor, drops the cached order, and resets every child.
    pub(crate) fn reset(&mut self) {
        self.cursor = 0;
        self.order = None;
        for child in &mut self.children {
            child.reset();
        }
    }

    /// Logical AND over the children, one child advanced per tick.
    ///
    /// - `Running`: stay on the current child
    /// - `Failure`: rewind the cursor (descendants keep their state) and fail
    /// - `Success`: advance; succeed if that was the last child, otherwise
    ///   report `Running` and query the next child on the next tick
    ///
    /// Ticking an exhausted sequence resets it and reports `Success`.
    fn tick_sequence(&mut self, name: &str, ctx: &mut C) -> Status {
        let Some(child) = self.children.get_mut(self.cursor) else {
            tracing::trace!(node = name, "sequence exhausted, resetting");
            self.reset();
            return Status::Success;
        };

        match child.tick(ctx) {
            Status::Running => Status::Running,
            Status::Failure => {
                tracing::trace!(node = name, child = self.cursor, "sequence child failed");
                self.cursor = 0;
                Status::Failure
            }
            Status::Success => {
                self.cursor += 1;
                tracing::trace!(node = name, cursor = self.cursor, "sequence advanced");
                if self.cursor == self.children.len() {
                    Status::Success
                } else {
                    Status::Running
                }
            }
        }
    }

    /// Logical OR over the children, one child tried per tick.
    ///
    /// A failing child advances the cursor and is reported as `Running`, so
    /// the parent only sees `Failure` once every child has failed.
    fn tick_selector(&mut self, name: &str, ctx: &mut C) -> Status {
        let Some(child) = self.children.get_mut(self.cursor) else {
            tracing::trace!(node = name, "selector exhausted, resetting");
            self.reset();
            return Status::Failure;
        };

        match child.tick(ctx) {
            Status::Running => Status::Running,
            Status::Success => {
                tracing::trace!(node = name, child = self.cursor, "selector child succeeded");
                self.reset();
                Status::Success
            }
            Status::Failure => {
                self.cursor += 1;
                tracing::trace!(
                    node = name,
                    cursor = self.cursor,
                    "selector child failed, advancing"
                );
                Status::Running
            }
        }
    }

    /// Walks the cached order from the top every tick and returns the first
    /// status that is not `Failure`.
    ///
    /// There is no sticky cursor: a higher-ranked child that stops failing
    /// pre-empts a lower-ranked one that was running on the previous tick.
    fn tick_prioritized(&mut self, name: &str, ctx: &mut C) -> Status {
        let order = match self.order.take() {
            Some(order) => order,
            None => self.arrange(name),
        };

        let resolved = order.iter().find_map(|&index| {
            let status = self.children[index].tick(ctx);
            (!status.is_failure()).then_some((index, status))
        });

        match resolved {
            Some((index, Status::Running)) => {
                tracing::trace!(
                    node = name,
                    child = self.children[index].name(),
                    "prioritized child running"
                );
                self.order = Some(order);
                Status::Running
            }
            Some((index, _)) => {
                tracing::trace!(
                    node = name,
                    child = self.children[index].name(),
                    "prioritized child succeeded, resetting"
                );
                self.reset();
                Status::Success
            }
            None => {
                tracing::trace!(node = name, "all prioritized children failed, resetting");
                self.reset();
                Status::Failure
            }
        }
    }

    /// Builds the evaluation order for a prioritized selector.
    fn arrange(&mut self, name: &str) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.children.len()).collect();

        match &mut self.flow {
            Flow::Prioritized(Order::Shuffle(rng)) => {
                order.shuffle(&mut **rng);
                tracing::debug!(node = name, ?order, "drew random evaluation order");
            }
            // `sort_by_key` is stable, so equal priorities keep insertion order.
            _ => order.sort_by_key(|&index| Reverse(self.children[index].priority())),
        }

        order
    }
}

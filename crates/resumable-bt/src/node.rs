//! Tree nodes.
//!
//! A [`Node`] is either a control node (sequence, selector, priority or
//! random selector) owning an ordered list of children, or a leaf adapter
//! wrapping a single [`Task`]. Status flows bottom-up through return values;
//! nodes hold no references to their parents.

use std::fmt;

use crate::composite::{Composite, Flow, Order};
use crate::error::{BuildError, Result};
use crate::task::Task;
use crate::Status;

/// Tag identifying what a node does, for diagnostics and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Sequence,
    Selector,
    PrioritySelector,
    RandomSelector,
    Leaf,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Sequence => "sequence",
            NodeKind::Selector => "selector",
            NodeKind::PrioritySelector => "priority selector",
            NodeKind::RandomSelector => "random selector",
            NodeKind::Leaf => "leaf",
        }
    }

    /// Returns `true` for every kind that owns children.
    #[inline]
    pub fn is_composite(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) enum Body<C> {
    Leaf(Box<dyn Task<C>>),
    Composite(Composite<C>),
}

/// A node in a behavior tree.
///
/// The `name` is only used for diagnostics. The `priority` is only consulted
/// by a parent priority selector.
pub struct Node<C> {
    name: String,
    priority: i32,
    pub(crate) body: Body<C>,
}

impl<C> Node<C> {
    fn composite(name: impl Into<String>, flow: Flow) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            body: Body::Composite(Composite::new(flow)),
        }
    }

    /// Runs children in order until one fails (logical AND).
    pub fn sequence(name: impl Into<String>) -> Self {
        Self::composite(name, Flow::Sequence)
    }

    /// Runs children in order until one succeeds (logical OR).
    pub fn selector(name: impl Into<String>) -> Self {
        Self::composite(name, Flow::Selector)
    }

    /// Selector that re-checks children by descending priority every tick.
    pub fn priority_selector(name: impl Into<String>) -> Self {
        Self::composite(name, Flow::Prioritized(Order::Priority))
    }

    /// Selector that evaluates children in a random order, redrawn for every
    /// activation. Seeded from operating system entropy.
    pub fn random_selector(name: impl Into<String>) -> Self {
        Self::composite(name, Flow::Prioritized(Order::shuffle_from_entropy()))
    }

    /// Same as [`Node::random_selector`] but with a reproducible sequence of
    /// permutations.
    pub fn random_selector_seeded(name: impl Into<String>, seed: u64) -> Self {
        Self::composite(name, Flow::Prioritized(Order::shuffle_seeded(seed)))
    }

    /// Leaf adapter delegating ticks and resets to `task`.
    pub fn leaf(name: impl Into<String>, task: impl Task<C> + 'static) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            body: Body::Leaf(Box::new(task)),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Appends a child to a control node.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::LeafWithChildren`] when called on a leaf.
    pub fn add_child(&mut self, child: Node<C>) -> Result<()> {
        match &mut self.body {
            Body::Composite(composite) => {
                composite.children.push(child);
                Ok(())
            }
            Body::Leaf(_) => Err(BuildError::LeafWithChildren {
                name: self.name.clone(),
            }),
        }
    }

    /// Chaining form of [`Node::add_child`].
    pub fn with_child(mut self, child: Node<C>) -> Result<Self> {
        self.add_child(child)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn kind(&self) -> NodeKind {
        match &self.body {
            Body::Leaf(_) => NodeKind::Leaf,
            Body::Composite(composite) => composite.kind(),
        }
    }

    /// Direct children in insertion order. Empty for leaves.
    pub fn children(&self) -> &[Node<C>] {
        match &self.body {
            Body::Leaf(_) => &[],
            Body::Composite(composite) => &composite.children,
        }
    }

    /// Index of the child that will be queried on the next tick.
    ///
    /// Always `0` for leaves and prioritized selectors.
    pub fn cursor(&self) -> usize {
        match &self.body {
            Body::Leaf(_) => 0,
            Body::Composite(composite) => composite.cursor,
        }
    }

    /// Cached evaluation order of a priority or random selector, as indices
    /// into [`children`](Node::children).
    ///
    /// `None` for other kinds, and while the cache is invalidated (before the
    /// first tick of an activation).
    pub fn evaluation_order(&self) -> Option<&[usize]> {
        match &self.body {
            Body::Composite(composite) => composite.order.as_deref(),
            Body::Leaf(_) => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Evaluates this node for one tick.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        match &mut self.body {
            Body::Leaf(task) => task.tick(ctx),
            Body::Composite(composite) => composite.tick(&self.name, ctx),
        }
    }

    /// Clears all progress in this subtree: cursors return to `0`, selector
    /// caches are dropped and every task is reset.
    pub fn reset(&mut self) {
        match &mut self.body {
            Body::Leaf(task) => task.reset(),
            Body::Composite(composite) => composite.reset(),
        }
    }

    /// Checks that every control node in this subtree has children.
    pub(crate) fn validate(&self) -> Result<()> {
        match &self.body {
            Body::Leaf(_) => Ok(()),
            Body::Composite(composite) if composite.children.is_empty() => {
                Err(BuildError::EmptyComposite {
                    name: self.name.clone(),
                    kind: composite.kind(),
                })
            }
            Body::Composite(composite) => composite.children.iter().try_for_each(Node::validate),
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("name", &self.name)
            .field("kind", &self.kind())
            .field("priority", &self.priority);
        if self.kind().is_composite() {
            s.field("cursor", &self.cursor())
                .field("children", &self.children());
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Condition};

    fn noop() -> Node<()> {
        Node::leaf("noop", Action::new(|_: &mut ()| {}))
    }

    #[test]
    fn leaf_rejects_children() {
        let mut leaf = noop();
        let err = leaf.add_child(noop()).unwrap_err();

        assert_eq!(
            err,
            BuildError::LeafWithChildren {
                name: "noop".into()
            }
        );
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn validate_reports_first_empty_composite() {
        let tree = Node::sequence("root")
            .with_child(noop())
            .unwrap()
            .with_child(Node::selector("hollow"))
            .unwrap();

        assert_eq!(
            tree.validate(),
            Err(BuildError::EmptyComposite {
                name: "hollow".into(),
                kind: NodeKind::Selector,
            })
        );
    }

    #[test]
    fn empty_composites_resolve_as_exhausted() {
        let mut ctx = ();
        assert_eq!(Node::<()>::sequence("s").tick(&mut ctx), Status::Success);
        assert_eq!(Node::<()>::selector("s").tick(&mut ctx), Status::Failure);
        assert_eq!(Node::<()>::priority_selector("p").tick(&mut ctx), Status::Failure);
        assert_eq!(Node::<()>::random_selector_seeded("r", 1).tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn reset_is_full_subtree() {
        let mut inner = Node::sequence("inner");
        inner.add_child(noop()).unwrap();
        inner.add_child(noop()).unwrap();
        let mut outer = Node::sequence("outer")
            .with_child(inner)
            .unwrap()
            .with_child(Node::leaf("no", Condition::new(|_: &()| false)))
            .unwrap();
        let mut ctx = ();

        assert_eq!(outer.tick(&mut ctx), Status::Running);
        assert_eq!(outer.children()[0].cursor(), 1);

        outer.reset();
        assert_eq!(outer.cursor(), 0);
        assert_eq!(outer.children()[0].cursor(), 0);
    }

    #[test]
    fn node_count_includes_self() {
        let tree = Node::selector("root")
            .with_child(noop())
            .unwrap()
            .with_child(Node::sequence("seq").with_child(noop()).unwrap())
            .unwrap();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.kind(), NodeKind::Selector);
        assert_eq!(tree.children()[1].kind().as_str(), "sequence");
    }
}

//! Root driver.
//!
//! [`BehaviorTree`] is the entry point the host ticks once per time step. It
//! owns its top-level children, ticks the current one, and moves on to the
//! next, forever.

use crate::error::{BuildError, Result};
use crate::node::Node;
use crate::Status;

/// A validated, ready-to-tick behavior tree.
///
/// Nodes can only be added through [`TreeBuilder`], so the structure is fixed
/// before the first tick.
///
/// # Example
///
/// ```rust
/// use resumable_bt::builder::{action, condition, sequence};
/// use resumable_bt::{BehaviorTree, Status};
///
/// let root = sequence("greet", vec![
///     condition("awake", |awake: &bool| *awake),
///     action("wave", |_: &mut bool| println!("hello")),
/// ]);
/// let mut tree = BehaviorTree::new("villager", root).unwrap();
///
/// let mut awake = true;
/// assert_eq!(tree.tick(&mut awake), Status::Running);
/// ```
pub struct BehaviorTree<C> {
    name: String,
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> BehaviorTree<C> {
    /// Tree with a single entry point.
    pub fn new(name: impl Into<String>, root: Node<C>) -> Result<Self> {
        Self::builder(name).child(root).build()
    }

    pub fn builder(name: impl Into<String>) -> TreeBuilder<C> {
        TreeBuilder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Ticks the current top-level child and advances to the next one.
    ///
    /// The child's status is not acted upon. The driver never finishes, so
    /// this always returns `Running`.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.children[self.cursor].tick(ctx);
        tracing::trace!(
            tree = %self.name,
            child = self.cursor,
            %status,
            "ticked top-level child"
        );
        self.cursor = (self.cursor + 1) % self.children.len();
        Status::Running
    }

    /// Resets every node in the tree.
    pub fn reset(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.reset();
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the top-level child ticked next.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

/// Collects top-level children and validates the finished structure.
pub struct TreeBuilder<C> {
    name: String,
    children: Vec<Node<C>>,
}

impl<C> TreeBuilder<C> {
    pub fn child(mut self, node: Node<C>) -> Self {
        self.children.push(node);
        self
    }

    /// Validates the structure and produces the tree.
    ///
    /// # Errors
    ///
    /// - [`BuildError::EmptyTree`] if no top-level child was added
    /// - [`BuildError::EmptyComposite`] for the first control node (depth
    ///   first) that has no children
    pub fn build(self) -> Result<BehaviorTree<C>> {
        if self.children.is_empty() {
            return Err(BuildError::EmptyTree { name: self.name });
        }
        self.children.iter().try_for_each(Node::validate)?;

        tracing::debug!(
            tree = %self.name,
            nodes = self.children.iter().map(Node::node_count).sum::<usize>(),
            "behavior tree built"
        );

        Ok(BehaviorTree {
            name: self.name,
            children: self.children,
            cursor: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;
    use crate::builder::{action, sequence};

    #[derive(Default)]
    struct TestContext {
        visits: Vec<usize>,
    }

    fn visit(index: usize) -> Node<TestContext> {
        action(format!("visit {index}"), move |ctx: &mut TestContext| {
            ctx.visits.push(index)
        })
    }

    #[test]
    fn driver_cycles_children_forever() {
        let mut tree = BehaviorTree::builder("cycle")
            .child(visit(0))
            .child(visit(1))
            .child(visit(2))
            .build()
            .unwrap();
        let mut ctx = TestContext::default();

        for _ in 0..7 {
            assert_eq!(tree.tick(&mut ctx), Status::Running);
        }
        assert_eq!(ctx.visits, [0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(tree.cursor(), 1);
    }

    #[test]
    fn empty_tree_is_rejected() {
        let result = BehaviorTree::<TestContext>::builder("bare").build();
        assert!(matches!(result, Err(BuildError::EmptyTree { name }) if name == "bare"));
    }

    #[test]
    fn nested_empty_composite_is_rejected() {
        let root = sequence("root", vec![visit(0), Node::priority_selector("nothing")]);
        let result = BehaviorTree::new("t", root);

        assert!(matches!(
            result,
            Err(BuildError::EmptyComposite {
                kind: NodeKind::PrioritySelector,
                ..
            })
        ));
    }

    #[test]
    fn reset_rewinds_driver_and_nodes() {
        let root = sequence("root", vec![visit(0), visit(1)]);
        let mut tree = BehaviorTree::new("t", root).unwrap();
        let mut ctx = TestContext::default();

        tree.tick(&mut ctx);
        assert_eq!(tree.children()[0].cursor(), 1);

        tree.reset();
        assert_eq!(tree.children()[0].cursor(), 0);
        assert_eq!(tree.name(), "t");
    }
}

//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of creating a node and calling
//! [`Node::add_child`] for each child, you can write
//! `sequence("patrol", vec![...])`. Composites built this way are never
//! leaves, so adding their children cannot fail.

use crate::node::Node;
use crate::task::{Operation, Predicate, Task};
use crate::tasks::{Action, Condition};

fn populate<C>(mut node: Node<C>, children: Vec<Node<C>>) -> Node<C> {
    if let crate::node::Body::Composite(composite) = &mut node.body {
        composite.children.extend(children);
    }
    node
}

/// Creates a sequence node.
#[inline]
pub fn sequence<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    populate(Node::sequence(name), children)
}

/// Creates a selector node.
#[inline]
pub fn selector<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    populate(Node::selector(name), children)
}

/// Creates a priority selector node.
#[inline]
pub fn priority_selector<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    populate(Node::priority_selector(name), children)
}

/// Creates an entropy-seeded random selector node.
#[inline]
pub fn random_selector<C>(name: impl Into<String>, children: Vec<Node<C>>) -> Node<C> {
    populate(Node::random_selector(name), children)
}

/// Creates a leaf node around any task.
///
/// Shorthand for `Node::leaf(name, task)`.
#[inline]
pub fn leaf<C>(name: impl Into<String>, task: impl Task<C> + 'static) -> Node<C> {
    Node::leaf(name, task)
}

/// Creates a leaf running an [`Action`].
#[inline]
pub fn action<C, O>(name: impl Into<String>, operation: O) -> Node<C>
where
    O: Operation<C> + 'static,
{
    Node::leaf(name, Action::new(operation))
}

/// Creates a leaf checking a [`Condition`].
#[inline]
pub fn condition<C, P>(name: impl Into<String>, predicate: P) -> Node<C>
where
    P: Predicate<C> + 'static,
{
    Node::leaf(name, Condition::new(predicate))
}

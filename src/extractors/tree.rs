// src/extractors/tree.rs
use crate::extractors::Heading;
use serde::Serialize;

/// A heading together with the headings nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub heading: Heading,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(heading: Heading) -> Self {
        Self { heading, children: Vec::new() }
    }
}

/// Moves the top of `stack` into its parent (the next node down) or into `roots`.
fn close_top(stack: &mut Vec<Node>, roots: &mut Vec<Node>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// Builds the heading forest from headings in document order.
///
/// The stack holds the currently open nodes. A node is attached to its parent
/// when it is closed, which happens in document order, so children keep the
/// order in which their headings appeared.
pub fn build_tree(headings: &[Heading]) -> Vec<Node> {
    let mut roots = Vec::new();
    let mut stack: Vec<Node> = Vec::new();

    for heading in headings {
        while stack
            .last()
            .is_some_and(|open| open.heading.level >= heading.level)
        {
            close_top(&mut stack, &mut roots);
        }
        stack.push(Node::new(heading.clone()));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    tracing::debug!("Built heading tree with {} roots", roots.len());
    roots
}

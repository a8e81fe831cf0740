use crate::ast::{Node, NodeId};
use crate::environment::Environment;

/// Read-only view of the environment handed to every rule
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub environment: &'a Environment,
}

impl<'a> ValidationContext<'a> {
    pub fn new(environment: &'a Environment) -> Self {
        Self { environment }
    }

    pub fn node(&self, id: NodeId) -> Option<&'a Node> {
        self.environment.node(id)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<&'a Node> {
        self.environment
            .parent_of(id)
            .and_then(|parent| self.environment.node(parent))
    }

    // Helper methods for common operations
    pub fn name_of(&self, id: NodeId) -> Option<&'a str> {
        self.node(id).and_then(Node::name)
    }

    /// sentences of a `Body` node, empty for anything else
    pub fn sentences(&self, body: NodeId) -> &'a [NodeId] {
        match self.node(body) {
            Some(Node::Body(body)) => &body.sentences,
            _ => &[],
        }
    }

    /// members of the node enclosing `id`
    pub fn siblings(&self, id: NodeId) -> &'a [NodeId] {
        self.parent_of(id).map(Node::members).unwrap_or(&[])
    }
}

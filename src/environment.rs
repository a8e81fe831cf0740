use crate::LinkError;
use crate::ast::*;
use log::debug;

/// A fully linked program: the node arena, the root node and the parent index.
///
/// Nodes are never mutated once linked, so an `Environment` can be shared freely between
/// concurrent validations.
#[derive(Debug, Clone)]
pub struct Environment {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    spans: Vec<Option<SourceSpan>>,
    root: NodeId,
}

impl Environment {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// the structural parent of a node, `None` for the root and for ids outside this environment
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    pub fn span_of(&self, id: NodeId) -> Option<SourceSpan> {
        self.spans.get(id.0).copied().flatten()
    }

    /// parent, grandparent and so on up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent_of(id), move |current| self.parent_of(*current))
    }

    /// pre-order walk of `target` and every node below it, children in declaration order
    pub fn descendants(&self, target: NodeId) -> Descendants<'_> {
        let stack = if self.contains(target) { vec![target] } else { Vec::new() };
        Descendants { environment: self, stack }
    }

    /// folds over `target`'s subtree, visiting every node exactly once in `descendants` order
    pub fn reduce<T, F>(&self, target: NodeId, init: T, mut f: F) -> T
    where
        F: FnMut(T, NodeId, &Node) -> T,
    {
        self.descendants(target).fold(init, |acc, id| match self.node(id) {
            Some(node) => f(acc, id, node),
            None => acc,
        })
    }
}

pub struct Descendants<'a> {
    environment: &'a Environment,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.environment.node(id) {
            self.stack.extend(node.children().into_iter().rev());
        }
        Some(id)
    }
}

/// Allocates nodes bottom-up and links them into an `Environment`.
///
/// Children must be created before the node that holds them, the returned ids are then passed
/// to the parent's constructor.
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    nodes: Vec<Node>,
    spans: Vec<Option<SourceSpan>>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.spans.push(None);
        id
    }

    /// attaches source position metadata to an already allocated node
    pub fn at(&mut self, id: NodeId, span: SourceSpan) -> NodeId {
        if let Some(slot) = self.spans.get_mut(id.0) {
            *slot = Some(span);
        }
        id
    }

    pub fn package(&mut self, name: &str, imports: Vec<NodeId>, members: Vec<NodeId>) -> NodeId {
        self.add(Node::Package(Package { name: name.to_string(), imports, members }))
    }

    pub fn program(&mut self, name: &str, body: NodeId) -> NodeId {
        self.add(Node::Program(Program { name: name.to_string(), body }))
    }

    pub fn test(&mut self, name: &str, body: NodeId) -> NodeId {
        self.add(Node::Test(Test { name: name.to_string(), body }))
    }

    pub fn describe(&mut self, name: &str, members: Vec<NodeId>) -> NodeId {
        self.add(Node::Describe(Describe { name: name.to_string(), members }))
    }

    pub fn class(&mut self, name: &str, superclass: Option<NodeId>, members: Vec<NodeId>) -> NodeId {
        self.add(Node::Class(Class {
            name: name.to_string(),
            superclass,
            mixins: Vec::new(),
            members,
        }))
    }

    pub fn mixin(&mut self, name: &str, members: Vec<NodeId>) -> NodeId {
        self.add(Node::Mixin(Mixin { name: name.to_string(), mixins: Vec::new(), members }))
    }

    pub fn singleton(&mut self, name: Option<&str>, members: Vec<NodeId>) -> NodeId {
        self.add(Node::Singleton(Singleton {
            name: name.map(str::to_string),
            superclass: None,
            mixins: Vec::new(),
            members,
        }))
    }

    pub fn field(&mut self, name: &str, value: Option<NodeId>) -> NodeId {
        self.add(Node::Field(Field { name: name.to_string(), is_read_only: false, value }))
    }

    pub fn method(&mut self, name: &str, parameters: Vec<NodeId>, body: Option<NodeId>) -> NodeId {
        self.add(Node::Method(Method {
            name: name.to_string(),
            is_override: false,
            is_native: false,
            parameters,
            body,
        }))
    }

    pub fn constructor(&mut self, parameters: Vec<NodeId>, body: NodeId) -> NodeId {
        self.add(Node::Constructor(Constructor { parameters, base_call: None, body }))
    }

    pub fn parameter(&mut self, name: &str) -> NodeId {
        self.add(Node::Parameter(Parameter { name: name.to_string(), is_var_arg: false }))
    }

    pub fn var_arg(&mut self, name: &str) -> NodeId {
        self.add(Node::Parameter(Parameter { name: name.to_string(), is_var_arg: true }))
    }

    pub fn variable(&mut self, name: &str, value: Option<NodeId>) -> NodeId {
        self.add(Node::Variable(Variable { name: name.to_string(), is_read_only: false, value }))
    }

    pub fn reference(&mut self, name: &str) -> NodeId {
        self.add(Node::Reference(Reference { name: name.to_string() }))
    }

    pub fn assignment(&mut self, reference: NodeId, value: NodeId) -> NodeId {
        self.add(Node::Assignment(Assignment { reference, value }))
    }

    pub fn try_(&mut self, body: NodeId, catches: Vec<NodeId>, always: NodeId) -> NodeId {
        self.add(Node::Try(Try { body, catches, always }))
    }

    pub fn catch(&mut self, parameter: NodeId, body: NodeId) -> NodeId {
        self.add(Node::Catch(Catch { parameter, parameter_type: None, body }))
    }

    pub fn import(&mut self, reference: NodeId) -> NodeId {
        self.add(Node::Import(Import { reference, is_generic: false }))
    }

    pub fn send(&mut self, receiver: NodeId, message: &str, args: Vec<NodeId>) -> NodeId {
        self.add(Node::Send(Send { receiver, message: message.to_string(), args }))
    }

    pub fn super_call(&mut self, args: Vec<NodeId>) -> NodeId {
        self.add(Node::Super(Super { args }))
    }

    pub fn self_ref(&mut self) -> NodeId {
        self.add(Node::SelfRef)
    }

    pub fn new_instance(&mut self, instantiated: NodeId, args: Vec<NodeId>) -> NodeId {
        self.add(Node::New(New { instantiated, args }))
    }

    pub fn literal(&mut self, value: LiteralValue) -> NodeId {
        self.add(Node::Literal(Literal { value }))
    }

    pub fn if_(&mut self, condition: NodeId, then_body: NodeId, else_body: NodeId) -> NodeId {
        self.add(Node::If(If { condition, then_body, else_body }))
    }

    pub fn throw(&mut self, arg: NodeId) -> NodeId {
        self.add(Node::Throw(Throw { arg }))
    }

    pub fn return_(&mut self, value: Option<NodeId>) -> NodeId {
        self.add(Node::Return(Return { value }))
    }

    pub fn body(&mut self, sentences: Vec<NodeId>) -> NodeId {
        self.add(Node::Body(Body { sentences }))
    }

    /// Adds the `Environment` root holding `members` and computes the parent index.
    ///
    /// Every allocated node must be reachable from the root through exactly one parent.
    pub fn link(mut self, members: Vec<NodeId>) -> Result<Environment, LinkError> {
        let root = self.add(Node::Environment(EnvironmentRoot { members }));
        let len = self.nodes.len();
        let mut parents: Vec<Option<NodeId>> = vec![None; len];

        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            for child in self.nodes[id.0].children() {
                if child.0 >= len {
                    return Err(LinkError::UnknownNode { node: child, parent: id });
                }
                if child == root || parents[child.0].is_some() {
                    return Err(LinkError::MultipleParents { node: child });
                }
                parents[child.0] = Some(id);
                pending.push(child);
            }
        }

        if let Some(orphan) = (0..len).map(NodeId).find(|id| *id != root && parents[id.0].is_none()) {
            return Err(LinkError::Unreachable { node: orphan });
        }

        debug!("linked environment with {} nodes", len);

        Ok(Environment {
            nodes: self.nodes,
            parents,
            spans: self.spans,
            root,
        })
    }
}

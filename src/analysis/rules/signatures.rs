//! Overload ambiguity between methods and between constructors.
//!
//! A vararg absorbs zero or more trailing arguments, so a member whose last parameter is a
//! vararg accepts any call with at least as many arguments as it declares parameters. Two
//! members are ambiguous when a single call site could reach either of them.

use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::analysis::rules::parameters::is_var_arg;
use crate::ast::{Node, NodeId};

/// The parts of a method or constructor that decide which calls it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub parameters: usize,
    pub ends_in_var_arg: bool,
}

impl Arity {
    pub fn of(ctx: &ValidationContext, parameters: &[NodeId]) -> Self {
        Self {
            parameters: parameters.len(),
            ends_in_var_arg: parameters.last().is_some_and(|last| is_var_arg(ctx, *last)),
        }
    }
}

/// Whether every call declaring `a`'s parameters is also a legal call of `b`
pub fn can_be_called_with_args(a: Arity, b: Arity) -> bool {
    (b.ends_in_var_arg && a.parameters >= b.parameters) || a.parameters == b.parameters
}

/// Ambiguity in either direction
pub fn conflicting(a: Arity, b: Arity) -> bool {
    can_be_called_with_args(a, b) || can_be_called_with_args(b, a)
}

fn method_signature<'a>(ctx: &ValidationContext<'a>, id: NodeId) -> Option<(&'a str, Arity)> {
    match ctx.node(id) {
        Some(Node::Method(method)) => Some((method.name.as_str(), Arity::of(ctx, &method.parameters))),
        _ => None,
    }
}

fn constructor_arity(ctx: &ValidationContext, id: NodeId) -> Option<Arity> {
    match ctx.node(id) {
        Some(Node::Constructor(constructor)) => Some(Arity::of(ctx, &constructor.parameters)),
        _ => None,
    }
}

/// Pairs of distinct methods among `members` that share a name and are ambiguous
pub fn conflicting_methods(ctx: &ValidationContext, members: &[NodeId]) -> Vec<(NodeId, NodeId)> {
    let methods: Vec<_> = members
        .iter()
        .filter_map(|id| method_signature(ctx, *id).map(|signature| (*id, signature)))
        .collect();

    let mut conflicts = Vec::new();
    for (i, (id, (name, arity))) in methods.iter().enumerate() {
        for (other, (other_name, other_arity)) in &methods[i + 1..] {
            if name == other_name && conflicting(*arity, *other_arity) {
                conflicts.push((*id, *other));
            }
        }
    }
    conflicts
}

pub struct MethodsHaveDistinctSignaturesRule;

impl SemanticRule for MethodsHaveDistinctSignaturesRule {
    fn id(&self) -> &'static str {
        "methodsHaveDistinctSignatures"
    }

    fn description(&self) -> &'static str {
        "A class cannot declare two methods with the same name that accept the same calls"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Class(class)) = ctx.node(node) else {
            return true;
        };

        conflicting_methods(ctx, &class.members).is_empty()
    }
}

pub struct ConstructorsHaveDistinctArityRule;

impl SemanticRule for ConstructorsHaveDistinctArityRule {
    fn id(&self) -> &'static str {
        "constructorsHaveDistinctArity"
    }

    fn description(&self) -> &'static str {
        "Constructors of a class cannot accept the same calls"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(arity) = constructor_arity(ctx, node) else {
            return true;
        };

        ctx.siblings(node)
            .iter()
            .filter(|other| **other != node)
            .filter_map(|other| constructor_arity(ctx, *other))
            .all(|other| !conflicting(arity, other))
    }
}

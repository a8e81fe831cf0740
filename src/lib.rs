//! Semantic validation of linked Wollok programs.
//!
//! Given an [`Environment`] produced by the linker, the [`Validator`] walks a subtree and reports
//! every style and correctness [`Problem`] it finds. Nothing in the environment is ever modified.

use thiserror::Error;

pub mod analysis;
pub mod ast;
pub mod environment;

pub use analysis::config::ValidatorConfig;
pub use analysis::problem::{Level, Problem};
pub use analysis::{Validator, validate};
pub use ast::{Node, NodeId, NodeKind};
pub use environment::{Environment, EnvironmentBuilder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("node {node} referenced by {parent} does not exist")]
    UnknownNode { node: NodeId, parent: NodeId },
    #[error("node {node} has more than one parent")]
    MultipleParents { node: NodeId },
    #[error("node {node} is not reachable from the environment root")]
    Unreachable { node: NodeId },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("node {0} does not belong to the environment")]
    UnknownNode(NodeId),
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("Failed to link the environment: {0}")]
    Link(#[from] LinkError),
    #[error("Validation could not run: {0}")]
    Validation(#[from] ValidationError),
}

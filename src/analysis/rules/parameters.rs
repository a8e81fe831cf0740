use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::ast::{Node, NodeId};

pub fn is_var_arg(ctx: &ValidationContext, parameter: NodeId) -> bool {
    matches!(ctx.node(parameter), Some(Node::Parameter(p)) if p.is_var_arg)
}

pub struct OnlyLastParameterIsVarArgRule;

impl SemanticRule for OnlyLastParameterIsVarArgRule {
    fn id(&self) -> &'static str {
        "onlyLastParameterIsVarArg"
    }

    fn description(&self) -> &'static str {
        "Only the last parameter of a method can be a vararg"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Method(method)) = ctx.node(node) else {
            return true;
        };

        // the first vararg found must be the last parameter, so a second one always fails
        match method.parameters.iter().position(|p| is_var_arg(ctx, *p)) {
            Some(index) => index + 1 == method.parameters.len(),
            None => true,
        }
    }
}

use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::ast::NodeId;

pub trait SemanticRule: Send + Sync {
    // Unique identifier for this rule, reported as the problem code
    fn id(&self) -> &'static str;

    // Short description of what this rule checks
    fn description(&self) -> &'static str;

    // Level of the problem reported when the rule fails
    fn severity(&self) -> Level;

    // Whether the node is valid according to this rule. Nodes of kinds the rule does not
    // handle are valid.
    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool;

    // Optional: whether this rule is enabled by default
    fn enabled_by_default(&self) -> bool {
        true
    }
}

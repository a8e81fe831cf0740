pub mod entities;
pub mod members;
pub mod naming;
pub mod parameters;
pub mod signatures;
pub mod statements;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::context::ValidationContext;
    use crate::analysis::rule::SemanticRule;
    use crate::ast::NodeId;
    use crate::environment::{Environment, EnvironmentBuilder};

    pub fn holds(rule: &dyn SemanticRule, env: &Environment, node: NodeId) -> bool {
        rule.is_valid(&ValidationContext::new(env), node)
    }

    /// links `members` inside a single package named `p`
    pub fn in_package(mut b: EnvironmentBuilder, members: Vec<NodeId>) -> Environment {
        let p = b.package("p", vec![], members);
        b.link(vec![p]).unwrap()
    }
}

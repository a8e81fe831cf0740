use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::ast::{Node, NodeId};

pub struct HasCatchOrAlwaysRule;

impl SemanticRule for HasCatchOrAlwaysRule {
    fn id(&self) -> &'static str {
        "hasCatchOrAlways"
    }

    fn description(&self) -> &'static str {
        "A try needs at least one catch or a non empty always block"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Try(try_node)) = ctx.node(node) else {
            return true;
        };

        // grouping is `catches || (always && body)`
        !try_node.catches.is_empty()
            || (!ctx.sentences(try_node.always).is_empty() && !ctx.sentences(try_node.body).is_empty())
    }
}

pub struct NonAsignationOfFullyQualifiedReferencesRule;

impl SemanticRule for NonAsignationOfFullyQualifiedReferencesRule {
    fn id(&self) -> &'static str {
        "nonAsignationOfFullyQualifiedReferences"
    }

    fn description(&self) -> &'static str {
        "Fully qualified references cannot be assigned"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Assignment(assignment)) = ctx.node(node) else {
            return true;
        };

        !ctx.name_of(assignment.reference).is_some_and(|name| name.contains('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules::test_support::{holds, in_package};
    use crate::environment::EnvironmentBuilder;

    #[test]
    fn test_has_catch_or_always() {
        let mut b = EnvironmentBuilder::new();

        let x = b.reference("x");
        let body = b.body(vec![x]);
        let always = b.body(vec![]);
        let bare = b.try_(body, vec![], always);

        let x = b.reference("x");
        let body = b.body(vec![x]);
        let e = b.parameter("e");
        let h = b.reference("h");
        let handler = b.body(vec![h]);
        let catch = b.catch(e, handler);
        let always = b.body(vec![]);
        let with_catch = b.try_(body, vec![catch], always);

        let x = b.reference("x");
        let body = b.body(vec![x]);
        let a = b.reference("a");
        let always = b.body(vec![a]);
        let with_always = b.try_(body, vec![], always);

        let outer = b.body(vec![bare, with_catch, with_always]);
        let program = b.program("main", outer);
        let env = in_package(b, vec![program]);

        assert!(!holds(&HasCatchOrAlwaysRule, &env, bare));
        assert!(holds(&HasCatchOrAlwaysRule, &env, with_catch));
        assert!(holds(&HasCatchOrAlwaysRule, &env, with_always));
    }

    #[test]
    fn test_always_with_empty_body_is_not_enough() {
        let mut b = EnvironmentBuilder::new();
        let body = b.body(vec![]);
        let a = b.reference("a");
        let always = b.body(vec![a]);
        let empty_try = b.try_(body, vec![], always);
        let outer = b.body(vec![empty_try]);
        let program = b.program("main", outer);
        let env = in_package(b, vec![program]);

        assert!(!holds(&HasCatchOrAlwaysRule, &env, empty_try));
    }

    #[test]
    fn test_non_asignation_of_fully_qualified_references() {
        let mut b = EnvironmentBuilder::new();
        let fa = b.field("a", None);
        let fb = b.field("b", None);
        let target = b.reference("p.C");
        let value = b.reference("a");
        let qualified = b.assignment(target, value);
        let target = b.reference("a");
        let value = b.reference("b");
        let local = b.assignment(target, value);
        let body = b.body(vec![qualified, local]);
        let m = b.method("m", vec![], Some(body));
        let c = b.class("C", None, vec![fa, fb, m]);
        let env = in_package(b, vec![c]);

        assert!(!holds(&NonAsignationOfFullyQualifiedReferencesRule, &env, qualified));
        assert!(holds(&NonAsignationOfFullyQualifiedReferencesRule, &env, local));
    }
}

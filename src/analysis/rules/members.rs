use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::ast::{Node, NodeId};

pub struct FieldNameDifferentFromTheMethodsRule;

impl SemanticRule for FieldNameDifferentFromTheMethodsRule {
    fn id(&self) -> &'static str {
        "fieldNameDifferentFromTheMethods"
    }

    fn description(&self) -> &'static str {
        "A field cannot be named like a method of the same class"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Field(field)) = ctx.node(node) else {
            return true;
        };

        ctx.siblings(node).iter().all(|member| match ctx.node(*member) {
            Some(Node::Method(method)) => method.name != field.name,
            _ => true,
        })
    }
}

pub struct MethodNotOnlyCallToSuperRule;

impl SemanticRule for MethodNotOnlyCallToSuperRule {
    fn id(&self) -> &'static str {
        "methodNotOnlyCallToSuper"
    }

    fn description(&self) -> &'static str {
        "A method should do more than delegate to its super implementation"
    }

    fn severity(&self) -> Level {
        Level::Warning
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Method(method)) = ctx.node(node) else {
            return true;
        };
        // abstract and native methods
        let Some(body) = method.body else {
            return true;
        };

        !matches!(
            ctx.sentences(body),
            [only] if matches!(ctx.node(*only), Some(Node::Super(_)))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules::test_support::{holds, in_package};
    use crate::environment::EnvironmentBuilder;

    #[test]
    fn test_field_name_different_from_the_methods() {
        let mut b = EnvironmentBuilder::new();
        let clashing = b.field("m", None);
        let fine = b.field("a", None);
        let body = b.body(vec![]);
        let m = b.method("m", vec![], Some(body));
        let c = b.class("c", None, vec![clashing, fine, m]);
        let env = in_package(b, vec![c]);

        assert!(!holds(&FieldNameDifferentFromTheMethodsRule, &env, clashing));
        assert!(holds(&FieldNameDifferentFromTheMethodsRule, &env, fine));
    }

    #[test]
    fn test_fields_in_named_objects() {
        let mut b = EnvironmentBuilder::new();
        let energy = b.field("energy", None);
        let m = b.method("energy", vec![], None);
        let pepita = b.singleton(Some("pepita"), vec![energy, m]);
        let env = in_package(b, vec![pepita]);

        assert!(!holds(&FieldNameDifferentFromTheMethodsRule, &env, energy));
    }

    #[test]
    fn test_method_not_only_call_to_super() {
        let mut b = EnvironmentBuilder::new();
        let body = b.body(vec![]);
        let m = b.method("m", vec![], Some(body));
        let c = b.class("C", None, vec![m]);

        let super_call = b.super_call(vec![]);
        let body = b.body(vec![super_call]);
        let only_super = b.method("m", vec![], Some(body));
        let superclass = b.reference("C");
        let c2 = b.class("C2", Some(superclass), vec![only_super]);

        let super_call = b.super_call(vec![]);
        let x = b.reference("x");
        let body = b.body(vec![super_call, x]);
        let more = b.method("n", vec![], Some(body));
        let c3 = b.class("C3", None, vec![more]);

        let env = in_package(b, vec![c, c2, c3]);

        assert!(holds(&MethodNotOnlyCallToSuperRule, &env, m));
        assert!(!holds(&MethodNotOnlyCallToSuperRule, &env, only_super));
        assert!(holds(&MethodNotOnlyCallToSuperRule, &env, more));
    }

    #[test]
    fn test_abstract_method() {
        let mut b = EnvironmentBuilder::new();
        let m = b.method("m", vec![], None);
        let c = b.class("C", None, vec![m]);
        let env = in_package(b, vec![c]);

        assert!(holds(&MethodNotOnlyCallToSuperRule, &env, m));
    }
}

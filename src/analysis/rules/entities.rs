use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::ast::{Node, NodeId};

pub struct SingletonIsNotUnnamedRule;

impl SemanticRule for SingletonIsNotUnnamedRule {
    fn id(&self) -> &'static str {
        "singletonIsNotUnnamed"
    }

    fn description(&self) -> &'static str {
        "Objects declared directly in a package must have a name"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Singleton(singleton)) = ctx.node(node) else {
            return true;
        };

        !matches!(ctx.parent_of(node), Some(Node::Package(_))) || singleton.name.is_some()
    }
}

pub struct ImportHasNotLocalReferenceRule;

impl SemanticRule for ImportHasNotLocalReferenceRule {
    fn id(&self) -> &'static str {
        "importHasNotLocalReference"
    }

    fn description(&self) -> &'static str {
        "A package cannot import a name it declares itself"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        let Some(Node::Import(import)) = ctx.node(node) else {
            return true;
        };
        let Some(imported) = ctx.name_of(import.reference) else {
            return true;
        };

        ctx.siblings(node)
            .iter()
            .all(|member| ctx.name_of(*member) != Some(imported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules::test_support::{holds, in_package};
    use crate::ast::LiteralValue;
    use crate::environment::EnvironmentBuilder;

    #[test]
    fn test_unnamed_singleton() {
        let mut b = EnvironmentBuilder::new();
        let anonymous = b.singleton(None, vec![]);
        let named = b.singleton(Some("s"), vec![]);
        let env = in_package(b, vec![anonymous, named]);

        assert!(!holds(&SingletonIsNotUnnamedRule, &env, anonymous));
        assert!(holds(&SingletonIsNotUnnamedRule, &env, named));
    }

    #[test]
    fn test_object_literal_can_be_unnamed() {
        let mut b = EnvironmentBuilder::new();
        let anonymous = b.singleton(None, vec![]);
        let literal = b.literal(LiteralValue::Object(anonymous));
        let variable = b.variable("x", Some(literal));
        let body = b.body(vec![variable]);
        let program = b.program("main", body);
        let env = in_package(b, vec![program]);

        assert!(holds(&SingletonIsNotUnnamedRule, &env, anonymous));
    }

    #[test]
    fn test_import_has_not_local_reference() {
        let mut b = EnvironmentBuilder::new();
        let local = b.reference("c");
        let import_local = b.import(local);
        let remote = b.reference("other.d");
        let import_remote = b.import(remote);
        let c = b.package("c", vec![], vec![]);
        let p = b.package("p", vec![import_local, import_remote], vec![c]);
        let env = b.link(vec![p]).unwrap();

        assert!(!holds(&ImportHasNotLocalReferenceRule, &env, import_local));
        assert!(holds(&ImportHasNotLocalReferenceRule, &env, import_remote));
    }
}

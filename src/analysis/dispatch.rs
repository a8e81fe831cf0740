//! Which rules apply to which node kind.
//!
//! The match below has no wildcard arm: a new `NodeKind` does not compile until it is given an
//! entry here, even if that entry is empty. Rules run in the listed order.

use crate::ast::NodeKind;

pub fn rules_for(kind: NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Parameter => &["nameIsCamelCase"],
        NodeKind::Import => &["importHasNotLocalReference"],
        NodeKind::Body => &[],
        NodeKind::Catch => &[],
        NodeKind::Package => &[],
        NodeKind::Program => &[],
        NodeKind::Test => &[],
        NodeKind::Class => &["nameIsPascalCase", "methodsHaveDistinctSignatures"],
        NodeKind::Singleton => &["nameIsCamelCase", "singletonIsNotUnnamed"],
        NodeKind::Mixin => &["nameIsPascalCase"],
        NodeKind::Constructor => &["constructorsHaveDistinctArity"],
        NodeKind::Field => &["fieldNameDifferentFromTheMethods"],
        NodeKind::Method => &[
            "onlyLastParameterIsVarArg",
            "nameIsNotKeyword",
            "methodNotOnlyCallToSuper",
        ],
        NodeKind::Variable => &["nameIsCamelCase", "nameIsNotKeyword"],
        NodeKind::Return => &[],
        NodeKind::Assignment => &["nonAsignationOfFullyQualifiedReferences"],
        NodeKind::Reference => &["nameIsNotKeyword"],
        NodeKind::SelfRef => &[],
        NodeKind::New => &[],
        NodeKind::Literal => &[],
        NodeKind::Send => &[],
        NodeKind::Super => &[],
        NodeKind::If => &[],
        NodeKind::Throw => &[],
        NodeKind::Try => &["hasCatchOrAlways"],
        NodeKind::Environment => &[],
        NodeKind::Describe => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rule_registry::RuleRegistry;
    use std::collections::HashSet;

    #[test]
    fn test_every_dispatched_rule_is_registered() {
        let registry = RuleRegistry::standard();
        for kind in NodeKind::ALL {
            for code in rules_for(kind) {
                assert!(registry.get_rule(code).is_some(), "{kind} dispatches unknown rule {code}");
            }
        }
    }

    #[test]
    fn test_every_registered_rule_is_dispatched() {
        let dispatched: HashSet<_> = NodeKind::ALL
            .iter()
            .flat_map(|kind| rules_for(*kind).iter().copied())
            .collect();
        for rule in RuleRegistry::standard().get_all_rules() {
            assert!(dispatched.contains(rule.id()), "{} is never dispatched", rule.id());
        }
    }

    #[test]
    fn test_no_duplicates_within_a_kind() {
        for kind in NodeKind::ALL {
            let codes = rules_for(kind);
            let unique: HashSet<_> = codes.iter().collect();
            assert_eq!(unique.len(), codes.len(), "{kind} lists a rule twice");
        }
    }

    #[test]
    fn test_method_rule_order() {
        assert_eq!(
            rules_for(NodeKind::Method),
            &["onlyLastParameterIsVarArg", "nameIsNotKeyword", "methodNotOnlyCallToSuper"]
        );
        assert!(rules_for(NodeKind::Environment).is_empty());
    }
}

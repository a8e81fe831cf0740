use crate::analysis::context::ValidationContext;
use crate::analysis::problem::Level;
use crate::analysis::rule::SemanticRule;
use crate::ast::{Node, NodeId};

/// Words and tokens that can never be used as a name. Punctuation is part of the set.
pub const KEYWORDS: &[&str] = &[
    ".", ",", "(", ")", ";", "_", "{", "}",
    "import", "package", "program", "test", "mixed with", "class", "inherits", "object", "mixin",
    "var", "const", "=", "override", "method", "native", "constructor",
    "self", "super", "new", "if", "else", "return", "throw", "try", "then always", "catch", ":", "+",
    "null", "false", "true", "=>",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

// Only the first character is inspected
fn starts_with(name: Option<&str>, predicate: fn(&char) -> bool) -> bool {
    name.and_then(|name| name.chars().next())
        .is_some_and(|first| predicate(&first))
}

pub struct NameIsPascalCaseRule;

impl SemanticRule for NameIsPascalCaseRule {
    fn id(&self) -> &'static str {
        "nameIsPascalCase"
    }

    fn description(&self) -> &'static str {
        "Class and mixin names start with an uppercase letter"
    }

    fn severity(&self) -> Level {
        Level::Warning
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        match ctx.node(node) {
            Some(Node::Class(class)) => starts_with(Some(class.name.as_str()), char::is_ascii_uppercase),
            Some(Node::Mixin(mixin)) => starts_with(Some(mixin.name.as_str()), char::is_ascii_uppercase),
            _ => true,
        }
    }
}

pub struct NameIsCamelCaseRule;

impl SemanticRule for NameIsCamelCaseRule {
    fn id(&self) -> &'static str {
        "nameIsCamelCase"
    }

    fn description(&self) -> &'static str {
        "Parameter, variable and object names are defined and start with a lowercase letter"
    }

    fn severity(&self) -> Level {
        Level::Warning
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        match ctx.node(node) {
            Some(
                named @ (Node::Parameter(_) | Node::Singleton(_) | Node::Variable(_)),
            ) => starts_with(named.name(), char::is_ascii_lowercase),
            _ => true,
        }
    }
}

pub struct NameIsNotKeywordRule;

impl SemanticRule for NameIsNotKeywordRule {
    fn id(&self) -> &'static str {
        "nameIsNotKeyword"
    }

    fn description(&self) -> &'static str {
        "References, methods and variables are not named after a reserved word"
    }

    fn severity(&self) -> Level {
        Level::Error
    }

    fn is_valid(&self, ctx: &ValidationContext, node: NodeId) -> bool {
        match ctx.node(node) {
            Some(Node::Reference(reference)) => !is_keyword(&reference.name),
            Some(Node::Method(method)) => !is_keyword(&method.name),
            Some(Node::Variable(variable)) => !is_keyword(&variable.name),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules::test_support::{holds, in_package};
    use crate::environment::EnvironmentBuilder;
    use rstest::rstest;

    #[test]
    fn test_name_is_pascal_case() {
        let mut b = EnvironmentBuilder::new();
        let lower = b.class("c", None, vec![]);
        let upper = b.class("C", None, vec![]);
        let mixin = b.mixin("m", vec![]);
        let env = in_package(b, vec![lower, upper, mixin]);

        assert!(!holds(&NameIsPascalCaseRule, &env, lower));
        assert!(holds(&NameIsPascalCaseRule, &env, upper));
        assert!(!holds(&NameIsPascalCaseRule, &env, mixin));
    }

    #[test]
    fn test_name_is_camel_case() {
        let mut b = EnvironmentBuilder::new();
        let upper = b.parameter("C");
        let lower = b.parameter("k");
        let m = b.method("m", vec![upper, lower], None);
        let c = b.class("C", None, vec![m]);
        let env = in_package(b, vec![c]);

        assert!(!holds(&NameIsCamelCaseRule, &env, upper));
        assert!(holds(&NameIsCamelCaseRule, &env, lower));
    }

    #[test]
    fn test_only_first_character_is_checked() {
        let mut b = EnvironmentBuilder::new();
        let mixed = b.variable("aBCDE", None);
        let snake = b.variable("my_var", None);
        let pascal = b.class("CLASS_name", None, vec![]);
        let body = b.body(vec![mixed, snake]);
        let program = b.program("main", body);
        let env = in_package(b, vec![pascal, program]);

        assert!(holds(&NameIsCamelCaseRule, &env, mixed));
        assert!(holds(&NameIsCamelCaseRule, &env, snake));
        assert!(holds(&NameIsPascalCaseRule, &env, pascal));
    }

    #[test]
    fn test_unnamed_singleton_is_not_camel_case() {
        let mut b = EnvironmentBuilder::new();
        let anonymous = b.singleton(None, vec![]);
        let named = b.singleton(Some("pepita"), vec![]);
        let env = in_package(b, vec![anonymous, named]);

        assert!(!holds(&NameIsCamelCaseRule, &env, anonymous));
        assert!(holds(&NameIsCamelCaseRule, &env, named));
    }

    #[test]
    fn test_name_is_not_keyword_reference() {
        let mut b = EnvironmentBuilder::new();
        let keyword = b.reference("program");
        let plain = b.reference("C");
        let c = b.class("C", Some(keyword), vec![]);
        let c2 = b.class("C2", Some(plain), vec![]);
        let env = in_package(b, vec![c, c2]);

        assert!(!holds(&NameIsNotKeywordRule, &env, keyword));
        assert!(holds(&NameIsNotKeywordRule, &env, plain));
    }

    #[rstest]
    #[case(".")]
    #[case("_")]
    #[case("mixed with")]
    #[case("then always")]
    #[case("constructor")]
    #[case("=>")]
    #[case("null")]
    fn test_reserved_words(#[case] name: &str) {
        assert!(is_keyword(name));
    }

    #[rstest]
    #[case("mixed")]
    #[case("always")]
    #[case("while")]
    #[case("Self")]
    fn test_non_reserved_words(#[case] name: &str) {
        assert!(!is_keyword(name));
    }

    #[test]
    fn test_keyword_method_and_variable() {
        let mut b = EnvironmentBuilder::new();
        let variable = b.variable("return", None);
        let body = b.body(vec![variable]);
        let method = b.method("if", vec![], Some(body));
        let c = b.class("C", None, vec![method]);
        let env = in_package(b, vec![c]);

        assert!(!holds(&NameIsNotKeywordRule, &env, method));
        assert!(!holds(&NameIsNotKeywordRule, &env, variable));
        assert!(holds(&NameIsNotKeywordRule, &env, c));
    }
}

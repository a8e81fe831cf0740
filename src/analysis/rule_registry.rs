use crate::analysis::rule::SemanticRule;
use crate::analysis::rules::entities::{ImportHasNotLocalReferenceRule, SingletonIsNotUnnamedRule};
use crate::analysis::rules::members::{FieldNameDifferentFromTheMethodsRule, MethodNotOnlyCallToSuperRule};
use crate::analysis::rules::naming::{NameIsCamelCaseRule, NameIsNotKeywordRule, NameIsPascalCaseRule};
use crate::analysis::rules::parameters::OnlyLastParameterIsVarArgRule;
use crate::analysis::rules::signatures::{
    ConstructorsHaveDistinctArityRule, MethodsHaveDistinctSignaturesRule,
};
use crate::analysis::rules::statements::{
    HasCatchOrAlwaysRule, NonAsignationOfFullyQualifiedReferencesRule,
};
use std::collections::HashMap;

/// Rules by id, iterated in registration order
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn SemanticRule>>,
    index: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// registry holding the whole built-in catalog
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(NameIsPascalCaseRule);
        registry.register(NameIsCamelCaseRule);
        registry.register(OnlyLastParameterIsVarArgRule);
        registry.register(NameIsNotKeywordRule);
        registry.register(HasCatchOrAlwaysRule);
        registry.register(SingletonIsNotUnnamedRule);
        registry.register(ImportHasNotLocalReferenceRule);
        registry.register(NonAsignationOfFullyQualifiedReferencesRule);
        registry.register(FieldNameDifferentFromTheMethodsRule);
        registry.register(MethodsHaveDistinctSignaturesRule);
        registry.register(ConstructorsHaveDistinctArityRule);
        registry.register(MethodNotOnlyCallToSuperRule);

        registry
    }

    /// registering an id twice replaces the previous rule in place
    pub fn register<R: SemanticRule + 'static>(&mut self, rule: R) {
        let rule_id = rule.id();
        match self.index.get(rule_id) {
            Some(&position) => self.rules[position] = Box::new(rule),
            None => {
                self.index.insert(rule_id, self.rules.len());
                self.rules.push(Box::new(rule));
            }
        }
    }

    pub fn get_rule(&self, rule_id: &str) -> Option<&dyn SemanticRule> {
        self.index.get(rule_id).map(|&position| self.rules[position].as_ref())
    }

    pub fn get_all_rules(&self) -> Vec<&dyn SemanticRule> {
        self.rules.iter().map(|r| r.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

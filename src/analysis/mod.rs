pub mod config;
pub mod context;
pub mod dispatch;
pub mod problem;
pub mod rule;
pub mod rule_registry;
pub mod rules;

use crate::ValidationError;
use crate::analysis::config::ValidatorConfig;
use crate::analysis::context::ValidationContext;
use crate::analysis::dispatch::rules_for;
use crate::analysis::problem::{Level, Problem, ProblemCollector};
use crate::analysis::rule::SemanticRule;
use crate::analysis::rule_registry::RuleRegistry;
use crate::ast::{Node, NodeId};
use crate::environment::Environment;
use log::{debug, trace, warn};

pub struct Validator {
    rule_registry: RuleRegistry,
    config: ValidatorConfig,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        let rule_registry = RuleRegistry::standard();

        for rule_id in &config.disabled_rules {
            if rule_registry.get_rule(rule_id).is_none() {
                warn!("ignoring unknown rule '{}' in disabled rules", rule_id);
            }
        }

        Self {
            rule_registry,
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Checks `target` and everything below it.
    ///
    /// Problems come out in pre-order traversal order and, within a node, in dispatch table
    /// order. Every rule of every node runs, earlier failures never stop the walk.
    pub fn validate(
        &self,
        environment: &Environment,
        target: NodeId,
    ) -> Result<Vec<Problem>, ValidationError> {
        if !environment.contains(target) {
            return Err(ValidationError::UnknownNode(target));
        }

        let ctx = ValidationContext::new(environment);
        let found = environment.reduce(target, ProblemCollector::new(), |mut found, id, node| {
            self.check_node(&ctx, id, node, &mut found);
            found
        });

        debug!(
            "validated {}: {} errors, {} warnings",
            target,
            found.errors().count(),
            found.warnings().count()
        );

        Ok(found.into_problems())
    }

    /// Runs a single rule on a single node, whatever the dispatch table says about its kind
    pub fn check(
        &self,
        environment: &Environment,
        rule_id: &str,
        node: NodeId,
    ) -> Result<Option<Problem>, ValidationError> {
        let rule = self
            .rule_registry
            .get_rule(rule_id)
            .ok_or_else(|| ValidationError::UnknownRule(rule_id.to_string()))?;
        if !environment.contains(node) {
            return Err(ValidationError::UnknownNode(node));
        }

        Ok(self.evaluate(rule, &ValidationContext::new(environment), node))
    }

    // Method to get all available rules
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str, Level)> {
        self.rule_registry
            .get_all_rules()
            .iter()
            .map(|rule| (rule.id(), rule.description(), rule.severity()))
            .collect()
    }

    fn check_node(&self, ctx: &ValidationContext, id: NodeId, node: &Node, found: &mut ProblemCollector) {
        for rule_id in rules_for(node.kind()) {
            if !self.config.is_rule_enabled(rule_id) {
                continue;
            }
            let Some(rule) = self.rule_registry.get_rule(rule_id) else {
                continue;
            };
            if !rule.enabled_by_default() {
                continue;
            }

            if let Some(problem) = self.evaluate(rule, ctx, id) {
                trace!("{} failed on {} {}", problem.code, node.kind(), id);
                found.add(problem);
            }
        }
    }

    fn evaluate(&self, rule: &dyn SemanticRule, ctx: &ValidationContext, node: NodeId) -> Option<Problem> {
        if rule.is_valid(ctx, node) {
            return None;
        }

        let level = match rule.severity() {
            Level::Warning if self.config.warnings_as_errors => Level::Error,
            level => level,
        };

        Some(Problem {
            code: rule.id(),
            level,
            node,
        })
    }
}

/// Validates `target` with every built-in rule enabled
pub fn validate(environment: &Environment, target: NodeId) -> Result<Vec<Problem>, ValidationError> {
    Validator::new().validate(environment, target)
}

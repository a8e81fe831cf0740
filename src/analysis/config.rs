use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub disabled_rules: HashSet<String>,
    pub warnings_as_errors: bool,
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable(mut self, rule_id: &str) -> Self {
        self.disabled_rules.insert(rule_id.to_string());
        self
    }

    pub fn warnings_as_errors(mut self, enabled: bool) -> Self {
        self.warnings_as_errors = enabled;
        self
    }

    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new()
            .disable("nameIsCamelCase")
            .warnings_as_errors(true);
        assert!(!config.is_rule_enabled("nameIsCamelCase"));
        assert!(config.is_rule_enabled("nameIsPascalCase"));
        assert!(config.warnings_as_errors);
        assert_eq!(ValidatorConfig::default().disabled_rules.len(), 0);
    }
}

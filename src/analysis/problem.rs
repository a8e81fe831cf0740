use crate::ast::NodeId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => f.write_str("Warning"),
            Level::Error => f.write_str("Error"),
        }
    }
}

/// One failed rule on one node. Messages and source positions are resolved by the consumer
/// from `code` and `node`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Problem {
    pub code: &'static str,
    pub level: Level,
    pub node: NodeId,
}

impl Problem {
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.level, self.code, self.node)
    }
}

/// Keeps problems in the order they were reported
#[derive(Debug, Default)]
pub struct ProblemCollector {
    problems: Vec<Problem>,
}

impl ProblemCollector {
    pub fn new() -> Self {
        Self { problems: Vec::new() }
    }

    pub fn add(&mut self, problem: Problem) {
        self.problems.push(problem);
    }

    pub fn report(&mut self, code: &'static str, level: Level, node: NodeId) {
        self.add(Problem { code, level, node });
    }

    pub fn report_error(&mut self, code: &'static str, node: NodeId) {
        self.report(code, Level::Error, node);
    }

    pub fn report_warning(&mut self, code: &'static str, node: NodeId) {
        self.report(code, Level::Warning, node);
    }

    pub fn has_errors(&self) -> bool {
        self.problems.iter().any(Problem::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|p| p.level == Level::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter().filter(|p| p.level == Level::Warning)
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}

//! Visibility rules.

use core::fmt;
use std::sync::Arc;

/// A predicate evaluated every time a rule node is resolved.
pub type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Decides whether a rule node shows its child.
#[derive(Clone)]
pub enum Rule {
    Simple(Predicate),
    Not(Box<Rule>),
    /// Holds if every rule holds; an empty list holds.
    All(Vec<Rule>),
    /// Holds if at least one rule holds; an empty list does not.
    Any(Vec<Rule>),
}

impl Rule {
    pub fn simple<F>(predicate: F) -> Rule
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Rule::Simple(Arc::new(predicate))
    }

    /// A rule with a fixed outcome.
    pub fn constant(value: bool) -> Rule {
        Rule::simple(move || value)
    }

    pub fn not(rule: Rule) -> Rule {
        Rule::Not(Box::new(rule))
    }

    pub fn evaluate(&self) -> bool {
        match self {
            Rule::Simple(predicate) => predicate(),
            Rule::Not(rule) => !rule.evaluate(),
            Rule::All(rules) => rules.iter().all(Rule::evaluate),
            Rule::Any(rules) => rules.iter().any(Rule::evaluate),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rule::Simple(_) => write!(f, "Simple(..)"),
            Rule::Not(rule) => f.debug_tuple("Not").field(rule).finish(),
            Rule::All(rules) => f.debug_tuple("All").field(rules).finish(),
            Rule::Any(rules) => f.debug_tuple("Any").field(rules).finish(),
        }
    }
}

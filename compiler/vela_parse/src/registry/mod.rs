//! Rule dispatch keyed by leading-token text.

use rustc_hash::FxHashMap;
use tracing::trace;

use vela_diagnostic::DiagnosticSink;
use vela_ir::Token;

use crate::{FunctionRule, ParseRule};

/// The set of registered grammar rules.
///
/// A closed-but-extensible dispatch table: each rule with a
/// [`leading_keyword`](ParseRule::leading_keyword) is indexed by that
/// keyword's text, so whole sequences route to the right rule in one map
/// lookup. Sub-rules reached only by delegation (like
/// [`ParamsRule`](crate::ParamsRule)) are not dispatched from here.
pub struct RuleSet {
    rules: Vec<Box<dyn ParseRule>>,
    by_keyword: FxHashMap<&'static str, usize>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        RuleSet {
            rules: Vec::new(),
            by_keyword: FxHashMap::default(),
        }
    }

    /// The rule set for the grammar as it stands today.
    pub fn standard() -> Self {
        let mut set = RuleSet::new();
        set.register(Box::new(FunctionRule));
        set
    }

    /// Register a rule, indexing it by its leading keyword if it has one.
    ///
    /// A later registration for the same keyword wins.
    pub fn register(&mut self, rule: Box<dyn ParseRule>) {
        if let Some(keyword) = rule.leading_keyword() {
            self.by_keyword.insert(keyword, self.rules.len());
        }
        self.rules.push(rule);
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the rule whose leading keyword matches the first token.
    pub fn rule_for(&self, tokens: &[Token]) -> Option<&dyn ParseRule> {
        let first = tokens.first()?;
        let index = *self.by_keyword.get(first.text.as_str())?;
        Some(self.rules[index].as_ref())
    }

    /// Dispatch a sequence through the two-phase contract.
    ///
    /// Routes to the rule for the leading token, gates through
    /// `matches`, then runs `is_proper`. A sequence no rule claims is
    /// rejected without a report — near-misses are not this table's call.
    pub fn validate(&self, tokens: &[Token], sink: &mut dyn DiagnosticSink) -> bool {
        let Some(rule) = self.rule_for(tokens) else {
            trace!("no rule claims the leading token");
            return false;
        };
        trace!(rule = rule.name(), "dispatch");
        rule.matches(tokens, sink) && rule.is_proper(tokens, sink)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new()
    }
}

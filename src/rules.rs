//! Rewrite rules from dictionary IPA to Portuguese spelling
//!
//! The table is an ordered list, not a map. Rules are applied one after the
//! other as global literal replacements, so a later rule sees the output of
//! every earlier one. Multi-letter sounds that have a Portuguese equivalent
//! are parked behind placeholder tokens (`$1`, `$2`, ...) until the
//! single-letter rules have run, which stops chains like `zh → j → dj` or
//! `au̇ → au → éu` from happening.
//!
//! # Phases
//!
//! 1. [`RulePhase::Placeholder`] - multi-letter sounds with a native equivalent, to a token
//! 2. [`RulePhase::Approximation`] - multi-letter sounds without one, straight to text
//! 3. [`RulePhase::SingleSound`] - single-letter sounds
//! 4. [`RulePhase::Resolution`] - tokens to their final spelling
//! 5. [`RulePhase::Cleanup`] - stress marks and empty parentheses removed

/// The stage of the pipeline a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RulePhase {
    /// Multi-letter sound rewritten to a reserved placeholder token
    Placeholder,
    /// Multi-letter sound with no Portuguese counterpart, rewritten to a rough approximation
    Approximation,
    /// Single-letter sound
    SingleSound,
    /// Placeholder token rewritten to its final Portuguese form
    Resolution,
    /// Removal of markers that carry no sound
    Cleanup,
}

/// A single literal substitution in the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    /// Text to look for
    pub pattern: &'static str,
    /// Text every occurrence of `pattern` is replaced with
    pub replacement: &'static str,
    /// Pipeline stage
    pub phase: RulePhase,
}

impl RewriteRule {
    pub const fn new(phase: RulePhase, pattern: &'static str, replacement: &'static str) -> Self {
        RewriteRule {
            pattern,
            replacement,
            phase,
        }
    }

    /// Replace every occurrence of the pattern in `text`
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.pattern, self.replacement)
    }

    /// Whether this rule introduces a placeholder token
    pub fn is_placeholder(&self) -> bool {
        self.phase == RulePhase::Placeholder
    }
}

use RulePhase::*;

/// Primary stress mark
pub const PRIMARY_STRESS: char = '\u{2c8}';

/// Secondary stress mark
pub const SECONDARY_STRESS: char = '\u{2cc}';

/// The full rule table, in application order
pub const REWRITE_RULES: &[RewriteRule] = &[
    // Multi-letter sounds that exist in Portuguese
    RewriteRule::new(Placeholder, "au\u{307}", "$1"),
    RewriteRule::new(Placeholder, "ch", "$2"),
    RewriteRule::new(Placeholder, "sh", "$3"),
    RewriteRule::new(Placeholder, "zh", "$4"),
    // Multi-letter sounds that don't: "thing" -> "fing", "this" -> "dis"
    RewriteRule::new(Approximation, "th", "f"),
    RewriteRule::new(Approximation, "t\u{35f}h", "d"),
    // Single-letter sounds
    RewriteRule::new(SingleSound, "a", "é"),
    RewriteRule::new(SingleSound, "\u{e4}", "ó"),
    RewriteRule::new(SingleSound, "\u{101}", "ê"),
    RewriteRule::new(SingleSound, "\u{259}", "ã"),
    RewriteRule::new(SingleSound, "\u{1d4a}", "(ã)"),
    RewriteRule::new(SingleSound, "\u{113}", "íi"),
    RewriteRule::new(SingleSound, "\u{12b}", "ai"),
    RewriteRule::new(SingleSound, "\u{22f}", "ó"),
    RewriteRule::new(SingleSound, "\u{14d}", "ou"),
    RewriteRule::new(SingleSound, "\u{153}", "ou"),
    RewriteRule::new(SingleSound, "u\u{307}", "u"),
    RewriteRule::new(SingleSound, "\u{fc}", "úu"),
    RewriteRule::new(SingleSound, "j", "dj"),
    RewriteRule::new(SingleSound, "\u{14b}", "nh"),
    RewriteRule::new(SingleSound, "\u{207f}", "n"),
    RewriteRule::new(SingleSound, "(t)", ""),
    RewriteRule::new(SingleSound, "w", "u"),
    RewriteRule::new(SingleSound, "y", "i"),
    // Placeholders back to real text
    RewriteRule::new(Resolution, "$1", "au"),
    RewriteRule::new(Resolution, "$2", "tch"),
    RewriteRule::new(Resolution, "$3", "x"),
    RewriteRule::new(Resolution, "$4", "j"),
    // Stress is read off the syllables before transliteration, so the marks can go.
    // Words like "haha" start with "(ˈ)", which leaves "()" behind.
    RewriteRule::new(Cleanup, "\u{2c8}", ""),
    RewriteRule::new(Cleanup, "\u{2cc}", ""),
    RewriteRule::new(Cleanup, "()", ""),
];

/// Iterate the rules of one phase, in table order
pub fn rules_in_phase(phase: RulePhase) -> impl Iterator<Item = &'static RewriteRule> {
    REWRITE_RULES.iter().filter(move |rule| rule.phase == phase)
}

/// The final text a placeholder token resolves to, if `token` is one
pub fn resolve_placeholder(token: &str) -> Option<&'static str> {
    rules_in_phase(Resolution)
        .find(|rule| rule.pattern == token)
        .map(|rule| rule.replacement)
}

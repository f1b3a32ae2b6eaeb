//! Rhetorical pattern catalog and the rule table that selects from it.
//!
//! Selection is a flat list of `(predicate, patterns)` rules evaluated
//! independently; every rule that fires contributes its pair. When nothing
//! fires the fallback pair is returned, so the result is never empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::thresholds::{
    DISCIPLINE_PATTERN_TRIGGER, NOVELTY_PATTERN_TRIGGER, REACTIVITY_PATTERN_TRIGGER,
    STRUCTURE_PATTERN_TRIGGER,
};
use super::vector::PersonalityVector;

// ============================================================================
// Catalog
// ============================================================================

/// The eight named language techniques the prompt can ask for.
///
/// Ordering follows the catalog, which also fixes iteration order of a
/// [`PatternSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RhetoricalPattern {
    MindReading,
    EmbeddedCommand,
    Presupposition,
    DoubleBind,
    SelectionalRestrictionViolation,
    PhonologicalAmbiguity,
    TagQuestion,
    ConversationalPostulate,
}

/// A selection of patterns in catalog order.
pub type PatternSet = BTreeSet<RhetoricalPattern>;

impl RhetoricalPattern {
    /// Full catalog in canonical order.
    pub const ALL: [RhetoricalPattern; 8] = [
        Self::MindReading,
        Self::EmbeddedCommand,
        Self::Presupposition,
        Self::DoubleBind,
        Self::SelectionalRestrictionViolation,
        Self::PhonologicalAmbiguity,
        Self::TagQuestion,
        Self::ConversationalPostulate,
    ];

    /// Human-readable name, as rendered into prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MindReading => "Mind Reading",
            Self::EmbeddedCommand => "Embedded Commands",
            Self::Presupposition => "Presuppositions",
            Self::DoubleBind => "Double Binds",
            Self::SelectionalRestrictionViolation => "Selectional Restriction Violation",
            Self::PhonologicalAmbiguity => "Phonological Ambiguity",
            Self::TagQuestion => "Tag Questions",
            Self::ConversationalPostulate => "Conversational Postulate",
        }
    }

    /// Short illustration of the technique.
    pub fn example(&self) -> &'static str {
        match self {
            Self::MindReading => "I know you're wondering...",
            Self::EmbeddedCommand => "...and you can begin to relax...",
            Self::Presupposition => "As you notice your insight growing...",
            Self::DoubleBind => "Would you like to learn quickly or deeply?",
            Self::SelectionalRestrictionViolation => "Even the quiet room remembers.",
            Self::PhonologicalAmbiguity => "You can hear / here, now.",
            Self::TagQuestion => "...isn't it?",
            Self::ConversationalPostulate => "Can you picture how that settles?",
        }
    }
}

impl fmt::Display for RhetoricalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Rule table
// ============================================================================

/// One selection rule: when `predicate` holds, `patterns` are added.
#[derive(Clone, Copy)]
pub struct PatternRule {
    /// Stable identifier, for logs and tests.
    pub name: &'static str,
    pub predicate: fn(&PersonalityVector) -> bool,
    pub patterns: [RhetoricalPattern; 2],
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("patterns", &self.patterns)
            .finish()
    }
}

impl PatternRule {
    pub fn fires(&self, v: &PersonalityVector) -> bool {
        (self.predicate)(v)
    }
}

fn high_novelty(v: &PersonalityVector) -> bool {
    v.novelty > NOVELTY_PATTERN_TRIGGER
}

fn high_reactivity(v: &PersonalityVector) -> bool {
    v.reactivity > REACTIVITY_PATTERN_TRIGGER
}

fn high_discipline(v: &PersonalityVector) -> bool {
    v.discipline > DISCIPLINE_PATTERN_TRIGGER
}

fn low_structure(v: &PersonalityVector) -> bool {
    v.structure < STRUCTURE_PATTERN_TRIGGER
}

/// The selection rules, evaluated in order.
pub static PATTERN_RULES: [PatternRule; 4] = [
    PatternRule {
        name: "high_novelty",
        predicate: high_novelty,
        patterns: [RhetoricalPattern::MindReading, RhetoricalPattern::Presupposition],
    },
    PatternRule {
        name: "high_reactivity",
        predicate: high_reactivity,
        patterns: [RhetoricalPattern::EmbeddedCommand, RhetoricalPattern::DoubleBind],
    },
    PatternRule {
        name: "high_discipline",
        predicate: high_discipline,
        patterns: [
            RhetoricalPattern::TagQuestion,
            RhetoricalPattern::ConversationalPostulate,
        ],
    },
    PatternRule {
        name: "low_structure",
        predicate: low_structure,
        patterns: [
            RhetoricalPattern::SelectionalRestrictionViolation,
            RhetoricalPattern::PhonologicalAmbiguity,
        ],
    },
];

/// Returned when no rule fires.
pub const FALLBACK_PATTERNS: [RhetoricalPattern; 2] = [
    RhetoricalPattern::Presupposition,
    RhetoricalPattern::ConversationalPostulate,
];

/// Rules that fire for `v`, in table order.
pub fn fired_rules(v: &PersonalityVector) -> Vec<&'static PatternRule> {
    PATTERN_RULES.iter().filter(|r| r.fires(v)).collect()
}

/// Accumulate the patterns of every firing rule; never empty.
pub fn select_patterns(v: &PersonalityVector) -> PatternSet {
    let selected: PatternSet = fired_rules(v)
        .into_iter()
        .flat_map(|r| r.patterns)
        .collect();
    if selected.is_empty() {
        FALLBACK_PATTERNS.into_iter().collect()
    } else {
        selected
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use RhetoricalPattern::*;

    fn set(patterns: &[RhetoricalPattern]) -> PatternSet {
        patterns.iter().copied().collect()
    }

    #[test]
    fn test_initial_vector_takes_fallback() {
        let got = select_patterns(&PersonalityVector::INITIAL);
        assert_eq!(got, set(&[Presupposition, ConversationalPostulate]));
        assert!(fired_rules(&PersonalityVector::INITIAL).is_empty());
    }

    #[test]
    fn test_all_high_fires_three_rules() {
        let got = select_patterns(&PersonalityVector::uniform(0.8));
        assert_eq!(
            got,
            set(&[
                MindReading,
                Presupposition,
                EmbeddedCommand,
                DoubleBind,
                TagQuestion,
                ConversationalPostulate,
            ])
        );
        assert!(!got.contains(&SelectionalRestrictionViolation));
        assert!(!got.contains(&PhonologicalAmbiguity));
    }

    #[test]
    fn test_all_low_only_structure_rule() {
        let got = select_patterns(&PersonalityVector::uniform(0.1));
        assert_eq!(got, set(&[SelectionalRestrictionViolation, PhonologicalAmbiguity]));
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let base = PersonalityVector::INITIAL;
        let cases = [
            (PersonalityVector { novelty: 0.61, ..base }, "high_novelty"),
            (PersonalityVector { reactivity: 0.51, ..base }, "high_reactivity"),
            (PersonalityVector { discipline: 0.61, ..base }, "high_discipline"),
            (PersonalityVector { structure: 0.39, ..base }, "low_structure"),
        ];
        for (v, expected) in cases {
            let fired: Vec<_> = fired_rules(&v).iter().map(|r| r.name).collect();
            assert_eq!(fired, [expected], "vector {}", v);
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        let v = PersonalityVector::new(0.6, 0.6, 0.5, 0.4);
        assert!(fired_rules(&v).is_empty());
        assert_eq!(select_patterns(&v), set(&FALLBACK_PATTERNS));
    }

    #[test]
    fn test_never_empty_over_grid() {
        let steps = [0.0, 0.25, 0.4, 0.5, 0.6, 0.75, 1.0];
        for &d in &steps {
            for &n in &steps {
                for &r in &steps {
                    for &s in &steps {
                        let v = PersonalityVector::new(d, n, r, s);
                        assert!(!select_patterns(&v).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_overlapping_rules_do_not_duplicate() {
        // Both fallback patterns arrive through real rules here; no duplicates.
        let v = PersonalityVector::new(0.9, 0.9, 0.1, 0.9);
        let got = select_patterns(&v);
        assert_eq!(got.len(), 4);
        assert!(got.contains(&Presupposition));
    }

    #[test]
    fn test_kebab_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&SelectionalRestrictionViolation).unwrap(),
            "\"selectional-restriction-violation\""
        );
        let p: RhetoricalPattern = serde_json::from_str("\"mind-reading\"").unwrap();
        assert_eq!(p, MindReading);
    }

    #[test]
    fn test_catalog_covers_every_rule_pattern() {
        for rule in &PATTERN_RULES {
            for p in rule.patterns {
                assert!(RhetoricalPattern::ALL.contains(&p));
            }
        }
        assert_eq!(RhetoricalPattern::ALL.len(), 8);
    }
}

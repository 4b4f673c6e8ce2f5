//! Abstract Syntax Tree types for attribute-value tests.

use std::fmt::{self, Display};

use crate::error::{AstError, AstResult};
use crate::formatter;
use crate::traits::{AttributeTest, ValueTest};

// =============================================================================
// Negation
// =============================================================================

/// Whether a condition clause tests for presence or absence.
///
/// The only transition is `Affirmed -> Negated`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Negation {
    /// The attribute/value combination must be present.
    #[default]
    Affirmed,
    /// The attribute/value combination must be absent: `-^attr value`
    Negated,
}

impl Negation {
    /// Returns true for [`Negation::Negated`].
    pub fn is_negated(self) -> bool {
        matches!(self, Negation::Negated)
    }
}

impl Display for Negation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Negation::Affirmed => Ok(()),
            Negation::Negated => write!(f, "-"),
        }
    }
}

// =============================================================================
// Attribute-value test
// =============================================================================

/// One attribute-value clause of a production's condition side.
///
/// Both sequences are disjunctions: the clause matches when any attribute
/// test matches together with any value test. Order carries no matching
/// meaning but is kept for stable rendering.
///
/// Example (Soar source and its rendering):
///
/// ```text
/// -^color << red blue >>      ->  -{[color], [<< red blue >>]}
/// ```
///
/// The node accepts every state a parser can leave it in, including empty
/// sequences; use [`check_complete`](Self::check_complete) once the clause has
/// been fully recognised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeValueTest<A, V> {
    /// Whole-clause negation.
    #[cfg_attr(feature = "serde", serde(default))]
    negation: Negation,

    /// Alternative attribute tests, in insertion order.
    #[cfg_attr(feature = "serde", serde(default = "Vec::new"))]
    attribute_tests: Vec<A>,

    /// Alternative value tests, in insertion order.
    #[cfg_attr(feature = "serde", serde(default = "Vec::new"))]
    value_tests: Vec<V>,
}

impl<A, V> Default for AttributeValueTest<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, V> AttributeValueTest<A, V> {
    /// Creates an empty, affirmed clause.
    pub fn new() -> Self {
        Self {
            negation: Negation::Affirmed,
            attribute_tests: Vec::new(),
            value_tests: Vec::new(),
        }
    }

    /// Marks the whole clause as negated. Calling it again has no effect.
    pub fn negate(&mut self) {
        self.negation = Negation::Negated;
    }

    /// Appends an alternative attribute test.
    pub fn add_attribute_test(&mut self, test: A) {
        self.attribute_tests.push(test);
    }

    /// Appends an alternative value test.
    pub fn add_value_test(&mut self, test: V) {
        self.value_tests.push(test);
    }

    /// Appends several attribute tests, keeping their order.
    pub fn extend_attribute_tests(&mut self, tests: impl IntoIterator<Item = A>) {
        self.attribute_tests.extend(tests);
    }

    /// Appends several value tests, keeping their order.
    pub fn extend_value_tests(&mut self, tests: impl IntoIterator<Item = V>) {
        self.value_tests.extend(tests);
    }

    /// The attribute tests added so far.
    pub fn attribute_tests(&self) -> &[A] {
        &self.attribute_tests
    }

    /// The value tests added so far.
    pub fn value_tests(&self) -> &[V] {
        &self.value_tests
    }

    /// Returns true once [`negate`](Self::negate) has been called.
    pub fn is_negated(&self) -> bool {
        self.negation.is_negated()
    }

    /// Current negation state.
    pub fn negation(&self) -> Negation {
        self.negation
    }

    /// Checks that both sides of the clause have at least one test.
    ///
    /// Never called by the node itself.
    pub fn check_complete(&self) -> AstResult<()> {
        match (self.attribute_tests.len(), self.value_tests.len()) {
            (0, 0) => Err(AstError::EmptyClause),
            (0, value_tests) => Err(AstError::MissingAttributeTests { value_tests }),
            (attribute_tests, 0) => Err(AstError::MissingValueTests { attribute_tests }),
            _ => Ok(()),
        }
    }

    /// Consumes the clause, handing its parts to the caller.
    pub fn into_parts(self) -> (Negation, Vec<A>, Vec<V>) {
        (self.negation, self.attribute_tests, self.value_tests)
    }
}

impl<A: AttributeTest, V: ValueTest> AttributeValueTest<A, V> {
    /// Renders the clause as `[attrs], [values]`, or `-{[attrs], [values]}`
    /// when negated. Always reflects the current contents.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<A: AttributeTest, V: ValueTest> Display for AttributeValueTest<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter::write_clause(
            f,
            self.is_negated(),
            &self.attribute_tests,
            &self.value_tests,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Clause = AttributeValueTest<&'static str, &'static str>;

    fn sample() -> Clause {
        let mut avt = Clause::new();
        avt.add_attribute_test("foo");
        avt.add_attribute_test("bar");
        avt.add_value_test("1");
        avt
    }

    #[test]
    fn test_new_is_empty_and_affirmed() {
        let avt = Clause::new();
        assert!(!avt.is_negated());
        assert_eq!(avt.negation(), Negation::Affirmed);
        assert!(avt.attribute_tests().is_empty());
        assert!(avt.value_tests().is_empty());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Clause::default(), Clause::new());
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(Clause::new().to_string(), "[], []");
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "[foo, bar], [1]");
    }

    #[test]
    fn test_negated_display() {
        let mut avt = sample();
        avt.negate();
        assert_eq!(avt.to_string(), "-{[foo, bar], [1]}");
    }

    #[test]
    fn test_render_matches_display() {
        let avt = sample();
        assert_eq!(avt.render(), avt.to_string());
    }

    #[test]
    fn test_negate_is_idempotent() {
        let mut avt = sample();
        for _ in 0..5 {
            avt.negate();
        }
        assert!(avt.is_negated());
        assert_eq!(avt.render(), "-{[foo, bar], [1]}");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut avt = Clause::new();
        avt.add_attribute_test("name");
        avt.add_attribute_test("name");
        avt.add_value_test("x");
        avt.add_value_test("x");
        assert_eq!(avt.attribute_tests(), &["name", "name"]);
        assert_eq!(avt.value_tests(), &["x", "x"]);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut avt = Clause::new();
        avt.add_attribute_test("a");
        avt.extend_attribute_tests(["b", "c"]);
        avt.extend_value_tests(vec!["1", "2"]);
        avt.add_value_test("3");
        assert_eq!(avt.render(), "[a, b, c], [1, 2, 3]");
    }

    #[test]
    fn test_sides_are_independent() {
        let mut avt = Clause::new();
        avt.add_value_test("1");
        avt.add_value_test("2");
        assert_eq!(avt.render(), "[], [1, 2]");
    }

    #[test]
    fn test_check_complete() {
        assert_eq!(Clause::new().check_complete(), Err(AstError::EmptyClause));

        let mut avt = Clause::new();
        avt.add_value_test("1");
        assert_eq!(
            avt.check_complete(),
            Err(AstError::MissingAttributeTests { value_tests: 1 })
        );

        let mut avt = Clause::new();
        avt.extend_attribute_tests(["a", "b"]);
        assert_eq!(
            avt.check_complete(),
            Err(AstError::MissingValueTests { attribute_tests: 2 })
        );

        assert_eq!(sample().check_complete(), Ok(()));
    }

    #[test]
    fn test_check_complete_leaves_node_untouched() {
        let avt = Clause::new();
        let _ = avt.check_complete();
        assert_eq!(avt.render(), "[], []");
    }

    #[test]
    fn test_into_parts() {
        let mut avt = sample();
        avt.negate();
        let (negation, attributes, values) = avt.into_parts();
        assert_eq!(negation, Negation::Negated);
        assert_eq!(attributes, vec!["foo", "bar"]);
        assert_eq!(values, vec!["1"]);
    }

    #[test]
    fn test_negation_display() {
        assert_eq!(Negation::Affirmed.to_string(), "");
        assert_eq!(Negation::Negated.to_string(), "-");
    }
}

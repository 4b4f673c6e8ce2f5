//! Error types for clause completeness checks.

use thiserror::Error;

/// Reasons an attribute-value test is not yet a complete condition clause.
///
/// The node itself never produces these while it is being built; they are
/// only returned by the opt-in completeness checks used by semantic checkers
/// once parsing of the clause has finished.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// The clause has value tests but no attribute test.
    #[error("attribute-value test has no attribute test ({value_tests} value tests)")]
    MissingAttributeTests {
        /// Number of value tests present.
        value_tests: usize,
    },

    /// The clause has attribute tests but no value test.
    #[error("attribute-value test has no value test ({attribute_tests} attribute tests)")]
    MissingValueTests {
        /// Number of attribute tests present.
        attribute_tests: usize,
    },

    /// Neither side of the clause has been populated.
    #[error("empty attribute-value test")]
    EmptyClause,
}

/// Result type for AST checks.
pub type AstResult<T> = std::result::Result<T, AstError>;

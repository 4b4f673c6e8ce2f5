//! Fluent builder for attribute-value tests.
//!
//! Parsers usually drive [`AttributeValueTest`] directly with `&mut` calls as
//! tokens arrive. When a clause is assembled in one go (tests, code
//! generators, desugaring passes) the builder reads better:
//!
//! ```rust
//! use soar_ast::AttributeValueTestBuilder;
//!
//! let avt = AttributeValueTestBuilder::new()
//!     .negated()
//!     .attribute("color")
//!     .values(["red", "blue"])
//!     .build();
//!
//! assert_eq!(avt.render(), "-{[color], [red, blue]}");
//! ```

use crate::ast::AttributeValueTest;
use crate::error::AstResult;

/// Builder for [`AttributeValueTest`].
#[derive(Debug, Clone)]
pub struct AttributeValueTestBuilder<A, V> {
    inner: AttributeValueTest<A, V>,
}

impl<A, V> Default for AttributeValueTestBuilder<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, V> AttributeValueTestBuilder<A, V> {
    /// Create a builder for an empty, affirmed clause.
    pub fn new() -> Self {
        Self {
            inner: AttributeValueTest::new(),
        }
    }

    /// Negate the clause.
    pub fn negated(mut self) -> Self {
        self.inner.negate();
        self
    }

    /// Add an attribute test.
    pub fn attribute(mut self, test: A) -> Self {
        self.inner.add_attribute_test(test);
        self
    }

    /// Add several attribute tests.
    pub fn attributes(mut self, tests: impl IntoIterator<Item = A>) -> Self {
        self.inner.extend_attribute_tests(tests);
        self
    }

    /// Add a value test.
    pub fn value(mut self, test: V) -> Self {
        self.inner.add_value_test(test);
        self
    }

    /// Add several value tests.
    pub fn values(mut self, tests: impl IntoIterator<Item = V>) -> Self {
        self.inner.extend_value_tests(tests);
        self
    }

    /// Build the clause as-is, even if one side is still empty.
    pub fn build(self) -> AttributeValueTest<A, V> {
        self.inner
    }

    /// Build the clause, failing if either side is empty.
    pub fn build_complete(self) -> AstResult<AttributeValueTest<A, V>> {
        self.inner.check_complete()?;
        Ok(self.inner)
    }
}

impl<A, V> From<AttributeValueTestBuilder<A, V>> for AttributeValueTest<A, V> {
    fn from(builder: AttributeValueTestBuilder<A, V>) -> Self {
        builder.build()
    }
}

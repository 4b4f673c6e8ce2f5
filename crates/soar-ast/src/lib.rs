//! # soar-ast
//!
//! AST support for the condition side of Soar productions, centred on the
//! **attribute-value test**: the `^attribute value` clause that pairs a
//! disjunction of attribute tests with a disjunction of value tests and may
//! be negated as a whole.
//!
//! ```text
//! (state <s> ^color << red blue >> -^size large)
//!            ^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^
//!            affirmed clause       negated clause
//! ```
//!
//! Sub-tests are opaque: any type that implements [`Display`](std::fmt::Display)
//! can sit on either side, so the parser keeps full control over how it
//! represents constants, variables and relational tests.
//!
//! ## Usage
//!
//! ```rust
//! use soar_ast::AttributeValueTest;
//!
//! let mut avt = AttributeValueTest::new();
//! avt.add_attribute_test("foo");
//! avt.add_attribute_test("bar");
//! avt.add_value_test(1);
//! assert_eq!(avt.render(), "[foo, bar], [1]");
//!
//! avt.negate();
//! assert_eq!(avt.render(), "-{[foo, bar], [1]}");
//! ```
//!
//! ## Rendering
//!
//! | State | Output |
//! |-------|--------|
//! | empty | `[], []` |
//! | affirmed | `[a1, a2], [v1]` |
//! | negated | `-{[a1, a2], [v1]}` |
//!
//! Enable the `serde` feature for `Serialize`/`Deserialize` on the AST types.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod builder;
mod error;
pub mod formatter;
mod traits;

pub use ast::{AttributeValueTest, Negation};
pub use builder::AttributeValueTestBuilder;
pub use error::{AstError, AstResult};
pub use traits::{AttributeTest, ValueTest};

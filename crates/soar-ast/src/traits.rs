//! Capabilities required of the sub-tests aggregated by an attribute-value test.
//!
//! The condition grammar represents attribute and value tests in many shapes
//! (constants, variables, relational tests, `<< a b >>` disjunctions,
//! `{ ... }` conjunctions). None of that is visible here: an
//! [`AttributeValueTest`](crate::AttributeValueTest) only needs each sub-test
//! to render itself as text.
//!
//! Both traits are blanket-implemented for every [`Display`] type, so a parser
//! can plug in its own node types (or plain strings in tests) without
//! writing any impls.

use std::fmt::Display;

/// A test on the attribute position of a condition clause.
pub trait AttributeTest: Display {}

impl<T: Display + ?Sized> AttributeTest for T {}

/// A test on the value position of a condition clause.
pub trait ValueTest: Display {}

impl<T: Display + ?Sized> ValueTest for T {}

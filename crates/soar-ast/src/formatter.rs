//! Canonical text rendering for attribute-value tests.
//!
//! The rendering is the only serialization the node provides outside of the
//! `serde` feature, so the conventions live here as constants:
//!
//! ```text
//! [a1, a2], [v1]        affirmed
//! -{[a1, a2], [v1]}     negated
//! [], []                nothing added yet
//! ```

use std::fmt::{self, Display, Write};

/// Opens a rendered sequence.
pub const SEQUENCE_OPEN: &str = "[";
/// Closes a rendered sequence.
pub const SEQUENCE_CLOSE: &str = "]";
/// Separates elements inside a sequence and the two sequences of a clause.
pub const SEPARATOR: &str = ", ";
/// Prefix wrapped around a negated clause.
pub const NEGATION_OPEN: &str = "-{";
/// Suffix wrapped around a negated clause.
pub const NEGATION_CLOSE: &str = "}";

/// Writes `items` as `[first, second, ...]` using each element's `Display`.
pub fn write_sequence<T: Display>(f: &mut impl Write, items: &[T]) -> fmt::Result {
    f.write_str(SEQUENCE_OPEN)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(SEQUENCE_CLOSE)
}

/// Renders `items` as `[first, second, ...]`.
pub fn format_sequence<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail unless an element's Display does.
    let _ = write_sequence(&mut out, items);
    out
}

/// Writes the clause body `<attrs>, <values>`, wrapped as `-{...}` when
/// `negated` is set.
pub(crate) fn write_clause<A: Display, V: Display>(
    f: &mut impl Write,
    negated: bool,
    attributes: &[A],
    values: &[V],
) -> fmt::Result {
    if negated {
        f.write_str(NEGATION_OPEN)?;
    }
    write_sequence(f, attributes)?;
    f.write_str(SEPARATOR)?;
    write_sequence(f, values)?;
    if negated {
        f.write_str(NEGATION_CLOSE)?;
    }
    Ok(())
}

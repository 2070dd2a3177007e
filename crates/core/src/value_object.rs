//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new value (e.g. `Quality::adjusted` returns a fresh
/// `Quality` rather than mutating in place).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i32);
///
/// impl ValueObject for Quality {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Structural capability contracts.
//!
//! These are the duck-typed questions the dispatch layer asks of a candidate
//! type. A container author implements whichever subset its type genuinely
//! has; the [`Adapted`](crate::adapt::Adapted) table entry then names the
//! strategies that consume them. No marker beyond the one-line registration
//! is required.

/// A raw single-owner handle whose address-of-content is the whole value.
///
/// Highest-priority extraction capability: a pointer-like type is always
/// dereferenced directly, even if the pointee would make it look like a
/// deref or accessor candidate.
///
/// # Safety
///
/// Implementors guarantee that whenever [`as_raw`](PointerLike::as_raw)
/// returns a non-null pointer obtained from a live handle, that pointer is
/// properly aligned and valid for reads and writes of `Pointee`, and that no
/// other alias is written through while a pipeline holds the handle.
pub unsafe trait PointerLike {
    /// The pointed-to payload type.
    type Pointee;

    /// The raw address of the payload.
    fn as_raw(&self) -> *mut Self::Pointee;
}

/// A `value()`-style payload accessor.
///
/// Used when a type holds its payload behind an accessor pair rather than a
/// deref. The failure contract is the implementor's own: an accessor that
/// panics on an empty container panics identically through the pipeline.
pub trait ValueAccess {
    /// The payload type.
    type Value;

    /// Shared access to the payload.
    fn value(&self) -> &Self::Value;

    /// Exclusive access to the payload.
    fn value_mut(&mut self) -> &mut Self::Value;
}

/// Direct boolean conversion; the highest-priority presence capability.
pub trait Truthy {
    /// Whether the value currently holds a usable payload.
    fn truthy(&self) -> bool;
}

/// An explicit `has_value()`-style presence query.
pub trait PresenceQuery {
    /// Whether the value currently holds a usable payload.
    fn has_value(&self) -> bool;
}

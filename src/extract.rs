//! Payload extraction.
//!
//! [`Extract`] is the facade every consumer uses; [`ExtractVia`] supplies the
//! mechanism, one blanket impl per strategy marker. The facade routes through
//! the type's [`Adapted::Extraction`](crate::adapt::Adapted) table entry, so
//! a type that structurally satisfies several strategies (a `Vec` both derefs
//! to a slice and iterates) still resolves to exactly one; coherence makes
//! any other outcome impossible.
//!
//! Output shape per strategy:
//!
//! - `ViaPointer` / `ViaDeref` / `ViaValue`: `&'m mut Payload`, a reference
//!   to the single element.
//! - `ViaRange`: [`View<'m, Self>`](crate::view::View), the whole iteration
//!   range as one unit.
//!
//! Each strategy preserves the underlying operation's own failure contract;
//! extraction adds no recovery of its own.

use core::ops::DerefMut;

use crate::adapt::Adapted;
use crate::contract::{PointerLike, ValueAccess};
use crate::strategy::{ViaDeref, ViaPointer, ViaRange, ViaValue};
use crate::view::View;

/// Strategy-keyed extraction mechanism.
///
/// One blanket impl exists per strategy marker `S`; the marker named by the
/// type's table entry decides which one the [`Extract`] facade uses.
pub trait ExtractVia<'m, S> {
    /// Payload handle produced by this strategy.
    type Output;

    fn extract_via(&'m mut self) -> Self::Output;
}

// Strategy 0: raw handle, dereferenced directly.
impl<'m, P> ExtractVia<'m, ViaPointer> for P
where
    P: PointerLike + 'm,
{
    type Output = &'m mut P::Pointee;

    fn extract_via(&'m mut self) -> &'m mut P::Pointee {
        let raw = self.as_raw();
        assert!(!raw.is_null(), "extraction through a null handle");
        // SAFETY: non-null checked above; validity and uniqueness are the
        // PointerLike implementor's contract.
        unsafe { &mut *raw }
    }
}

// Strategy 1: the type's own deref reaches the payload. Only a deref to a
// single sized payload counts; a deref to a slice (Vec -> [T]) is a
// container-to-sequence coercion and belongs to the range strategy.
impl<'m, M> ExtractVia<'m, ViaDeref> for M
where
    M: DerefMut + 'm,
    M::Target: Sized,
{
    type Output = &'m mut M::Target;

    fn extract_via(&'m mut self) -> &'m mut M::Target {
        &mut **self
    }
}

// Strategy 2: explicit accessor.
impl<'m, M> ExtractVia<'m, ViaValue> for M
where
    M: ValueAccess + 'm,
{
    type Output = &'m mut M::Value;

    fn extract_via(&'m mut self) -> &'m mut M::Value {
        self.value_mut()
    }
}

// Strategy 3: iterable, extracted as a whole view.
impl<'m, C> ExtractVia<'m, ViaRange> for C
where
    C: 'm,
    for<'s> &'s C: IntoIterator,
{
    type Output = View<'m, C>;

    fn extract_via(&'m mut self) -> View<'m, C> {
        View::new(self)
    }
}

/// Obtain the payload (or payload view) of an adapted value.
///
/// The lifetime parameter ties the output to the borrow of the container,
/// which keeps a sequence [`View`] provably bounded by what it views.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not extractable",
    label = "no extraction strategy applies to `{Self}`",
    note = "register the type with `Adapted` (or `#[derive(Adapt)]`) and implement the \
            structural contract its extraction strategy needs."
)]
pub trait Extract<'m> {
    /// `&'m mut P` for singular containers, `View<'m, Self>` for sequences.
    type Output;

    fn extract(&'m mut self) -> Self::Output;
}

impl<'m, M> Extract<'m> for M
where
    M: Adapted + ExtractVia<'m, <M as Adapted>::Extraction>,
{
    type Output = <M as ExtractVia<'m, M::Extraction>>::Output;

    fn extract(&'m mut self) -> Self::Output {
        // Fully qualified: several ExtractVia blankets may structurally
        // apply; only the table entry's marker is ever dispatched.
        <M as ExtractVia<'m, M::Extraction>>::extract_via(self)
    }
}

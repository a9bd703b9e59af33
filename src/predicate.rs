//! Derived capability predicates.
//!
//! Composites of the triad, used to state pipeline requirements the way the
//! dispatch layer thinks about them:
//!
//! - [`Maybe`]: extractable and presence-checkable, the "possibly empty"
//!   family (optionals, nullable handles).
//! - [`List`]: a maybe that is also iterable, the sequence family with
//!   presence via emptiness and extraction via view.
//! - [`Morph`]: a transformation applicable to a given container, invocable
//!   on its extraction output with a result the container can absorb.
//!
//! All three are blanket-implemented aliases; nothing implements them by
//! hand.

use crate::check::Check;
use crate::extract::Extract;
use crate::replace::Replace;

/// Presence-aware extractable: the "possibly empty" container family.
pub trait Maybe<'m>: Extract<'m> + Check {}

impl<'m, M> Maybe<'m> for M where M: Extract<'m> + Check {}

/// A [`Maybe`] that is also iterable: the sequence family.
pub trait List<'m>: Maybe<'m> {}

// `&'m M` is only well-formed when M outlives 'm, so the bound is stated.
impl<'m, M> List<'m> for M
where
    M: Maybe<'m> + 'm,
    &'m M: IntoIterator,
{
}

/// Transformation `F` applicable to container `M` with result `R`.
///
/// Satisfied exactly when `F` is invocable with `M`'s extraction output and
/// `M` can absorb `R` through [`Replace`]. This is the bound
/// [`Pipe::then`](crate::pipe::Pipe::then) consumes, usually higher-ranked
/// over the extraction lifetime.
pub trait Morph<'m, M, R>: FnOnce(<M as Extract<'m>>::Output) -> R
where
    M: Extract<'m>,
{
}

impl<'m, M, R, F> Morph<'m, M, R> for F
where
    M: Extract<'m> + Replace<R>,
    F: FnOnce(<M as Extract<'m>>::Output) -> R,
{
}

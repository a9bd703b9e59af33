//! Presence checking.
//!
//! [`Check`] answers "does this value currently hold a usable payload",
//! computed fresh on every call and never cached. Mechanism is supplied by
//! [`CheckVia`], one blanket impl per presence strategy, routed through the
//! type's [`Adapted::Presence`](crate::adapt::Adapted) entry.
//!
//! `Check` is deliberately unimplemented for [`Always`] types: invoking a
//! presence check on a non-presence-aware container is a compile-time error,
//! not a silent `true`. The pipeline instead goes through [`Gate`], which
//! extends the dispatch with the `Always` → always-active rule.

use crate::adapt::Adapted;
use crate::contract::{PresenceQuery, Truthy};
use crate::strategy::{Always, ViaBool, ViaEmpty, ViaQuery};

/// Strategy-keyed presence mechanism.
pub trait CheckVia<S> {
    fn check_via(&self) -> bool;
}

// Strategy 0: direct boolean conversion.
impl<M> CheckVia<ViaBool> for M
where
    M: Truthy,
{
    fn check_via(&self) -> bool {
        self.truthy()
    }
}

// Strategy 1: explicit presence query.
impl<M> CheckVia<ViaQuery> for M
where
    M: PresenceQuery,
{
    fn check_via(&self) -> bool {
        self.has_value()
    }
}

// Strategy 2: inverted emptiness of the iterable.
impl<C> CheckVia<ViaEmpty> for C
where
    for<'s> &'s C: IntoIterator,
{
    fn check_via(&self) -> bool {
        self.into_iter().next().is_some()
    }
}

/// Fresh, uncached presence query on a presence-aware adapted value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not presence-checkable",
    label = "`{Self}` has no presence strategy; it is always active",
    note = "types registered with `Always` cannot be checked; only `ViaBool`, `ViaQuery` \
            and `ViaEmpty` registrations support `check()`."
)]
pub trait Check {
    fn check(&self) -> bool;
}

impl<M> Check for M
where
    M: Adapted + CheckVia<<M as Adapted>::Presence>,
{
    fn check(&self) -> bool {
        <M as CheckVia<M::Presence>>::check_via(self)
    }
}

/// Pipeline-facing presence gate.
///
/// Identical to [`Check`] for presence-aware strategies, plus the rule that
/// an [`Always`] registration is unconditionally active. Implemented on the
/// presence marker so the pipeline can gate a chain step without demanding
/// `Check` from types that must not have it.
pub trait Gate<M: ?Sized> {
    /// Whether the strategy is presence-aware at all.
    const AWARE: bool;

    /// Whether the wrapped value should receive the next chain step.
    fn active(monad: &M) -> bool;
}

impl<M: ?Sized> Gate<M> for Always {
    const AWARE: bool = false;

    fn active(_monad: &M) -> bool {
        true
    }
}

impl<M> Gate<M> for ViaBool
where
    M: CheckVia<ViaBool>,
{
    const AWARE: bool = true;

    fn active(monad: &M) -> bool {
        <M as CheckVia<ViaBool>>::check_via(monad)
    }
}

impl<M> Gate<M> for ViaQuery
where
    M: CheckVia<ViaQuery>,
{
    const AWARE: bool = true;

    fn active(monad: &M) -> bool {
        <M as CheckVia<ViaQuery>>::check_via(monad)
    }
}

impl<M> Gate<M> for ViaEmpty
where
    M: CheckVia<ViaEmpty>,
{
    const AWARE: bool = true;

    fn active(monad: &M) -> bool {
        <M as CheckVia<ViaEmpty>>::check_via(monad)
    }
}

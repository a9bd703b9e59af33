//! Structural capability probes.
//!
//! `Probe<T>` reports, for a concrete type, which structural capabilities it
//! actually has, one `bool` const per contract. The mechanism is the
//! inherent-const fallback pattern:
//!
//! 1. A fallback trait supplies `const CAN_X: bool = false` for every `T`.
//! 2. An inherent impl supplies `CAN_X = true` where the capability holds.
//! 3. Resolving `Probe::<Concrete>::CAN_X` prefers the inherent const.
//!
//! The ranking tests feed these flags through the strategy selectors to
//! verify every table entry picks the earliest applicable strategy.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site; in a
//! generic context the fallback always wins. Use the [`probe!`](crate::probe!)
//! macro at use sites so the fallback traits are in scope.

use core::marker::PhantomData;
use core::ops::DerefMut;

use crate::contract::{PointerLike, PresenceQuery, Truthy, ValueAccess};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one capability contract.
macro_rules! impl_probe {
    ($flag:ident, $Contract:path) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$flag:camel Fallback>] { const [<CAN_ $flag:upper>]: bool = false; }
            impl<T: ?Sized> [<$flag:camel Fallback>] for Probe<T> {}
            impl<T: $Contract> Probe<T> { pub const [<CAN_ $flag:upper>]: bool = true; }
        }
    };
}

impl_probe!(point, PointerLike);
impl_probe!(value, ValueAccess);
impl_probe!(bool, Truthy);
impl_probe!(query, PresenceQuery);

// Deref only counts when it reaches a single sized payload; a deref to a
// slice is the range strategy's business. Needs the extra bound, so it
// skips the macro.
#[doc(hidden)]
pub trait DerefFallback {
    const CAN_DEREF: bool = false;
}
impl<T: ?Sized> DerefFallback for Probe<T> {}
impl<T> Probe<T>
where
    T: DerefMut,
    T::Target: Sized,
{
    pub const CAN_DEREF: bool = true;
}

// Iterability needs a higher-ranked bound, so it skips the macro.
#[doc(hidden)]
pub trait RangeFallback {
    const CAN_RANGE: bool = false;
}
impl<T: ?Sized> RangeFallback for Probe<T> {}
impl<T> Probe<T>
where
    for<'s> &'s T: IntoIterator,
{
    pub const CAN_RANGE: bool = true;
}

/// Read a capability flag for a concrete type.
///
/// ```
/// use unison::probe;
///
/// assert!(probe!(Option<i32> => CAN_QUERY));
/// assert!(!probe!(Vec<i32> => CAN_QUERY));
/// assert!(probe!(Vec<i32> => CAN_RANGE));
/// ```
#[macro_export]
macro_rules! probe {
    ($ty:ty => $flag:ident) => {{
        #[allow(unused_imports)]
        use $crate::probe::*;
        $crate::probe::Probe::<$ty>::$flag
    }};
}

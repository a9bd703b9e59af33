//! The strategy-selection table and the shipped adapters.
//!
//! [`Adapted`] is the single registration point: one impl names the
//! extraction and presence markers for a type, and every triad facade routes
//! through it. Registration is one line (`adapt!`, a manual impl, or
//! `#[derive(Adapt)]`) and never restates mechanism.
//!
//! This module also carries the adapters for the external families the crate
//! exists to compose over. None of these are containers of this crate's own
//! making; they are pre-existing collaborators given a table entry and the
//! structural contract impls their strategies consume:
//!
//! | family            | extraction   | presence   |
//! |-------------------|--------------|------------|
//! | `*mut T`          | `ViaPointer` | `ViaBool`  |
//! | `NonNull<T>`      | `ViaPointer` | `Always`   |
//! | `Option<T>`       | `ViaValue`   | `ViaQuery` |
//! | `Result<T, E>`    | `ViaValue`   | `ViaQuery` |
//! | `Box<T>`          | `ViaDeref`   | `Always`   |
//! | `Vec<T>`          | `ViaRange`   | `ViaEmpty` |
//! | `VecDeque<T>`     | `ViaRange`   | `ViaEmpty` |
//! | `[T; N]`          | `ViaRange`   | `ViaEmpty` |

use core::ptr::NonNull;

use crate::contract::{PointerLike, PresenceQuery, Truthy, ValueAccess};
use crate::replace::{Replace, Site};
use crate::strategy::{ExtractionKind, PresenceKind};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

/// The strategy-selection table.
///
/// An entry must agree with the priority ranking over the type's structural
/// capabilities: the earliest applicable strategy from each ordered list (see
/// [`select_extraction`](crate::strategy::select_extraction) and
/// [`select_presence`](crate::strategy::select_presence)). The `strategy_rank`
/// tests hold every shipped entry to that rule; user entries should follow it
/// for their own types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not registered as an adapted container",
    label = "`{Self}` has no strategy-table entry",
    note = "add `impl Adapted for {Self}` (or `#[derive(Adapt)]` with an `#[adapt(...)]` \
            attribute) naming its extraction and presence strategies."
)]
pub trait Adapted {
    /// How the payload is reached.
    type Extraction: ExtractionKind;

    /// How presence is assessed; `Always` if the type is not presence-aware.
    type Presence: PresenceKind;
}

/// Register a type in the strategy-selection table.
///
/// ```
/// use unison::{adapt, ValueAccess, PresenceQuery, ViaValue, ViaQuery};
///
/// struct Slot(Option<u32>);
///
/// impl ValueAccess for Slot {
///     type Value = u32;
///     fn value(&self) -> &u32 {
///         self.0.as_ref().expect("empty Slot")
///     }
///     fn value_mut(&mut self) -> &mut u32 {
///         self.0.as_mut().expect("empty Slot")
///     }
/// }
///
/// impl PresenceQuery for Slot {
///     fn has_value(&self) -> bool {
///         self.0.is_some()
///     }
/// }
///
/// adapt!(Slot => extract: ViaValue, presence: ViaQuery);
/// ```
#[macro_export]
macro_rules! adapt {
    (<$($g:ident),* $(,)?> $ty:ty => extract: $ex:ty, presence: $pr:ty) => {
        impl<$($g),*> $crate::adapt::Adapted for $ty {
            type Extraction = $ex;
            type Presence = $pr;
        }
    };
    ($ty:ty => extract: $ex:ty, presence: $pr:ty) => {
        impl $crate::adapt::Adapted for $ty {
            type Extraction = $ex;
            type Presence = $pr;
        }
    };
}

// =============================================================================
// Raw Pointers
// =============================================================================
//
// The pointer itself is the container; null is the inert state. Presence is
// the direct boolean conversion a pointer has always had.

// SAFETY: `as_raw` returns the handle's own address; validity of a non-null
// raw pointer for the duration of a pipeline is the caller's obligation.
// Running a pipeline over a dangling `*mut T` is undefined behavior, exactly
// as dereferencing it directly would be.
unsafe impl<T> PointerLike for *mut T {
    type Pointee = T;

    fn as_raw(&self) -> *mut T {
        *self
    }
}

impl<T> Truthy for *mut T {
    fn truthy(&self) -> bool {
        !self.is_null()
    }
}

crate::adapt!(<T> *mut T => extract: crate::strategy::ViaPointer, presence: crate::strategy::ViaBool);

impl<T> Replace<T> for *mut T {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: T) {
        assert!(!self.is_null(), "replacement through a null handle");
        // SAFETY: non-null checked above; validity per the PointerLike
        // contract on `*mut T`.
        unsafe {
            **self = value;
        }
    }
}

impl<T> Replace<*mut T> for *mut T {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: *mut T) {
        *self = value;
    }
}

// =============================================================================
// NonNull
// =============================================================================
//
// Never null, so never inert: no presence strategy.

// SAFETY: `as_raw` returns the handle's own address; a NonNull handed to a
// pipeline must be valid for reads and writes, as for `*mut T`.
unsafe impl<T> PointerLike for NonNull<T> {
    type Pointee = T;

    fn as_raw(&self) -> *mut T {
        self.as_ptr()
    }
}

crate::adapt!(<T> NonNull<T> => extract: crate::strategy::ViaPointer, presence: crate::strategy::Always);

impl<T> Replace<T> for NonNull<T> {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: T) {
        // SAFETY: NonNull is non-null by construction; validity per the
        // PointerLike contract.
        unsafe {
            *self.as_ptr() = value;
        }
    }
}

impl<T> Replace<NonNull<T>> for NonNull<T> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: NonNull<T>) {
        *self = value;
    }
}

// =============================================================================
// Option
// =============================================================================

impl<T> ValueAccess for Option<T> {
    type Value = T;

    /// # Panics
    ///
    /// Panics if the option is `None`, matching a direct unchecked access.
    fn value(&self) -> &T {
        self.as_ref().expect("value() on an empty Option")
    }

    /// # Panics
    ///
    /// Panics if the option is `None`, matching a direct unchecked access.
    fn value_mut(&mut self) -> &mut T {
        self.as_mut().expect("value_mut() on an empty Option")
    }
}

impl<T> PresenceQuery for Option<T> {
    fn has_value(&self) -> bool {
        self.is_some()
    }
}

crate::adapt!(<T> Option<T> => extract: crate::strategy::ViaValue, presence: crate::strategy::ViaQuery);

impl<T> Replace<T> for Option<T> {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: T) {
        match self.as_mut() {
            Some(slot) => *slot = value,
            // Writing into the payload slot of an empty option engages it.
            None => *self = Some(value),
        }
    }
}

impl<T> Replace<Option<T>> for Option<T> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: Option<T>) {
        *self = value;
    }
}

// =============================================================================
// Result
// =============================================================================
//
// Ok is the payload; Err is the inert state.

impl<T, E> ValueAccess for Result<T, E> {
    type Value = T;

    /// # Panics
    ///
    /// Panics if the result is `Err`, matching a direct unchecked access.
    fn value(&self) -> &T {
        match self {
            Ok(v) => v,
            Err(_) => panic!("value() on an Err result"),
        }
    }

    /// # Panics
    ///
    /// Panics if the result is `Err`, matching a direct unchecked access.
    fn value_mut(&mut self) -> &mut T {
        match self {
            Ok(v) => v,
            Err(_) => panic!("value_mut() on an Err result"),
        }
    }
}

impl<T, E> PresenceQuery for Result<T, E> {
    fn has_value(&self) -> bool {
        self.is_ok()
    }
}

crate::adapt!(<T, E> Result<T, E> => extract: crate::strategy::ViaValue, presence: crate::strategy::ViaQuery);

impl<T, E> Replace<T> for Result<T, E> {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: T) {
        match self {
            Ok(slot) => *slot = value,
            Err(_) => *self = Ok(value),
        }
    }
}

impl<T, E> Replace<Result<T, E>> for Result<T, E> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: Result<T, E>) {
        *self = value;
    }
}

// =============================================================================
// Box (alloc)
// =============================================================================
//
// Always holds a value: deref extraction, no presence strategy.

#[cfg(feature = "alloc")]
crate::adapt!(<T> Box<T> => extract: crate::strategy::ViaDeref, presence: crate::strategy::Always);

#[cfg(feature = "alloc")]
impl<T> Replace<T> for Box<T> {
    const SITE: Site = Site::Payload;

    fn replace(&mut self, value: T) {
        **self = value;
    }
}

#[cfg(feature = "alloc")]
impl<T> Replace<Box<T>> for Box<T> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: Box<T>) {
        *self = value;
    }
}

// =============================================================================
// Sequences: Vec, VecDeque (alloc), arrays
// =============================================================================
//
// Range extraction, emptiness presence. Their payload location is a view,
// so whole-container replacement is the only legal rebind site.

#[cfg(feature = "alloc")]
crate::adapt!(<T> Vec<T> => extract: crate::strategy::ViaRange, presence: crate::strategy::ViaEmpty);

#[cfg(feature = "alloc")]
impl<T> Replace<Vec<T>> for Vec<T> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: Vec<T>) {
        *self = value;
    }
}

#[cfg(feature = "alloc")]
crate::adapt!(<T> VecDeque<T> => extract: crate::strategy::ViaRange, presence: crate::strategy::ViaEmpty);

#[cfg(feature = "alloc")]
impl<T> Replace<VecDeque<T>> for VecDeque<T> {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: VecDeque<T>) {
        *self = value;
    }
}

// Arrays take a manual impl: the adapt! grammar has no const-generic arm.
impl<T, const N: usize> Adapted for [T; N] {
    type Extraction = crate::strategy::ViaRange;
    type Presence = crate::strategy::ViaEmpty;
}

impl<T, const N: usize> Replace<[T; N]> for [T; N] {
    const SITE: Site = Site::Container;

    fn replace(&mut self, value: [T; N]) {
        *self = value;
    }
}

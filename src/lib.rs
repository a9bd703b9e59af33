#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc adapters (Box, Vec, VecDeque) in no_std

//! # unison
//!
//! Structural capability dispatch and short-circuiting pipelines over
//! container-like types.
//!
//! **One pipeline over optionals, pointers, sequences, and user wrappers.**
//!
//! ## Architecture
//!
//! `unison` lets heterogeneous value-holding types participate in a single
//! fluent pipeline without sharing a base abstraction. For each registered
//! type the crate knows, at compile time:
//!
//! - how to **extract** its payload (`Extract`),
//! - how to **check** whether it currently holds one (`Check`),
//! - how to **replace** the payload or the whole container (`Replace`).
//!
//! Each of the three operations picks one strategy out of an ordered list.
//! The priority order is a first-class, tested contract, not an overload
//! accident:
//!
//! ```text
//! extraction:  ViaPointer > ViaDeref > ViaValue > ViaRange
//! presence:    ViaBool    > ViaQuery > ViaEmpty   (else Always)
//! ```
//!
//! Registration is a single table entry (`Adapted`) naming the two strategy
//! markers; the mechanism per strategy is supplied by blanket impls, so a
//! type never re-implements it. Because dispatch is keyed on the table entry,
//! exactly one strategy can ever apply to a given type.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Contracts & Strategy Markers                            |
//! |  - PointerLike, ValueAccess, Truthy, PresenceQuery                |
//! |  - ViaPointer/ViaDeref/ViaValue/ViaRange, ranking algorithm       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Adaptation Triad                                        |
//! |  - Extract (payload / view), Check (fresh, uncached),             |
//! |    Replace (payload site preferred, container fallback)           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Table & Predicates                                      |
//! |  - Adapted registry, std/core adapters, Probe detection           |
//! |  - Maybe / List / Morph derived predicates                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Pipeline                                                |
//! |  - Pipe over Owned / Borrowed bindings, presence-gated `then`     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use unison::Pipe;
//!
//! // Presence-aware: the step runs only while a value is held.
//! let doubled = Pipe::own(Some(5))
//!     .then(|v: &mut i32| *v * 2)
//!     .into_inner();
//! assert_eq!(doubled, Some(10));
//!
//! // Inert containers short-circuit; the closure is never invoked.
//! let still_empty = Pipe::own(None::<i32>)
//!     .then(|v: &mut i32| *v * 2)
//!     .into_inner();
//! assert_eq!(still_empty, None);
//! ```
//!
//! Sequences extract as a whole [`View`], not element by element:
//!
//! ```
//! use unison::{Pipe, View};
//!
//! let grown = Pipe::own(vec![1, 2, 3])
//!     .then(|v: View<'_, Vec<i32>>| {
//!         let mut out: Vec<i32> = v.iter().copied().collect();
//!         out.push(4);
//!         out
//!     })
//!     .into_inner();
//! assert_eq!(grown, vec![1, 2, 3, 4]);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the probe generation macro
pub use paste;

// =============================================================================
// Layer 0: Contracts & Strategy Markers (no dependencies)
// =============================================================================
pub mod contract;
pub mod strategy;

// =============================================================================
// Layer 1: Adaptation Triad
// =============================================================================
pub mod check;
pub mod extract;
pub mod replace;
pub mod view;

// =============================================================================
// Layer 2: Table, Adapters, Probes, Predicates
// =============================================================================
pub mod adapt;
pub mod predicate;
pub mod probe;

// =============================================================================
// Layer 3: Pipeline
// =============================================================================
pub mod pipe;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use adapt::Adapted;
pub use check::{Check, Gate};
pub use contract::{PointerLike, PresenceQuery, Truthy, ValueAccess};
pub use extract::{Extract, ExtractVia};
pub use pipe::{Binding, Borrowed, Owned, Pipe};
pub use predicate::{List, Maybe, Morph};
pub use probe::Probe;
pub use replace::{Replace, Site};
pub use strategy::{
    Always, ExtractionId, ExtractionKind, PresenceId, PresenceKind, ViaBool, ViaDeref, ViaEmpty,
    ViaPointer, ViaQuery, ViaRange, ViaValue, select_extraction, select_presence,
};
pub use view::View;

// Re-export proc-macros
pub use macros::Adapt;

/// Common items for pipeline construction and adapter registration.
pub mod prelude {
    pub use crate::adapt::Adapted;
    pub use crate::check::Check;
    pub use crate::contract::{PointerLike, PresenceQuery, Truthy, ValueAccess};
    pub use crate::extract::Extract;
    pub use crate::pipe::Pipe;
    pub use crate::replace::{Replace, Site};
    pub use crate::strategy::{
        Always, ViaBool, ViaDeref, ViaEmpty, ViaPointer, ViaQuery, ViaRange, ViaValue,
    };
    pub use crate::view::View;
    pub use macros::Adapt;
}

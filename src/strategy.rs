//! Strategy markers and the dispatch ranking.
//!
//! Every adapted type resolves each triad operation to exactly one strategy.
//! The candidate strategies form an ordered list, and the earliest applicable
//! one wins. That ordering is the core dispatch invariant of the crate, so it
//! lives here as a plain, testable algorithm instead of being implied by impl
//! selection:
//!
//! | rank | extraction   | applies when                                   |
//! |------|--------------|------------------------------------------------|
//! | 0    | `ViaPointer` | the type is a raw single-owner handle          |
//! | 1    | `ViaDeref`   | the type derefs to a single sized payload      |
//! | 2    | `ViaValue`   | the type exposes a `value()`-style accessor    |
//! | 3    | `ViaRange`   | the type is iterable; extraction yields a view |
//!
//! | rank | presence   | applies when                                     |
//! |------|------------|--------------------------------------------------|
//! | 0    | `ViaBool`  | the type converts to bool directly               |
//! | 1    | `ViaQuery` | the type exposes an explicit presence query      |
//! | 2    | `ViaEmpty` | the type is iterable; presence = non-emptiness   |
//!
//! A type with none of the presence capabilities registers [`Always`]: it is
//! not presence-aware and every pipeline step treats it as active.
//!
//! The [`Adapted`](crate::adapt::Adapted) table entry for a type must agree
//! with [`select_extraction`] / [`select_presence`] applied to its
//! [`Probe`](crate::probe::Probe) flags; the `strategy_rank` integration
//! tests enforce this for every shipped adapter.

// =============================================================================
// Extraction Strategy Markers
// =============================================================================

/// Dereference a raw handle; the address-of-content is the whole value.
pub struct ViaPointer;

/// Follow the type's own deref to reach the payload.
pub struct ViaDeref;

/// Call the type's `value()`-style accessor.
pub struct ViaValue;

/// Pair the type's begin/end cursors into a non-owning [`View`](crate::view::View).
pub struct ViaRange;

// =============================================================================
// Presence Strategy Markers
// =============================================================================

/// Direct boolean conversion ([`Truthy`](crate::contract::Truthy)).
pub struct ViaBool;

/// Explicit presence query ([`PresenceQuery`](crate::contract::PresenceQuery)).
pub struct ViaQuery;

/// Inverted emptiness of the iterable.
pub struct ViaEmpty;

/// Not presence-aware: the container is always treated as active.
pub struct Always;

// =============================================================================
// Ranking Algorithm
// =============================================================================

/// Identifier of an extraction strategy, ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionId {
    Pointer,
    Deref,
    Value,
    Range,
}

impl ExtractionId {
    /// Position in the priority order; lower wins.
    pub const fn rank(self) -> u8 {
        match self {
            ExtractionId::Pointer => 0,
            ExtractionId::Deref => 1,
            ExtractionId::Value => 2,
            ExtractionId::Range => 3,
        }
    }
}

/// Identifier of a presence strategy, ordered by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceId {
    Bool,
    Query,
    Empty,
}

impl PresenceId {
    /// Position in the priority order; lower wins.
    pub const fn rank(self) -> u8 {
        match self {
            PresenceId::Bool => 0,
            PresenceId::Query => 1,
            PresenceId::Empty => 2,
        }
    }
}

/// Earliest-match selection over the extraction capability flags.
///
/// Flags are the structural capabilities of a candidate type, in priority
/// order. `None` means the type is not extractable at all.
pub const fn select_extraction(
    pointer: bool,
    deref: bool,
    value: bool,
    range: bool,
) -> Option<ExtractionId> {
    if pointer {
        Some(ExtractionId::Pointer)
    } else if deref {
        Some(ExtractionId::Deref)
    } else if value {
        Some(ExtractionId::Value)
    } else if range {
        Some(ExtractionId::Range)
    } else {
        None
    }
}

/// Earliest-match selection over the presence capability flags.
///
/// `None` means the type is not presence-aware and registers [`Always`].
pub const fn select_presence(truthy: bool, query: bool, range: bool) -> Option<PresenceId> {
    if truthy {
        Some(PresenceId::Bool)
    } else if query {
        Some(PresenceId::Query)
    } else if range {
        Some(PresenceId::Empty)
    } else {
        None
    }
}

// =============================================================================
// Marker Traits
// =============================================================================

/// Binds an extraction marker type to its [`ExtractionId`].
pub trait ExtractionKind {
    const ID: ExtractionId;
}

impl ExtractionKind for ViaPointer {
    const ID: ExtractionId = ExtractionId::Pointer;
}

impl ExtractionKind for ViaDeref {
    const ID: ExtractionId = ExtractionId::Deref;
}

impl ExtractionKind for ViaValue {
    const ID: ExtractionId = ExtractionId::Value;
}

impl ExtractionKind for ViaRange {
    const ID: ExtractionId = ExtractionId::Range;
}

/// Binds a presence marker type to its [`PresenceId`].
///
/// [`Always`] carries `None`: no presence strategy, never gated.
pub trait PresenceKind {
    const ID: Option<PresenceId>;
}

impl PresenceKind for ViaBool {
    const ID: Option<PresenceId> = Some(PresenceId::Bool);
}

impl PresenceKind for ViaQuery {
    const ID: Option<PresenceId> = Some(PresenceId::Query);
}

impl PresenceKind for ViaEmpty {
    const ID: Option<PresenceId> = Some(PresenceId::Empty);
}

impl PresenceKind for Always {
    const ID: Option<PresenceId> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_ranks_are_strictly_ordered() {
        assert!(ExtractionId::Pointer.rank() < ExtractionId::Deref.rank());
        assert!(ExtractionId::Deref.rank() < ExtractionId::Value.rank());
        assert!(ExtractionId::Value.rank() < ExtractionId::Range.rank());
    }

    #[test]
    fn earliest_extraction_wins() {
        // All flags set: pointer still wins.
        assert_eq!(
            select_extraction(true, true, true, true),
            Some(ExtractionId::Pointer)
        );
        // Deref beats value and range.
        assert_eq!(
            select_extraction(false, true, true, true),
            Some(ExtractionId::Deref)
        );
        assert_eq!(
            select_extraction(false, false, true, true),
            Some(ExtractionId::Value)
        );
        assert_eq!(
            select_extraction(false, false, false, true),
            Some(ExtractionId::Range)
        );
        assert_eq!(select_extraction(false, false, false, false), None);
    }

    #[test]
    fn earliest_presence_wins() {
        assert_eq!(select_presence(true, true, true), Some(PresenceId::Bool));
        assert_eq!(select_presence(false, true, true), Some(PresenceId::Query));
        assert_eq!(select_presence(false, false, true), Some(PresenceId::Empty));
        assert_eq!(select_presence(false, false, false), None);
    }
}

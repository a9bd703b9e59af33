//! Payload replacement.
//!
//! [`Replace`] writes a transformation result back into an adapted value.
//! Two sites exist, and the preference order between them is a contract:
//!
//! 1. [`Site::Payload`]: assign into the extracted payload location. The
//!    narrowest, most local mutation; always preferred when the payload
//!    location accepts the new value's type.
//! 2. [`Site::Container`]: reconstruct the whole container from the new
//!    value. The fallback, legal only when payload assignment is not.
//!
//! Rather than resolving the preference implicitly, every impl declares the
//! site it writes through as [`Replace::SITE`]; adapter families provide a
//! payload-site impl wherever their extraction output is an assignable
//! location, and a container-site impl for replacing the value wholesale.
//! Coherence keeps the two apart per `(Self, V)` pair, and the `triad`
//! integration tests pin the granularity for every shipped adapter.
//!
//! Range-strategy containers are the deliberate exception: their extraction
//! output is a [`View`](crate::view::View), never an assignable location, so
//! the container site is their only legal rebind, a whole-sequence
//! replacement however large the sequence.

/// Where a replacement value lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    /// Written through the extracted payload location.
    Payload,
    /// Reconstructs the whole container.
    Container,
}

/// Absorb a replacement value of type `V` into an adapted value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot absorb a replacement value of type `{V}`",
    label = "neither the payload location of `{Self}` nor `{Self}` itself accepts `{V}`",
    note = "a chain transformation must return either the payload type or the container \
            type of the value it runs over."
)]
pub trait Replace<V> {
    /// The granularity this impl writes through.
    const SITE: Site;

    fn replace(&mut self, value: V);
}

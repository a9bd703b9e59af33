//! The pipeline wrapper.
//!
//! [`Pipe`] holds exactly one adapted value and exposes one mutator:
//! [`then`](Pipe::then), a presence-gated apply-and-rebind. Each call
//! consumes the wrapper by value and returns it, so composition is strictly
//! sequential: no copy of the wrapped value is ever made, only moves and
//! in-place writes.
//!
//! Ownership mode is fixed at construction by the [`Binding`] parameter:
//!
//! - [`Owned<M>`]: move-constructed from a value the pipeline owns;
//!   recovered with [`into_inner`](Pipe::into_inner).
//! - [`Borrowed<'a, M>`]: bound to an existing value by exclusive
//!   reference, never copied, never owned; handed back with
//!   [`release`](Pipe::release).
//!
//! The wrapper has no state of its own. Active/inert is computed fresh from
//! the wrapped value at every step; an inert step is a silent no-op and the
//! transformation is not invoked. Short-circuiting is defined behavior, not
//! an error path, and whatever failure contract the underlying operations
//! declare passes through unchanged.

use crate::adapt::Adapted;
use crate::check::{Check, Gate};
use crate::extract::Extract;
use crate::predicate::Morph;
use crate::replace::Replace;

/// Ownership mode of a [`Pipe`], fixed for the wrapper's lifetime.
pub trait Binding {
    /// The wrapped adapted value's type.
    type Monad;

    fn monad(&self) -> &Self::Monad;
    fn monad_mut(&mut self) -> &mut Self::Monad;
}

/// Exclusive ownership of the wrapped value.
pub struct Owned<M>(M);

/// Reference binding to an external value; never copies, never owns.
pub struct Borrowed<'a, M>(&'a mut M);

impl<M> Binding for Owned<M> {
    type Monad = M;

    fn monad(&self) -> &M {
        &self.0
    }

    fn monad_mut(&mut self) -> &mut M {
        &mut self.0
    }
}

impl<'a, M> Binding for Borrowed<'a, M> {
    type Monad = M;

    fn monad(&self) -> &M {
        self.0
    }

    fn monad_mut(&mut self) -> &mut M {
        self.0
    }
}

/// A single adapted value, composable through chained [`then`](Pipe::then)
/// steps.
///
/// Created for the length of one pipeline expression and consumed through
/// it; not meant to be stored.
pub struct Pipe<B: Binding> {
    bound: B,
}

impl<M> Pipe<Owned<M>> {
    /// Take ownership of a value produced for this pipeline.
    pub fn own(monad: M) -> Self {
        Pipe {
            bound: Owned(monad),
        }
    }

    /// Surrender the wrapped value to ordinary code.
    pub fn into_inner(self) -> M {
        self.bound.0
    }
}

impl<'a, M> Pipe<Borrowed<'a, M>> {
    /// Bind to an existing value by exclusive reference.
    pub fn bind(monad: &'a mut M) -> Self {
        Pipe {
            bound: Borrowed(monad),
        }
    }

    /// Hand the bound reference back to ordinary code.
    pub fn release(self) -> &'a mut M {
        self.bound.0
    }
}

impl<B: Binding> Pipe<B> {
    /// Shared access to the wrapped value.
    pub fn get(&self) -> &B::Monad {
        self.bound.monad()
    }

    /// Exclusive access to the wrapped value.
    pub fn get_mut(&mut self) -> &mut B::Monad {
        self.bound.monad_mut()
    }

    /// Presence of the wrapped value, computed fresh; never mutates.
    ///
    /// Only available when the wrapped type is presence-aware; for `Always`
    /// registrations this does not compile.
    pub fn check(&self) -> bool
    where
        B::Monad: Check,
    {
        self.bound.monad().check()
    }

    /// Extract the wrapped value's payload through the wrapper.
    pub fn payload<'s>(&'s mut self) -> <B::Monad as Extract<'s>>::Output
    where
        B::Monad: Extract<'s>,
    {
        self.bound.monad_mut().extract()
    }

    /// Apply-and-rebind: the pipeline's sole mutator.
    ///
    /// When the wrapped value is presence-aware and currently inert, the
    /// step is a silent no-op and `f` is not invoked; the inert state
    /// propagates to the next step. Otherwise the payload is extracted, `f`
    /// applied, and the result rebound: through the payload location when
    /// that is legal for the result type, else by replacing the container.
    pub fn then<F, R>(mut self, f: F) -> Self
    where
        B::Monad: Adapted + Replace<R>,
        for<'m> B::Monad: Extract<'m>,
        for<'m> F: Morph<'m, B::Monad, R>,
        <B::Monad as Adapted>::Presence: Gate<B::Monad>,
    {
        if <<B::Monad as Adapted>::Presence as Gate<B::Monad>>::active(self.bound.monad()) {
            let value = f(self.bound.monad_mut().extract());
            self.bound.monad_mut().replace(value);
        }
        self
    }
}

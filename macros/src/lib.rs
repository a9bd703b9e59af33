//! Procedural macros for the unison adaptation layer.
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Adapt)]` | struct/enum | Register the type in the strategy table |
//!
//! ## Example
//!
//! ```ignore
//! use unison::Adapt;
//!
//! #[derive(Adapt)]
//! #[adapt(extract = ViaValue, presence = ViaQuery)]
//! struct Slot(Option<u32>);
//! ```
//!
//! The derive emits the `Adapted` impl naming the two strategy markers; the
//! structural contract each strategy consumes (`ValueAccess`,
//! `PresenceQuery`, ...) is still implemented by hand, since only the type's
//! author knows how to reach its payload.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod adapt;

/// Register a type in the strategy-selection table.
///
/// Reads `#[adapt(extract = <Marker>, presence = <Marker>)]`. The `presence`
/// entry may be omitted; the type then registers `Always` (not
/// presence-aware). Markers may be bare names (resolved against
/// `unison::strategy`) or full paths.
#[proc_macro_derive(Adapt, attributes(adapt))]
pub fn derive_adapt(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    adapt::expand_derive_adapt(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

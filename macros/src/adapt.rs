use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Path, Result};

/// Expand `#[derive(Adapt)]` into the `Adapted` table entry.
pub fn expand_derive_adapt(input: DeriveInput) -> Result<TokenStream2> {
    let mut extraction: Option<Path> = None;
    let mut presence: Option<Path> = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("adapt") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("extract") {
                extraction = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("presence") {
                presence = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `extract = ...` or `presence = ...`"))
            }
        })?;
    }

    let Some(extraction) = extraction else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Adapt)] requires #[adapt(extract = <strategy>, presence = <strategy>)]",
        ));
    };
    // No presence entry means the type is not presence-aware.
    let presence = presence.unwrap_or_else(|| syn::parse_quote!(Always));

    let extraction = qualify_marker(extraction);
    let presence = qualify_marker(presence);

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::unison::adapt::Adapted for #ident #ty_generics #where_clause {
            type Extraction = #extraction;
            type Presence = #presence;
        }
    })
}

/// Bare marker names resolve against `unison::strategy`; qualified paths are
/// taken as written.
fn qualify_marker(path: Path) -> TokenStream2 {
    if path.leading_colon.is_none() && path.segments.len() == 1 {
        let ident = &path.segments[0].ident;
        quote!(::unison::strategy::#ident)
    } else {
        quote!(#path)
    }
}

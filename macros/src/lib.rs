use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitInt, parse_macro_input};

/// Smallest clock that still yields one pulse per millisecond.
const MIN_CLOCK_HZ: u64 = 1000;

/// Derives the `ClockConfig` trait from a `#[clock(hz = ...)]` attribute.
///
/// The pulses-per-millisecond threshold is left to the trait's default
/// (`CLOCK_HZ / 1000`).
///
/// # Example
///
/// ```ignore
/// use pulse_timer::ClockConfig;
///
/// #[derive(ClockConfig)]
/// #[clock(hz = 80_000_000)]
/// pub struct BoardClock;
/// ```
///
/// This generates:
///
/// ```ignore
/// impl ::pulse_timer::config::ClockConfig for BoardClock {
///     const CLOCK_HZ: u32 = 80_000_000;
/// }
/// ```
///
/// # Requirements
///
/// - Exactly one `#[clock(hz = N)]` attribute
/// - `N` is an integer literal between 1000 and `u32::MAX`
#[proc_macro_derive(ClockConfig, attributes(clock))]
pub fn derive_clock_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match clock_hz(&input) {
        Ok(hz) => {
            let name = &input.ident;
            let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

            let expanded = quote! {
                impl #impl_generics ::pulse_timer::config::ClockConfig for #name #ty_generics #where_clause {
                    const CLOCK_HZ: u32 = #hz;
                }
            };

            TokenStream::from(expanded)
        }
        Err(err) => err.to_compile_error().into(),
    }
}

/// Extract and validate the frequency from the `#[clock(hz = ...)]` attribute.
fn clock_hz(input: &DeriveInput) -> syn::Result<u32> {
    let mut hz: Option<LitInt> = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("clock")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("hz") {
                if hz.is_some() {
                    return Err(meta.error("duplicate `hz` in #[clock(...)]"));
                }
                hz = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported clock property, expected `hz`"))
            }
        })?;
    }

    let Some(lit) = hz else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ClockConfig requires a #[clock(hz = ...)] attribute",
        ));
    };

    let value: u64 = lit.base10_parse()?;
    if value < MIN_CLOCK_HZ {
        return Err(syn::Error::new_spanned(
            &lit,
            "clock frequency must be at least 1000 Hz (one pulse per millisecond)",
        ));
    }

    u32::try_from(value)
        .map_err(|_| syn::Error::new_spanned(&lit, "clock frequency must fit in a u32"))
}

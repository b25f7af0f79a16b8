// #[gdclass(base = Type)] expansion: HostClass impl, base check, and the
// inventory record the runtime registers at init.

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse2, Expr, ItemStruct, Lit, Meta, Token};

struct GdClassArgs {
    base: syn::Path,
    name: Option<String>,
}

fn parse_gdclass_args(attr: TokenStream) -> syn::Result<GdClassArgs> {
    let metas = syn::parse::Parser::parse2(Punctuated::<Meta, Token![,]>::parse_terminated, attr)?;

    let mut base = None;
    let mut name = None;
    for meta in &metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(meta, "expected `key = value`"));
        };
        if nv.path.is_ident("base") {
            match &nv.value {
                Expr::Path(p) => base = Some(p.path.clone()),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "`base` must be a type path, not a string literal.\n\n\
                         Example: #[gdclass(base = Node3D)]",
                    ));
                }
            }
        } else if nv.path.is_ident("name") {
            match &nv.value {
                Expr::Lit(syn::ExprLit { lit: Lit::Str(s), .. }) => name = Some(s.value()),
                other => {
                    return Err(syn::Error::new_spanned(other, "`name` must be a string literal"));
                }
            }
        } else {
            return Err(syn::Error::new_spanned(
                &nv.path,
                "unknown #[gdclass] key; expected `base` or `name`",
            ));
        }
    }

    let base = base.ok_or_else(|| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[gdclass] requires a `base` naming the engine class to extend.\n\n\
             Example:\n\
             \x20   #[gdclass(base = Node3D)]\n\
             \x20   #[derive(Default)]\n\
             \x20   pub struct Spinner { ... }",
        )
    })?;
    Ok(GdClassArgs { base, name })
}

pub fn expand_gdclass(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args = parse_gdclass_args(attr)?;
    let input: ItemStruct = parse2(item)?;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[gdclass] structs cannot be generic: the engine registers one class per type",
        ));
    }

    let ident = &input.ident;
    let base = &args.base;
    let class_name = args.name.unwrap_or_else(|| ident.to_string());

    Ok(quote! {
        #input

        // Fails with a readable bound error when `base` is not a generated engine class.
        const _: () = {
            fn _gdbind_base_is_engine_class() {
                fn assert_engine_class<T: ::gdbind::runtime::EngineClass>() {}
                assert_engine_class::<#base>();
            }
        };

        impl ::gdbind::runtime::HostClass for #ident {
            type Base = #base;
            const CLASS_NAME: &'static str = #class_name;
        }

        ::gdbind::runtime::__inventory::submit! {
            ::gdbind::runtime::HostClassRegistration {
                class_name: #class_name,
                record: ::gdbind::runtime::ClassRecord::of::<#ident>,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_required() {
        let err = expand_gdclass(quote!(), quote!(struct S;)).err().map(|e| e.to_string());
        assert!(err.is_some_and(|e| e.contains("requires a `base`")));
    }

    #[test]
    fn string_base_is_rejected() {
        let err =
            expand_gdclass(quote!(base = "Node"), quote!(struct S;)).err().map(|e| e.to_string());
        assert!(err.is_some_and(|e| e.contains("type path")));
    }

    #[test]
    fn name_overrides_the_class_name() {
        let out = expand_gdclass(quote!(base = Node, name = "Renamed"), quote!(struct S;))
            .map(|t| t.to_string())
            .unwrap_or_default();
        assert!(out.contains("\"Renamed\""));
        assert!(out.contains("type Base = Node"));
    }
}

// #[gdclass_impl] expansion: collects #[gdvirtual] methods and registers a
// trampoline per override with the class's virtual table.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse2, Expr, FnArg, ImplItem, ImplItemFn, ItemImpl, Lit, Meta, Pat, ReturnType, Type};

use crate::arg_type::{self, ArgKind};

struct ParamInfo {
    ty: Type,
    kind: ArgKind,
}

struct VirtualInfo {
    method: syn::Ident,
    engine_name: String,
    params: Vec<ParamInfo>,
    ret: Option<(Type, ArgKind)>,
}

fn is_gdvirtual(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("gdvirtual")
}

/// `#[gdvirtual]` or `#[gdvirtual(name = "_draw")]`.
fn engine_name(method: &ImplItemFn, attr: &syn::Attribute) -> syn::Result<String> {
    if let Meta::List(_) = &attr.meta {
        let nv: syn::MetaNameValue = attr.parse_args()?;
        if !nv.path.is_ident("name") {
            return Err(syn::Error::new_spanned(&nv.path, "expected `name = \"...\"`"));
        }
        return match &nv.value {
            Expr::Lit(syn::ExprLit { lit: Lit::Str(s), .. }) => {
                // The name doubles as the signature marker's type name.
                syn::parse_str::<syn::Ident>(&s.value())
                    .map(|_| s.value())
                    .map_err(|_| syn::Error::new_spanned(s, "`name` must be an identifier"))
            }
            other => Err(syn::Error::new_spanned(other, "`name` must be a string literal")),
        };
    }
    Ok(method.sig.ident.to_string())
}

fn parse_virtual(method: &ImplItemFn, attr: &syn::Attribute) -> syn::Result<VirtualInfo> {
    let sig = &method.sig;
    if sig.asyncness.is_some() || !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(sig, "#[gdvirtual] methods cannot be async or generic"));
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(r)) if r.reference.is_some() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                sig,
                "#[gdvirtual] methods take `&self` or `&mut self`",
            ));
        }
    }

    let mut params = Vec::new();
    for input in inputs {
        let FnArg::Typed(pt) = input else {
            continue;
        };
        if !matches!(&*pt.pat, Pat::Ident(_) | Pat::Wild(_)) {
            return Err(syn::Error::new_spanned(
                &pt.pat,
                "#[gdvirtual] parameters must be plain identifiers",
            ));
        }
        let ty = (*pt.ty).clone();
        let kind = arg_type::classify_param(&ty)?;
        params.push(ParamInfo { ty, kind });
    }

    let ret = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => {
            let ty = (**ty).clone();
            let kind = arg_type::classify_return(&ty)?;
            Some((ty, kind))
        }
    };

    Ok(VirtualInfo {
        method: sig.ident.clone(),
        engine_name: engine_name(method, attr)?,
        params,
        ret,
    })
}

pub fn expand_gdclass_impl(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[gdclass_impl] takes no arguments"));
    }
    let mut input: ItemImpl = parse2(item)?;
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(path, "#[gdclass_impl] goes on an inherent impl block"));
    }
    let self_ty = (*input.self_ty).clone();

    let mut virtuals = Vec::new();
    for item in &mut input.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        let Some(pos) = method.attrs.iter().position(is_gdvirtual) else {
            continue;
        };
        let attr = method.attrs.remove(pos);
        virtuals.push(parse_virtual(method, &attr)?);
    }

    let adds = virtuals.iter().map(|v| {
        let name = &v.engine_name;
        let method = &v.method;
        let locals: Vec<_> = (0..v.params.len()).map(|i| format_ident!("a{}", i)).collect();
        let reads = v.params.iter().enumerate().map(|(i, p)| {
            let local = &locals[i];
            let ty = &p.ty;
            let read = arg_type::read_arg(&p.kind, ty, i);
            quote! { let #local: #ty = unsafe { #read }; }
        });
        let call = quote! { this.#method(#(#locals),*) };
        let body = match &v.ret {
            None => quote! { #call; },
            Some((ty, kind)) => {
                let write = arg_type::write_ret(kind, ty);
                quote! {
                    let result: #ty = #call;
                    unsafe { #write };
                }
            }
        };
        quote! {
            table.add::<#self_ty>(#name, |this, args, ret| {
                let _ = (&args, &ret);
                #(#reads)*
                #body
            })?;
        }
    });

    let checks = virtuals.iter().map(|v| {
        let marker = format_ident!("{}", v.engine_name);
        let params = v.params.iter().map(|p| &p.ty);
        let ret = v.ret.as_ref().map(|(ty, _)| quote! { -> #ty });
        quote! {
            const _: () = ::gdbind::runtime::check_override::<
                <#self_ty as ::gdbind::runtime::HostClass>::Base,
                ::gdbind::classes::virtuals::#marker,
            >(::core::marker::PhantomData::<fn(#(#params),*) #ret>);
        }
    });

    Ok(quote! {
        #input

        #(#checks)*

        const _: () = {
            fn register(
                table: &mut ::gdbind::runtime::VirtualTable,
            ) -> ::gdbind::runtime::BindResult<()> {
                #(#adds)*
                let _ = table;
                Ok(())
            }

            ::gdbind::runtime::__inventory::submit! {
                ::gdbind::runtime::VirtualRegistration {
                    class_name: <#self_ty as ::gdbind::runtime::HostClass>::CLASS_NAME,
                    register,
                }
            }
        };
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(src: TokenStream) -> Result<String, String> {
        expand_gdclass_impl(TokenStream::new(), src)
            .map(|t| t.to_string())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn markers_are_stripped_and_registered() {
        let out = expand(quote! {
            impl Editor {
                #[gdvirtual]
                fn _confirm_code_completion(&mut self, replace: bool) {}
                fn helper(&self) {}
            }
        })
        .unwrap();
        assert!(!out.contains("gdvirtual"));
        assert!(out.contains("\"_confirm_code_completion\""));
        assert!(out.contains("fn helper"));
    }

    #[test]
    fn renamed_override() {
        let out = expand(quote! {
            impl Editor {
                #[gdvirtual(name = "_draw")]
                fn paint(&mut self) {}
            }
        })
        .unwrap();
        assert!(out.contains("\"_draw\""));
        assert!(out.contains("virtuals :: _draw"));
    }

    #[test]
    fn overrides_are_checked_against_the_engine_signature() {
        let out = expand(quote! {
            impl Editor {
                #[gdvirtual]
                fn _has_point(&self, point: Vector2) -> bool { true }
            }
        })
        .unwrap();
        assert!(out.contains("check_override"));
        assert!(out.contains("virtuals :: _has_point"));
        assert!(out.contains("fn (Vector2) -> bool"));
    }

    #[test]
    fn override_names_must_be_identifiers() {
        let err = expand(quote! {
            impl Editor {
                #[gdvirtual(name = "not an ident")]
                fn paint(&mut self) {}
            }
        })
        .unwrap_err();
        assert!(err.contains("identifier"));
    }

    #[test]
    fn static_methods_are_rejected() {
        let err = expand(quote! {
            impl Editor {
                #[gdvirtual]
                fn _ready() {}
            }
        })
        .unwrap_err();
        assert!(err.contains("&self"));
    }
}

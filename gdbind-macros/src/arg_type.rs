// How a #[gdvirtual] parameter or return type crosses the boundary.
//
// Engine ints and floats are 64-bit. Narrower Rust numerics are read wide
// and cast, so an override can take `i32` where the engine sends `int`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

pub enum ArgKind {
    /// Encoded exactly as the Rust type.
    Direct,
    NarrowInt,
    NarrowFloat,
    /// `Option<Borrowed<T>>` parameter or `Option<T>` return.
    Object(Type),
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last(),
        _ => None,
    }
}

fn single_generic(seg: &syn::PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(t)) if args.args.len() == 1 => Some(t),
        _ => None,
    }
}

fn numeric_kind(ty: &Type) -> Option<ArgKind> {
    let seg = last_segment(ty)?;
    match seg.ident.to_string().as_str() {
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => Some(ArgKind::NarrowInt),
        "f32" => Some(ArgKind::NarrowFloat),
        _ => None,
    }
}

pub fn classify_param(ty: &Type) -> syn::Result<ArgKind> {
    if let Some(kind) = numeric_kind(ty) {
        return Ok(kind);
    }
    if let Type::Reference(r) = ty {
        return Err(syn::Error::new_spanned(
            r,
            "#[gdvirtual] parameters are taken by value; the engine keeps its own copy",
        ));
    }
    if let Some(seg) = last_segment(ty) {
        if seg.ident == "Borrowed" {
            return Err(syn::Error::new_spanned(
                ty,
                "object parameters may be null; take them as `Option<Borrowed<T>>`",
            ));
        }
        if seg.ident == "Option" {
            let inner = single_generic(seg).and_then(last_segment);
            return match inner {
                Some(inner) if inner.ident == "Borrowed" => match single_generic(inner) {
                    Some(class) => Ok(ArgKind::Object(class.clone())),
                    None => Err(syn::Error::new_spanned(ty, "expected `Option<Borrowed<Class>>`")),
                },
                _ => Err(syn::Error::new_spanned(ty, "only object parameters may be optional")),
            };
        }
    }
    Ok(ArgKind::Direct)
}

pub fn classify_return(ty: &Type) -> syn::Result<ArgKind> {
    if let Some(kind) = numeric_kind(ty) {
        return Ok(kind);
    }
    if let Some(seg) = last_segment(ty) {
        if seg.ident == "Option" {
            return match single_generic(seg) {
                Some(class) => Ok(ArgKind::Object(class.clone())),
                None => Err(syn::Error::new_spanned(ty, "expected `Option<Class>`")),
            };
        }
    }
    Ok(ArgKind::Direct)
}

/// Expression reading argument `index` from `args` (an `ArgBlock`).
pub fn read_arg(kind: &ArgKind, ty: &Type, index: usize) -> TokenStream {
    match kind {
        ArgKind::Direct => quote! { args.get::<#ty>(#index) },
        ArgKind::NarrowInt => quote! { args.get::<i64>(#index) as #ty },
        ArgKind::NarrowFloat => quote! { args.get::<f64>(#index) as f32 },
        ArgKind::Object(class) => quote! { args.get_object::<#class>(#index) },
    }
}

/// Statement moving `result` into `ret` (a `RetSlot`).
pub fn write_ret(kind: &ArgKind, ty: &Type) -> TokenStream {
    match kind {
        ArgKind::Direct => quote! { ret.set::<#ty>(result) },
        ArgKind::NarrowInt => quote! { ret.set::<i64>(i64::from(result)) },
        ArgKind::NarrowFloat => quote! { ret.set::<f64>(f64::from(result)) },
        ArgKind::Object(class) => quote! { ret.set_object::<#class>(result) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> Type {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn numerics_are_widened() {
        assert!(matches!(classify_param(&ty("i32")), Ok(ArgKind::NarrowInt)));
        assert!(matches!(classify_param(&ty("f32")), Ok(ArgKind::NarrowFloat)));
        assert!(matches!(classify_param(&ty("i64")), Ok(ArgKind::Direct)));
    }

    #[test]
    fn objects_must_be_optional() {
        assert!(matches!(classify_param(&ty("Option<Borrowed<Node>>")), Ok(ArgKind::Object(_))));
        assert!(classify_param(&ty("Borrowed<Node>")).is_err());
        assert!(classify_param(&ty("Option<i64>")).is_err());
        assert!(classify_param(&ty("&GString")).is_err());
    }

    #[test]
    fn optional_returns_are_objects() {
        assert!(matches!(classify_return(&ty("Option<Node>")), Ok(ArgKind::Object(_))));
        assert!(matches!(classify_return(&ty("TypedArray<Dictionary>")), Ok(ArgKind::Direct)));
    }
}

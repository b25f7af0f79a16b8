// gdbind-macros: proc macros for #[gdclass], #[gdclass_impl], #[gdvirtual].

mod arg_type;
mod gdclass;
mod gdclass_impl;

/// Attribute macro declaring a Rust struct as a host class extending an
/// engine class. The struct holds the instance's Rust data and must
/// implement `Default`.
///
/// # Example
/// ```ignore
/// #[gdclass(base = CodeEdit)]
/// #[derive(Default)]
/// pub struct ScriptEditor {
///     confirmed: u32,
/// }
/// ```
///
/// `name = "..."` overrides the engine-side class name (defaults to the
/// struct name).
#[proc_macro_attribute]
pub fn gdclass(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    match gdclass::expand_gdclass(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Attribute macro for an impl block on a `#[gdclass]` struct. Methods
/// marked `#[gdvirtual]` override the engine overridable of the same name.
///
/// # Example
/// ```ignore
/// #[gdclass_impl]
/// impl ScriptEditor {
///     #[gdvirtual]
///     fn _confirm_code_completion(&mut self, replace: bool) {
///         self.confirmed += 1;
///     }
///
///     fn helper(&self) -> u32 { self.confirmed }  // plain Rust method
/// }
/// ```
#[proc_macro_attribute]
pub fn gdclass_impl(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    match gdclass_impl::expand_gdclass_impl(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Marker consumed by `#[gdclass_impl]`. On its own it is an error: an
/// override outside a `#[gdclass_impl]` block would never be registered.
#[proc_macro_attribute]
pub fn gdvirtual(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item: proc_macro2::TokenStream = item.into();
    syn::Error::new_spanned(item, "#[gdvirtual] must be used inside a #[gdclass_impl] block")
        .to_compile_error()
        .into()
}

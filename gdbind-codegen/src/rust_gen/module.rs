// Module files: `<module>/mod.rs` per feature and the crate's `lib.rs`.

use std::collections::BTreeSet;

use crate::context::CodegenContext;
use crate::naming::{to_screaming_snake, to_snake_case};

use super::{cfg_attr, HEADER};

/// `mod.rs` for one module: a file per class, classes re-exported.
pub fn generate_module_mod(ctx: &CodegenContext, module: &str) -> String {
    let classes = ctx.classes_in(module);
    let mut out = String::with_capacity(1024);
    out.push_str(HEADER);
    out.push('\n');
    for class in &classes {
        out.push_str(&format!("pub mod {};\n", to_snake_case(&class.name)));
    }
    out.push('\n');
    for class in &classes {
        let snake = to_snake_case(&class.name);
        if ctx.is_singleton(&class.name) {
            let single = to_screaming_snake(&class.name);
            out.push_str(&format!("pub use {snake}::{{{}, {single}}};\n", class.name));
        } else {
            out.push_str(&format!("pub use {snake}::{};\n", class.name));
        }
    }
    out
}

/// Top-level `lib.rs`. The `manual` module is hand-written and lives next
/// to the generated tree; generated modules are left alone by rustfmt.
pub fn generate_lib_rs(ctx: &CodegenContext) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(HEADER);
    out.push_str(&format!("// Engine version: {}\n\n", ctx.engine_version));
    out.push_str("//! Generated engine class façades, one Cargo feature per module.\n\n");
    out.push_str(
        "#[rustfmt::skip]\npub mod bind_table;\n\
         #[rustfmt::skip]\npub mod global_enums;\n\
         pub mod manual;\n\
         #[rustfmt::skip]\npub mod virtuals;\n\n",
    );
    for module in ctx.modules() {
        let features: BTreeSet<String> =
            ctx.feature_of_module(module).map(str::to_owned).into_iter().collect();
        out.push_str(&cfg_attr(&features, ""));
        out.push_str(&format!("#[rustfmt::skip]\npub mod {module};\n"));
        out.push_str(&cfg_attr(&features, ""));
        out.push_str(&format!("pub use self::{module}::*;\n"));
    }
    out.push_str("\npub use bind_table::load_method_binds;\npub use global_enums::*;\n");
    out
}

/// `virtuals.rs`: one marker type per overridable name, the `M` in
/// `Overridable<M>`.
pub fn generate_virtual_markers(ctx: &CodegenContext) -> String {
    let names: BTreeSet<&str> = ctx
        .classes
        .values()
        .flat_map(|c| c.methods.iter().filter(|m| m.is_virtual).map(|m| m.name.as_str()))
        .collect();
    let mut out = String::with_capacity(1024);
    out.push_str(HEADER);
    out.push_str("\n//! Marker types naming engine overridables in `Overridable` bounds.\n\n");
    out.push_str("#![allow(non_camel_case_types)]\n\n");
    for name in names {
        out.push_str(&format!("pub struct {name};\n"));
    }
    out
}

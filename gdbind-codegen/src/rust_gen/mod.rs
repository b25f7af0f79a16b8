// Rust code generation: renders every output file into memory. The caller
// writes and verifies them.

pub mod bind_table;
pub mod classes;
pub mod enums;
pub mod module;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::context::CodegenContext;
use crate::naming::to_snake_case;

pub(crate) const HEADER: &str =
    "// Generated by gdbind-codegen from extension_api.json. Do not edit.\n";

/// Every generated file, keyed by its path relative to the output `src/`.
pub fn generate(ctx: &CodegenContext) -> BTreeMap<PathBuf, String> {
    let mut files = BTreeMap::new();
    for module in ctx.modules() {
        let dir = PathBuf::from(module);
        for class in ctx.classes_in(module) {
            let file = dir.join(format!("{}.rs", to_snake_case(&class.name)));
            files.insert(file, classes::generate_class(class, ctx));
        }
        files.insert(dir.join("mod.rs"), module::generate_module_mod(ctx, module));
    }
    files.insert(PathBuf::from("bind_table.rs"), bind_table::generate_bind_table(ctx));
    files.insert(PathBuf::from("global_enums.rs"), enums::generate_global_enums(ctx));
    files.insert(PathBuf::from("lib.rs"), module::generate_lib_rs(ctx));
    files.insert(PathBuf::from("virtuals.rs"), module::generate_virtual_markers(ctx));
    files
}

/// Features gating `class`: its own module's, if any.
pub(crate) fn class_features(ctx: &CodegenContext, class: &str) -> BTreeSet<String> {
    ctx.feature_of(class).map(str::to_owned).into_iter().collect()
}

/// `#[cfg(...)]` line for a feature set; empty when nothing gates.
pub(crate) fn cfg_attr(features: &BTreeSet<String>, indent: &str) -> String {
    let clauses: Vec<String> = features.iter().map(|f| format!("feature = \"{f}\"")).collect();
    match clauses.len() {
        0 => String::new(),
        1 => format!("{indent}#[cfg({})]\n", clauses[0]),
        _ => format!("{indent}#[cfg(all({}))]\n", clauses.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfg_lines() {
        let mut features = BTreeSet::new();
        assert_eq!(cfg_attr(&features, ""), "");
        features.insert("gui".to_owned());
        assert_eq!(cfg_attr(&features, "    "), "    #[cfg(feature = \"gui\")]\n");
        features.insert("csg".to_owned());
        assert_eq!(cfg_attr(&features, ""), "#[cfg(all(feature = \"csg\", feature = \"gui\"))]\n");
    }
}

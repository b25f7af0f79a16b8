// Post-generate checks on the written tree.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::context::CodegenContext;
use crate::naming::to_snake_case;

/// Problems found in `out`; empty when the tree is complete.
pub fn verify_output(
    ctx: &CodegenContext,
    files: &BTreeMap<PathBuf, String>,
    out: &Path,
) -> Vec<String> {
    let mut errors = Vec::new();

    // 1. Crate-level files exist and are non-empty.
    for name in ["lib.rs", "bind_table.rs", "global_enums.rs", "virtuals.rs"] {
        check_file(&out.join(name), &mut errors);
    }

    // 2. Per-module mod.rs, and a file per class.
    for module in ctx.modules() {
        check_file(&out.join(module).join("mod.rs"), &mut errors);
        for class in ctx.classes_in(module) {
            let file = format!("{}.rs", to_snake_case(&class.name));
            check_file(&out.join(module).join(file), &mut errors);
        }
    }

    // 3. The hand-written module lib.rs declares.
    let manual = out.join("manual");
    if !manual.join("mod.rs").exists() && !out.join("manual.rs").exists() {
        errors.push(format!("manual module missing under {}", out.display()));
    }

    // 4. No inherent impl block defines a name twice.
    for (path, code) in files {
        for (block, name) in duplicate_fns(code) {
            errors.push(format!("{}: `{name}` defined twice in `impl {block}`", path.display()));
        }
    }
    errors
}

fn check_file(path: &Path, errors: &mut Vec<String>) {
    match std::fs::metadata(path) {
        Ok(m) if m.len() == 0 => errors.push(format!("output empty: {}", path.display())),
        Err(_) => errors.push(format!("output missing: {}", path.display())),
        _ => {}
    }
}

/// `(impl target, fn name)` for every repeated `pub fn` in a top-level
/// inherent impl. Relies on the generator's formatting: blocks open with
/// `impl X {` and close with `}` at column 0.
pub fn duplicate_fns(code: &str) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let mut current: Option<(String, HashSet<String>)> = None;
    for line in code.lines() {
        if let Some(target) = line.strip_prefix("impl ").and_then(|rest| rest.strip_suffix(" {")) {
            if !target.contains(" for ") {
                current = Some((target.to_owned(), HashSet::new()));
            }
            continue;
        }
        if line == "}" {
            current = None;
            continue;
        }
        let Some((target, seen)) = current.as_mut() else {
            continue;
        };
        let Some(rest) = line.trim_start().strip_prefix("pub fn ") else {
            continue;
        };
        let ident = |c: &char| c.is_alphanumeric() || *c == '_' || *c == '#';
        let name: String = rest.chars().take_while(ident).collect();
        if !seen.insert(name.clone()) {
            found.push((target.clone(), name));
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_repeated_names_per_block() {
        let code = "impl Foo {\n    pub fn a(&self) {}\n    pub fn b(&self) {}\n\
                    \x20   pub fn a(&self, x: i64) {}\n}\n\
                    impl Bar {\n    pub fn a(&self) {}\n}\n\
                    impl Deref for Foo {\n    fn deref(&self) -> &Bar {}\n}\n";
        assert_eq!(duplicate_fns(code), vec![("Foo".to_owned(), "a".to_owned())]);
    }
}

// bind_table.rs: one struct of resolved method binds per class, filled in a
// single pass so startup reports every missing method at once.

use crate::context::CodegenContext;
use crate::naming::to_snake_case;

use super::classes::bound_methods;
use super::{cfg_attr, class_features, HEADER};

pub fn generate_bind_table(ctx: &CodegenContext) -> String {
    let mut structs = String::new();
    let mut fields = String::new();
    let mut inits = String::new();
    let mut total = 0usize;

    for class in ctx.classes.values() {
        let name = &class.name;
        let snake = to_snake_case(name);
        let class_cfg = cfg_attr(&class_features(ctx, name), "");
        let methods = bound_methods(class, ctx);
        total += methods.len();

        structs.push_str(&class_cfg);
        if methods.is_empty() {
            structs.push_str(&format!("pub struct {name}Binds {{}}\n\n"));
        } else {
            structs.push_str(&format!("pub struct {name}Binds {{\n"));
        }
        let mut resolves = String::new();
        for m in &methods {
            let cfg = cfg_attr(&m.features, "    ");
            structs.push_str(&cfg);
            structs.push_str(&format!("    pub {}: MethodBind,\n", m.rust_name));
            resolves.push_str(&cfg_attr(&m.features, "            "));
            resolves.push_str(&format!(
                "            {}: r.resolve(\"{name}\", \"{}\", {}),\n",
                m.rust_name, m.info.name, m.info.hash
            ));
        }
        if !methods.is_empty() {
            structs.push_str("}\n\n");
        }

        fields.push_str(&cfg_attr(&class_features(ctx, name), "    "));
        fields.push_str(&format!("    pub {snake}: {name}Binds,\n"));

        inits.push_str(&cfg_attr(&class_features(ctx, name), "        "));
        if methods.is_empty() {
            inits.push_str(&format!("        {snake}: {name}Binds {{}},\n"));
        } else {
            inits.push_str(&format!("        {snake}: {name}Binds {{\n{resolves}        }},\n"));
        }
    }

    let mut out = String::with_capacity(structs.len() + fields.len() + inits.len() + 2048);
    out.push_str(HEADER);
    out.push_str(&format!("// {total} method binds before feature selection.\n\n"));
    out.push_str("use std::sync::OnceLock;\n\n");
    out.push_str("use gdbind_runtime::{fatal, BindResolver, BindResult, MethodBind};\n\n");
    out.push_str("/// Resolved binds for every compiled-in class, keyed by class then method.\n");
    out.push_str(&format!("pub struct BindTable {{\n{fields}}}\n\n"));
    out.push_str(&structs);
    out.push_str(
        "static TABLE: OnceLock<BindTable> = OnceLock::new();\n\n\
         /// Resolve every method bind of the enabled features. Runs once; later\n\
         /// calls return the table already loaded. Fails with the full list of\n\
         /// methods the engine does not know.\n\
         pub fn load_method_binds() -> BindResult<&'static BindTable> {\n\
         \x20   if let Some(table) = TABLE.get() {\n\
         \x20       return Ok(table);\n\
         \x20   }\n\
         \x20   let mut r = BindResolver::new();\n\
         \x20   let table = BindTable {\n",
    );
    out.push_str(&inits);
    out.push_str(
        "    };\n\
         \x20   let resolved = r.resolved();\n\
         \x20   r.finish()?;\n\
         \x20   log::info!(\"loaded {resolved} method binds\");\n\
         \x20   Ok(TABLE.get_or_init(|| table))\n\
         }\n\n\
         /// The loaded table. Loads on first use; an incomplete table is fatal.\n\
         pub fn binds() -> &'static BindTable {\n\
         \x20   match load_method_binds() {\n\
         \x20       Ok(table) => table,\n\
         \x20       Err(err) => fatal(&format!(\"method bind table: {err}\")),\n\
         \x20   }\n\
         }\n",
    );
    out
}

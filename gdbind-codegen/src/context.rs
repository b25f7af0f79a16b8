// Build context: the filtered class set, module and feature mapping,
// inheritance chains and type lookups shared by every emitter.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::{CodegenConfig, CORE_MODULE};
use crate::error::{CodegenError, CodegenResult};
use crate::naming::to_snake_case;
use crate::schema::{ApiFile, ClassInfo, EnumInfo};

pub struct CodegenContext {
    /// Classes that survive the blocklist, by name.
    pub classes: BTreeMap<String, ClassInfo>,
    pub global_enums: Vec<EnumInfo>,
    pub singletons: HashSet<String>,
    /// Engine version string, for file headers.
    pub engine_version: String,
    module_of: HashMap<String, String>,
    /// Module -> modules whose classes it may reference (itself included).
    requires: HashMap<String, BTreeSet<String>>,
    /// Modules in declaration order, `core` first.
    modules: Vec<String>,
}

impl CodegenContext {
    pub fn new(api: ApiFile, config: &CodegenConfig) -> CodegenResult<Self> {
        let blocklist = &config.blocklist;
        let mut classes: BTreeMap<String, ClassInfo> = BTreeMap::new();
        for mut class in api.classes {
            if blocklist.blocks_class(&class.name) {
                log::info!("blocklisted class {}", class.name);
                continue;
            }
            let name = class.name.clone();
            class.methods.retain(|m| {
                let keep = !blocklist.blocks_method(&name, &m.name);
                if !keep {
                    log::info!("blocklisted method {name}.{}", m.name);
                }
                keep
            });
            classes.insert(class.name.clone(), class);
        }

        // Drop descendants of blocklisted classes until the set is closed.
        let mut removed: HashSet<String> = blocklist.classes.iter().cloned().collect();
        loop {
            let orphans: Vec<(String, String)> = classes
                .values()
                .filter_map(|c| {
                    let base = c.inherits.as_ref()?;
                    (!classes.contains_key(base)).then(|| (c.name.clone(), base.clone()))
                })
                .collect();
            if orphans.is_empty() {
                break;
            }
            for (name, base) in orphans {
                if !removed.contains(&base) {
                    return Err(CodegenError::MissingBase { class: name, base });
                }
                log::warn!("dropping {name}: base {base} is blocklisted");
                classes.remove(&name);
                removed.insert(name);
            }
        }

        let mut modules = vec![CORE_MODULE.to_owned()];
        modules.extend(config.features.keys().filter(|f| f.as_str() != CORE_MODULE).cloned());

        let mut module_of = HashMap::new();
        for name in classes.keys() {
            let module =
                config.modules.get(name).cloned().unwrap_or_else(|| CORE_MODULE.to_owned());
            if !modules.contains(&module) {
                return Err(CodegenError::UnknownModule { class: name.clone(), module });
            }
            module_of.insert(name.clone(), module);
        }

        let mut requires = HashMap::new();
        for module in &modules {
            let mut closure = BTreeSet::new();
            let mut stack = vec![module.clone()];
            while let Some(m) = stack.pop() {
                if closure.insert(m.clone()) {
                    stack.extend(config.features.get(&m).into_iter().flatten().cloned());
                }
            }
            closure.insert(CORE_MODULE.to_owned());
            requires.insert(module.clone(), closure);
        }

        let ctx = CodegenContext {
            classes,
            global_enums: api.global_enums,
            singletons: api.singletons.into_iter().map(|s| s.ty).collect(),
            engine_version: api.header.version_full_name,
            module_of,
            requires,
            modules,
        };

        for class in ctx.classes.values() {
            if let Some(base) = &class.inherits {
                if !ctx.reaches(&class.name, base) {
                    return Err(CodegenError::BaseNotReachable {
                        class: class.name.clone(),
                        feature: ctx.module_of(&class.name).to_owned(),
                        base: base.clone(),
                        base_feature: ctx.module_of(base).to_owned(),
                    });
                }
            }
        }
        Ok(ctx)
    }

    /// Modules that contain at least one class, `core` first.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .map(String::as_str)
            .filter(|m| self.module_of.values().any(|v| v == m))
    }

    pub fn module_of(&self, class: &str) -> &str {
        self.module_of.get(class).map(String::as_str).unwrap_or(CORE_MODULE)
    }

    /// Cargo feature gating `module`, or `None` for `core`.
    pub fn feature_of_module<'a>(&self, module: &'a str) -> Option<&'a str> {
        (module != CORE_MODULE).then_some(module)
    }

    pub fn feature_of(&self, class: &str) -> Option<&str> {
        self.feature_of_module(self.module_of(class))
    }

    /// Classes of `module`, sorted by name.
    pub fn classes_in(&self, module: &str) -> Vec<&ClassInfo> {
        self.classes.values().filter(|c| self.module_of(&c.name) == module).collect()
    }

    /// Ancestors of `class`, nearest first.
    pub fn ancestors(&self, class: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.classes.get(class).and_then(|c| c.inherits.as_deref());
        while let Some(name) = current {
            chain.push(name);
            current = self.classes.get(name).and_then(|c| c.inherits.as_deref());
        }
        chain
    }

    pub fn is_ref_counted(&self, class: &str) -> bool {
        class == "RefCounted"
            || self.classes.get(class).is_some_and(|c| c.is_refcounted)
            || self.ancestors(class).contains(&"RefCounted")
    }

    pub fn is_singleton(&self, class: &str) -> bool {
        self.singletons.contains(class)
    }

    /// Whether code in `from`'s module may name `to` without extra gating.
    pub fn reaches(&self, from: &str, to: &str) -> bool {
        let target = self.module_of(to);
        self.requires.get(self.module_of(from)).is_some_and(|r| r.contains(target))
    }

    /// Module path of the class file, e.g. `crate::csg::csg_torus_3d`.
    pub fn class_module_path(&self, class: &str) -> String {
        format!("crate::{}::{}", self.module_of(class), to_snake_case(class))
    }

    pub fn has_global_enum(&self, name: &str) -> bool {
        self.global_enums.iter().any(|e| e.name == name)
    }

    /// Look up `Class.Enum` or a global enum name.
    pub fn find_enum(&self, qualified: &str) -> Option<(Option<&str>, &EnumInfo)> {
        match qualified.split_once('.') {
            Some((class, name)) => {
                let owner = self.classes.get(class)?;
                let e = owner.enums.iter().find(|e| e.name == name)?;
                Some((Some(owner.name.as_str()), e))
            }
            None => self.global_enums.iter().find(|e| e.name == qualified).map(|e| (None, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GdbindConfig;

    fn api() -> ApiFile {
        serde_json::from_str(
            r#"{
              "header": {"version_major": 4, "version_minor": 2},
              "classes": [
                {"name": "Object", "is_instantiable": true},
                {"name": "RefCounted", "inherits": "Object", "is_refcounted": true},
                {"name": "Resource", "inherits": "RefCounted", "is_refcounted": true},
                {"name": "Node", "inherits": "Object"},
                {"name": "Node3D", "inherits": "Node"},
                {"name": "CSGShape3D", "inherits": "Node3D"}
              ]
            }"#,
        )
        .unwrap()
    }

    const BARE: &str = "[codegen]\napi = \"\"\nout = \"\"\n";

    fn config(src: &str) -> CodegenConfig {
        toml::from_str::<GdbindConfig>(src).unwrap().codegen
    }

    #[test]
    fn chains_and_refcount_flags() {
        let ctx = CodegenContext::new(api(), &config(BARE)).unwrap();
        assert_eq!(ctx.ancestors("CSGShape3D"), vec!["Node3D", "Node", "Object"]);
        assert!(ctx.is_ref_counted("Resource"));
        assert!(!ctx.is_ref_counted("Node"));
        assert_eq!(ctx.class_module_path("CSGShape3D"), "crate::core::csg_shape_3d");
    }

    #[test]
    fn blocklisted_bases_drop_their_descendants() {
        let cfg = config(&format!("{BARE}[codegen.blocklist]\nclasses = [\"Node3D\"]\n"));
        let ctx = CodegenContext::new(api(), &cfg).unwrap();
        assert!(!ctx.classes.contains_key("Node3D"));
        assert!(!ctx.classes.contains_key("CSGShape3D"));
        assert!(ctx.classes.contains_key("Node"));
    }

    #[test]
    fn bases_must_be_reachable_from_the_feature() {
        let cfg = config(&format!(
            "{BARE}[codegen.features]\nscene_3d = []\ncsg = []\n\
             [codegen.modules]\nNode3D = \"scene_3d\"\nCSGShape3D = \"csg\"\n"
        ));
        let err = CodegenContext::new(api(), &cfg);
        assert!(matches!(err, Err(CodegenError::BaseNotReachable { .. })));

        let cfg = config(&format!(
            "{BARE}[codegen.features]\nscene_3d = []\ncsg = [\"scene_3d\"]\n\
             [codegen.modules]\nNode3D = \"scene_3d\"\nCSGShape3D = \"csg\"\n"
        ));
        let ctx = CodegenContext::new(api(), &cfg).unwrap();
        assert_eq!(ctx.feature_of("CSGShape3D"), Some("csg"));
        assert_eq!(ctx.feature_of("Node"), None);
        assert_eq!(ctx.modules().collect::<Vec<_>>(), vec!["core", "csg", "scene_3d"]);
    }

    #[test]
    fn unknown_modules_are_rejected() {
        let cfg = config(&format!("{BARE}[codegen.modules]\nNode = \"nowhere\"\n"));
        let err = CodegenContext::new(api(), &cfg);
        assert!(matches!(err, Err(CodegenError::UnknownModule { .. })));
    }
}

// Generator configuration, deserialized from gdbind.toml.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level config file.
#[derive(Debug, Deserialize)]
pub struct GdbindConfig {
    pub codegen: CodegenConfig,
}

#[derive(Debug, Deserialize)]
pub struct CodegenConfig {
    /// Engine class dump, relative to the config file.
    pub api: String,
    /// Output `src` directory of the classes crate, relative to the config file.
    pub out: String,
    /// Feature-gated modules and the features each one requires. Classes in
    /// the `core` module are never gated.
    #[serde(default)]
    pub features: BTreeMap<String, Vec<String>>,
    /// Class name to module. Unlisted classes land in `core`.
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
    #[serde(default)]
    pub blocklist: Blocklist,
}

#[derive(Debug, Default, Deserialize)]
pub struct Blocklist {
    #[serde(default)]
    pub classes: Vec<String>,
    /// Entries in `Class.method` form.
    #[serde(default)]
    pub methods: Vec<String>,
}

impl Blocklist {
    pub fn blocks_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn blocks_method(&self, class: &str, method: &str) -> bool {
        self.methods
            .iter()
            .filter_map(|entry| entry.split_once('.'))
            .any(|(c, m)| c == class && m == method)
    }
}

pub const CORE_MODULE: &str = "core";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let cfg: GdbindConfig = toml::from_str(
            r#"
            [codegen]
            api = "api/extension_api.json"
            out = "src"

            [codegen.features]
            scene_3d = []
            csg = ["scene_3d"]

            [codegen.modules]
            Node3D = "scene_3d"
            CSGTorus3D = "csg"

            [codegen.blocklist]
            classes = ["SoftBody3D"]
            methods = ["Object.emit_signal"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.codegen.features["csg"], vec!["scene_3d".to_owned()]);
        assert_eq!(cfg.codegen.modules["CSGTorus3D"], "csg");
        assert!(cfg.codegen.blocklist.blocks_class("SoftBody3D"));
        assert!(cfg.codegen.blocklist.blocks_method("Object", "emit_signal"));
        assert!(!cfg.codegen.blocklist.blocks_method("Node", "emit_signal"));
    }

    #[test]
    fn optional_tables_default_to_empty() {
        let cfg: GdbindConfig =
            toml::from_str("[codegen]\napi = \"a.json\"\nout = \"src\"\n").unwrap();
        assert!(cfg.codegen.features.is_empty());
        assert!(cfg.codegen.modules.is_empty());
        assert!(cfg.codegen.blocklist.classes.is_empty());
    }
}

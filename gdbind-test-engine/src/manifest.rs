// The class database, built from the same manifest the generator reads.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

const MANIFEST: &str = include_str!("../../gdbind-classes/api/extension_api.json");

#[derive(Deserialize)]
struct Manifest {
    classes: Vec<ClassDef>,
    #[serde(default)]
    singletons: Vec<SingletonDef>,
}

#[derive(Deserialize)]
struct SingletonDef {
    name: String,
}

#[derive(Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub inherits: Option<String>,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub signals: Vec<SignalDef>,
}

#[derive(Deserialize)]
pub struct MethodDef {
    pub name: String,
    #[serde(default)]
    pub is_virtual: bool,
    pub hash: i64,
    #[serde(default)]
    pub return_value: Option<ReturnDef>,
    #[serde(default)]
    pub arguments: Vec<ArgDef>,
}

#[derive(Deserialize)]
pub struct ReturnDef {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub ownership: Option<String>,
}

#[derive(Deserialize)]
pub struct ArgDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Deserialize)]
pub struct PropertyDef {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub setter: String,
    pub getter: String,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Deserialize)]
pub struct SignalDef {
    pub name: String,
}

/// What a method bind points at.
pub struct MethodEntry {
    pub class: String,
    pub name: String,
    pub args: Vec<String>,
    pub ret: Option<String>,
    pub transferred: bool,
}

pub struct ClassDb {
    pub classes: HashMap<String, ClassDef>,
    pub singletons: Vec<String>,
    binds: HashMap<(String, String), (i64, &'static MethodEntry)>,
}

impl ClassDb {
    fn load() -> ClassDb {
        let manifest: Manifest = match serde_json::from_str(MANIFEST) {
            Ok(m) => m,
            Err(e) => panic!("extension_api.json is malformed: {e}"),
        };
        let mut binds = HashMap::new();
        for class in &manifest.classes {
            for method in class.methods.iter().filter(|m| !m.is_virtual) {
                let entry: &'static MethodEntry = Box::leak(Box::new(MethodEntry {
                    class: class.name.clone(),
                    name: method.name.clone(),
                    args: method.arguments.iter().map(|a| a.ty.clone()).collect(),
                    ret: method.return_value.as_ref().map(|r| r.ty.clone()),
                    transferred: method
                        .return_value
                        .as_ref()
                        .is_some_and(|r| r.ownership.as_deref() == Some("transferred")),
                }));
                binds.insert((class.name.clone(), method.name.clone()), (method.hash, entry));
            }
        }
        ClassDb {
            singletons: manifest.singletons.into_iter().map(|s| s.name).collect(),
            classes: manifest.classes.into_iter().map(|c| (c.name.clone(), c)).collect(),
            binds,
        }
    }

    pub fn bind(&self, class: &str, method: &str, hash: i64) -> Option<&'static MethodEntry> {
        let (expected, entry) = self.binds.get(&(class.to_owned(), method.to_owned()))?;
        (*expected == hash).then_some(*entry)
    }

    pub fn parent(&self, class: &str) -> Option<&str> {
        self.classes.get(class)?.inherits.as_deref()
    }

    /// Declared classes from `class` up to the root.
    pub fn chain(&self, class: &str) -> Vec<&ClassDef> {
        let mut out = Vec::new();
        let mut current = self.classes.get(class);
        while let Some(def) = current {
            out.push(def);
            current = def.inherits.as_deref().and_then(|p| self.classes.get(p));
        }
        out
    }

    pub fn is_subclass(&self, class: &str, ancestor: &str) -> bool {
        self.chain(class).iter().any(|c| c.name == ancestor)
    }

    pub fn property_for_setter(&self, class: &str, setter: &str) -> Option<&PropertyDef> {
        self.classes.get(class)?.properties.iter().find(|p| p.setter == setter)
    }

    pub fn property_for_getter(&self, class: &str, getter: &str) -> Option<&PropertyDef> {
        self.classes.get(class)?.properties.iter().find(|p| p.getter == getter)
    }

    /// Property declared anywhere in `class`'s chain.
    pub fn property(&self, class: &str, name: &str) -> Option<&PropertyDef> {
        self.chain(class).into_iter().flat_map(|c| c.properties.iter()).find(|p| p.name == name)
    }

    pub fn has_method(&self, class: &str, name: &str) -> bool {
        self.chain(class).iter().any(|c| c.methods.iter().any(|m| m.name == name))
    }

    pub fn has_signal(&self, class: &str, name: &str) -> bool {
        self.chain(class).iter().any(|c| c.signals.iter().any(|s| s.name == name))
    }

    /// Argument and return types of a virtual declared in `class`'s chain.
    pub fn virtual_signature(
        &self,
        class: &str,
        name: &str,
    ) -> Option<(Vec<String>, Option<String>)> {
        let method = self
            .chain(class)
            .into_iter()
            .flat_map(|c| c.methods.iter())
            .find(|m| m.is_virtual && m.name == name)?;
        Some((
            method.arguments.iter().map(|a| a.ty.clone()).collect(),
            method.return_value.as_ref().map(|r| r.ty.clone()),
        ))
    }
}

pub fn db() -> &'static ClassDb {
    static DB: OnceLock<ClassDb> = OnceLock::new();
    DB.get_or_init(ClassDb::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_loads() {
        let db = db();
        assert!(db.classes.contains_key("CSGTorus3D"));
        assert_eq!(db.parent("CSGTorus3D"), Some("CSGPrimitive3D"));
        assert!(db.is_subclass("CodeEdit", "Control"));
        assert_eq!(db.singletons, vec!["Geometry2D".to_owned()]);
    }

    #[test]
    fn binds_check_the_hash() {
        let db = db();
        let class = &db.classes["NavigationMesh"];
        let method = class.methods.iter().find(|m| m.name == "add_polygon").map(|m| m.hash);
        let hash = method.unwrap_or_default();
        assert!(db.bind("NavigationMesh", "add_polygon", hash).is_some());
        assert!(db.bind("NavigationMesh", "add_polygon", hash + 1).is_none());
        assert!(db.bind("NavigationMesh", "no_such_method", hash).is_none());
    }

    #[test]
    fn virtual_signatures_are_inherited() {
        let (args, ret) = db().virtual_signature("CodeEdit", "_backspace").unwrap_or_default();
        assert_eq!(args, vec!["int".to_owned()]);
        assert_eq!(ret, None);
    }
}
